//! Todo CRUD endpoint handlers.

use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info};

use super::{helpers, parsing};
use crate::core::models::TaskUpdate;
use crate::core::store::TaskStore;
use crate::errors::StoreError;

#[derive(Debug, Default, Deserialize)]
struct CreateTodoBody {
    text: Option<String>,
}

fn store_error_response(e: &StoreError, action: &str) -> Value {
    match e {
        StoreError::NotFound(_) => helpers::err_response(404, "Todo not found"),
        StoreError::EmptyText => helpers::err_response(400, "Todo text is required"),
        StoreError::Unavailable(_) => {
            error!("Task store failure while trying to {}: {}", action, e);
            helpers::err_response(500, &format!("Failed to {action} todo"))
        }
    }
}

fn parse_id(raw: &str) -> Option<u64> {
    raw.parse::<u64>().ok()
}

pub async fn list(store: &dyn TaskStore) -> Value {
    match store.list().await {
        Ok(tasks) => helpers::ok_data(200, &tasks),
        Err(e) => {
            error!("Failed to list todos: {}", e);
            helpers::err_response(500, "Failed to fetch todos")
        }
    }
}

pub async fn create(store: &dyn TaskStore, payload: &Value) -> Value {
    let body: CreateTodoBody = match parsing::parse_json_body(payload) {
        Ok(b) => b,
        Err(e) => {
            error!("Create todo parse error: {}", e);
            return helpers::err_response(400, "Invalid JSON body");
        }
    };

    let Some(text) = body.text else {
        return helpers::err_response(400, "Todo text is required");
    };

    match store.insert(&text).await {
        Ok(task) => {
            info!(todo_id = task.id, "Created todo");
            helpers::ok_data(201, &task)
        }
        Err(e) => store_error_response(&e, "create"),
    }
}

pub async fn update(store: &dyn TaskStore, raw_id: &str, payload: &Value) -> Value {
    let Some(id) = parse_id(raw_id) else {
        return helpers::err_response(404, "Todo not found");
    };

    let update: TaskUpdate = match parsing::parse_json_body(payload) {
        Ok(u) => u,
        Err(e) => {
            error!("Update todo parse error: {}", e);
            return helpers::err_response(400, "Invalid JSON body");
        }
    };

    match store.update(id, update).await {
        Ok(task) => {
            info!(todo_id = task.id, completed = task.completed, "Updated todo");
            helpers::ok_data(200, &task)
        }
        Err(e) => store_error_response(&e, "update"),
    }
}

pub async fn delete(store: &dyn TaskStore, raw_id: &str) -> Value {
    let Some(id) = parse_id(raw_id) else {
        return helpers::err_response(404, "Todo not found");
    };

    match store.delete(id).await {
        Ok(task) => {
            info!(todo_id = task.id, "Deleted todo");
            helpers::ok_data(200, &task)
        }
        Err(e) => store_error_response(&e, "delete"),
    }
}
