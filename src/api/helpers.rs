//! Response builders for API Gateway proxy responses.
//!
//! Every response is JSON and carries permissive CORS headers so the
//! browser UI can call the API from another origin.

use serde::Serialize;
use serde_json::{Value, json};

fn cors_headers() -> Value {
    json!({
        "Content-Type": "application/json",
        "Access-Control-Allow-Origin": "*",
        "Access-Control-Allow-Methods": "GET,POST,PUT,DELETE,OPTIONS",
        "Access-Control-Allow-Headers": "Content-Type"
    })
}

/// Returns a response with the given status code and JSON body.
#[must_use]
pub fn json_response(status_code: u16, body: &Value) -> Value {
    json!({
        "statusCode": status_code,
        "headers": cors_headers(),
        "body": body.to_string()
    })
}

/// Returns `{ "success": true, "data": ... }`.
#[must_use]
pub fn ok_data<T: Serialize>(status_code: u16, data: &T) -> Value {
    json_response(status_code, &json!({ "success": true, "data": data }))
}

/// Returns `{ "success": false, "error": message }`.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json_response(status_code, &json!({ "success": false, "error": message }))
}

/// Returns a 204 answer to a CORS preflight.
#[must_use]
pub fn preflight() -> Value {
    json!({
        "statusCode": 204,
        "headers": cors_headers(),
        "body": ""
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_of(response: &Value) -> Value {
        serde_json::from_str(response["body"].as_str().unwrap()).unwrap()
    }

    #[test]
    fn test_err_response_shape() {
        let response = err_response(404, "Todo not found");
        assert_eq!(response["statusCode"], 404);
        assert_eq!(response["headers"]["Access-Control-Allow-Origin"], "*");
        assert_eq!(
            body_of(&response),
            json!({ "success": false, "error": "Todo not found" })
        );
    }

    #[test]
    fn test_ok_data_wraps_payload() {
        let response = ok_data(201, &json!({ "id": 4 }));
        assert_eq!(response["statusCode"], 201);
        assert_eq!(body_of(&response)["data"]["id"], 4);
        assert_eq!(body_of(&response)["success"], true);
    }
}
