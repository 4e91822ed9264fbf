//! Configuration, domain models and task storage

pub mod config;
pub mod models;
pub mod store;
