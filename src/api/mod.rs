//! API Lambda handler and request processing

pub mod handler;
pub mod helpers;
pub mod parsing;
pub mod todos;

// Re-export the main handler for convenience
pub use handler::{AppState, handle_request, handler};
