//! Middleware components for request processing.
//!
//! This module contains middleware for logging, request ID tracking,
//! error handling, and the bearer-presence gate.

mod auth;
mod error_handler;
mod logging;
mod request_id;

pub use auth::bearer_gate_middleware;
pub use error_handler::{error_to_status_code, global_error_handler};
pub use logging::logging_middleware;
pub use request_id::{RequestId, request_id_middleware};
