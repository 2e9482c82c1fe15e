//! HTTP middleware.

pub mod logging;
pub mod timed_token;

pub use logging::log_requests;
pub use timed_token::{TOKEN_HEADER, require_timed_token};
