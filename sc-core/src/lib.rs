//! Shotcut Core - Foundation types, error handling, configuration, and logging.
//!
//! This crate provides the shared foundation used by the Shotcut API client:
//! - Client configuration (API key, base URL, timeout)
//! - The error taxonomy covering every failure mode of an API call
//! - Structured logging with tracing
//! - Common constants (endpoints root, headers, known value sets)

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;

// Re-export commonly used items at the crate root
pub use config::ClientConfig;
pub use error::{RateLimitReset, ScError, ScResult};
pub use logging::init_console_logging;
