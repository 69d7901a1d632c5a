//! Infrastructure layer module
//!
//! - Configuration loading and validation (figment over the process environment)
//! - Logging infrastructure (tracing subscriber set-up)

pub mod config;
pub mod logging;
