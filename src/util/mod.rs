//! Utility modules for coursify

pub mod logging;

pub use logging::{init_from_env, init_logging, LoggingConfig};
