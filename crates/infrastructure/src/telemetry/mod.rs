//! Logging infrastructure
//!
//! Installs the global `tracing` subscriber from [`LoggingConfig`].

mod logging;

pub use logging::{LogFormat, LoggingConfig, LoggingError, init_logging};
