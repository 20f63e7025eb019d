//! Logger initialization over the `log` facade, backed by `env_logger`.
//!
//! Library code only emits through `log`; binaries and tests call
//! [`init_logging`] once.

mod init;

pub use init::{init_logging, LoggingConfig};
