//! Logging utilities.
//!
//! Centralizes logger initialization. Library code only talks to the `log`
//! facade; binaries and tests call [`init_logging`] once.

mod init;

pub use init::{init_logging, LoggingConfig};
