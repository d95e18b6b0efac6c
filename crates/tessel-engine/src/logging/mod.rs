//! Logging utilities.
//!
//! The engine itself only talks to the `log` facade. This module installs
//! `env_logger` behind it for binaries and tests that want output.

mod init;

pub use init::{LoggingConfig, init_logging};
