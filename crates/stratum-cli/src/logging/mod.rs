//! Logger setup for the `stratum` binary.
//!
//! The library crates only speak the `log` facade; this is the one place a
//! backend gets installed.

mod init;

pub use init::{init_logging, LoggingConfig};
