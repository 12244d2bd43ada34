//! Shared utilities for Renraku.
//!
//! Logging setup and time helpers used by every crate in the workspace.

pub mod logging;
pub mod time;

pub use logging::setup_logger;
