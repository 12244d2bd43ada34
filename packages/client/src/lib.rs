//! Polling chat client for the JEB incubator platform.
//!
//! This library is the messaging side of the incubator dashboard: it lists
//! two-party chat rooms, synchronizes their messages by polling the REST API,
//! tracks unread rooms, and submits new messages. All persistence and
//! business logic live behind the REST API; this crate is a pure consumer.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod sync;
pub mod ui;
pub mod usecase;

// Re-export entry point
pub use ui::run_console;
