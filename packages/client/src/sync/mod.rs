//! Polling sync engine: the background timers behind the messages pane.

pub mod engine;
pub mod event;

pub use engine::ChatSync;
pub use event::SyncEvent;
