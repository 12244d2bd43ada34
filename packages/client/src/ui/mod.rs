//! Terminal console for the messages pane.

pub mod console;
pub mod state;

pub use console::{ConsoleError, ConsoleOptions, Credentials, run_console};
pub use state::RoomView;
