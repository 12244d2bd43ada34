//! Client configuration.

use std::time::Duration;

/// Default base URL of the incubator platform API.
pub const DEFAULT_API_URL: &str = "http://localhost:24680/api";

/// Poll interval for the currently selected room.
pub const DEFAULT_ROOM_POLL: Duration = Duration::from_secs(4);

/// Poll interval for the cross-room unread scan.
pub const DEFAULT_UNREAD_POLL: Duration = Duration::from_secs(7);

/// Timing configuration for the sync engine.
///
/// The selected room is polled on a fast interval; all other rooms are
/// scanned on a slower one to flip unread flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncConfig {
    /// Interval between fetches of the selected room
    pub room_poll: Duration,
    /// Interval between unread scans across non-selected rooms
    pub unread_poll: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            room_poll: DEFAULT_ROOM_POLL,
            unread_poll: DEFAULT_UNREAD_POLL,
        }
    }
}
