//! Events pushed from the background poll tasks to the UI.

use crate::domain::{ChatMessage, RoomId};

/// A state change the UI should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// The selected room's timeline changed; `messages` is the full sorted
    /// snapshot (the scroll-to-bottom trigger).
    RoomUpdated {
        room: RoomId,
        messages: Vec<ChatMessage>,
    },
    /// The unread set changed; `unread` is the full current set.
    UnreadChanged { unread: Vec<RoomId> },
}
