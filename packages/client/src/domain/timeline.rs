//! Per-room message timeline.
//!
//! Each room owns its own ordered message sequence; there is deliberately no
//! shared flat list, so a late poll response can only ever merge into the
//! room it was fetched for.

use std::collections::HashMap;

use super::{
    entity::ChatMessage,
    value_object::{MessageId, Timestamp},
};

/// One room's synchronized state: ordered messages plus the two timestamps
/// the unread logic compares.
#[derive(Debug, Clone, Default)]
pub struct RoomTimeline {
    /// Messages sorted ascending by sent timestamp
    messages: Vec<ChatMessage>,
    /// Sent time of the newest known message
    latest_at: Option<Timestamp>,
    /// Last time this room was seen by the user; `None` until first load
    last_seen: Option<Timestamp>,
}

impl RoomTimeline {
    /// Messages sorted ascending by sent timestamp.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Sent time of the newest known message, if any.
    pub fn latest_at(&self) -> Option<Timestamp> {
        self.latest_at
    }

    /// Last-seen timestamp, if the room has been loaded at least once.
    pub fn last_seen(&self) -> Option<Timestamp> {
        self.last_seen
    }

    /// Merge a fetched message batch into the timeline.
    ///
    /// The current messages are keyed by id, the fetched ones are overlaid
    /// (fetched wins on id collision), and the result is re-sorted by sent
    /// timestamp. The sort is stable, so equal timestamps keep their
    /// insertion order. Merging is idempotent: re-delivering already-known
    /// messages neither duplicates nor reorders anything.
    ///
    /// Returns `true` when the sorted id sequence changed; callers skip
    /// their re-render/scroll work otherwise. The merged content is always
    /// committed regardless.
    pub fn merge(&mut self, fetched: Vec<ChatMessage>) -> bool {
        let mut merged = self.messages.clone();
        let mut index: HashMap<MessageId, usize> = merged
            .iter()
            .enumerate()
            .map(|(i, m)| (m.id.clone(), i))
            .collect();

        for message in fetched {
            match index.get(&message.id) {
                Some(&i) => merged[i] = message,
                None => {
                    index.insert(message.id.clone(), merged.len());
                    merged.push(message);
                }
            }
        }

        // Vec::sort_by is stable: ties keep insertion order
        merged.sort_by(|a, b| a.sent_at.cmp(&b.sent_at));

        let changed = merged.len() != self.messages.len()
            || merged
                .iter()
                .zip(self.messages.iter())
                .any(|(a, b)| a.id != b.id);

        // Commit even when the id sequence is unchanged, so a collision
        // overwrite (e.g. server-side edit of a record) is not lost.
        self.latest_at = merged.last().map(|m| m.sent_at);
        self.messages = merged;
        changed
    }

    /// Initialize `last_seen` on the first load of a room: the latest
    /// message time, or the current wall-clock time for an empty room.
    /// No-op once initialized.
    pub fn init_last_seen(&mut self, now: Timestamp) {
        if self.last_seen.is_none() {
            self.last_seen = Some(self.latest_at.unwrap_or(now));
        }
    }

    /// Record that the user is looking at this room right now.
    pub fn mark_seen(&mut self, now: Timestamp) {
        self.last_seen = Some(now);
    }

    /// Whether the newest known message strictly postdates the last-seen
    /// mark. Never true for an unloaded or empty room.
    pub fn has_unseen(&self) -> bool {
        match (self.latest_at, self.last_seen) {
            (Some(latest), Some(seen)) => latest > seen,
            _ => false,
        }
    }

    /// Record a message this client just sent and had confirmed by the
    /// server: merge it in and advance both `latest_at` and `last_seen` to
    /// its sent time.
    pub fn record_sent(&mut self, message: ChatMessage) {
        let sent_at = message.sent_at;
        self.merge(vec![message]);
        if self.latest_at.is_none_or(|latest| latest < sent_at) {
            self.latest_at = Some(sent_at);
        }
        self.last_seen = Some(sent_at);
    }
}
