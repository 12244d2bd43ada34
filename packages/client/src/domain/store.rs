//! Client-side message store: one timeline per room plus the unread set.

use std::collections::{HashMap, HashSet};

use super::{
    entity::ChatMessage,
    timeline::RoomTimeline,
    value_object::{RoomId, Timestamp},
};

/// Session-local synchronization state across all visible rooms.
///
/// The unread set holds the rooms whose latest known message strictly
/// postdates their last-seen mark. It is transient: nothing here survives
/// the session.
#[derive(Debug, Default)]
pub struct MessageStore {
    timelines: HashMap<RoomId, RoomTimeline>,
    unread: HashSet<RoomId>,
}

impl MessageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The timeline of a room, if it has ever been fetched.
    pub fn timeline(&self, room: &RoomId) -> Option<&RoomTimeline> {
        self.timelines.get(room)
    }

    /// Sorted snapshot of a room's messages (empty if never fetched).
    pub fn messages(&self, room: &RoomId) -> Vec<ChatMessage> {
        self.timelines
            .get(room)
            .map(|t| t.messages().to_vec())
            .unwrap_or_default()
    }

    /// Merge a fetched batch into the room's timeline, initializing the
    /// last-seen mark on the room's first load.
    ///
    /// Returns `true` when the timeline actually changed.
    pub fn merge_fetched(
        &mut self,
        room: &RoomId,
        fetched: Vec<ChatMessage>,
        now: Timestamp,
    ) -> bool {
        let timeline = self.timelines.entry(room.clone()).or_default();
        let changed = timeline.merge(fetched);
        timeline.init_last_seen(now);
        changed
    }

    /// Flag the room as unread if its latest message strictly postdates its
    /// last-seen mark. Returns `true` when the flag newly flipped on.
    pub fn flag_if_unseen(&mut self, room: &RoomId) -> bool {
        let unseen = self
            .timelines
            .get(room)
            .is_some_and(RoomTimeline::has_unseen);
        if unseen {
            self.unread.insert(room.clone())
        } else {
            false
        }
    }

    /// Selection bookkeeping: clear the room's unread flag and move its
    /// last-seen mark to the current wall-clock time.
    pub fn mark_read(&mut self, room: &RoomId, now: Timestamp) {
        self.unread.remove(room);
        self.timelines.entry(room.clone()).or_default().mark_seen(now);
    }

    /// Record a server-confirmed sent message: merge it into its room and
    /// advance that room's latest/last-seen marks to the message's time.
    pub fn record_sent(&mut self, message: ChatMessage) {
        let room = message.room_id.clone();
        self.timelines.entry(room.clone()).or_default().record_sent(message);
        self.unread.remove(&room);
    }

    /// Whether the room is currently flagged unread.
    pub fn is_unread(&self, room: &RoomId) -> bool {
        self.unread.contains(room)
    }

    /// Snapshot of the unread room set.
    pub fn unread_rooms(&self) -> Vec<RoomId> {
        self.unread.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MessageContent, MessageId, UserId};

    fn room_id(n: u128) -> RoomId {
        RoomId::from_uuid(uuid::Uuid::from_u128(n))
    }

    fn message(room: u128, id: u128, sent_at: i64) -> ChatMessage {
        ChatMessage::new(
            MessageId::from_uuid(uuid::Uuid::from_u128(id)),
            room_id(room),
            UserId::from_uuid(uuid::Uuid::from_u128(1)),
            UserId::from_uuid(uuid::Uuid::from_u128(2)),
            MessageContent::new("hello").unwrap(),
            Timestamp::new(sent_at),
        )
    }

    #[test]
    fn test_timelines_are_keyed_per_room() {
        // テスト項目: ルームごとに独立したタイムラインへマージされる
        // given (前提条件):
        let mut store = MessageStore::new();

        // when (操作): 2つのルームの応答を順不同で取り込む
        store.merge_fetched(&room_id(1), vec![message(1, 10, 100)], Timestamp::new(0));
        store.merge_fetched(&room_id(2), vec![message(2, 20, 200)], Timestamp::new(0));

        // then (期待する結果): 互いのルームへ漏れない
        assert_eq!(store.messages(&room_id(1)).len(), 1);
        assert_eq!(store.messages(&room_id(2)).len(), 1);
        assert_eq!(store.messages(&room_id(1))[0].room_id, room_id(1));
    }

    #[test]
    fn test_unread_flips_on_newer_message_only() {
        // テスト項目: 未読フラグは last_seen を厳密に超えたときのみ立つ
        // given (前提条件): 初回ロードで last_seen = 最新メッセージ時刻
        let mut store = MessageStore::new();
        let room = room_id(1);
        store.merge_fetched(&room, vec![message(1, 10, 100)], Timestamp::new(0));
        assert!(!store.flag_if_unseen(&room));

        // when (操作): 新しいメッセージが観測される
        store.merge_fetched(&room, vec![message(1, 11, 150)], Timestamp::new(0));

        // then (期待する結果):
        assert!(store.flag_if_unseen(&room));
        assert!(store.is_unread(&room));
    }

    #[test]
    fn test_mark_read_clears_flag_and_moves_last_seen() {
        // テスト項目: 選択時に未読が消え、last_seen が現在時刻になる
        // given (前提条件):
        let mut store = MessageStore::new();
        let room = room_id(1);
        store.merge_fetched(&room, vec![message(1, 10, 100)], Timestamp::new(0));
        store.merge_fetched(&room, vec![message(1, 11, 150)], Timestamp::new(0));
        store.flag_if_unseen(&room);

        // when (操作):
        store.mark_read(&room, Timestamp::new(9_999));

        // then (期待する結果):
        assert!(!store.is_unread(&room));
        assert_eq!(
            store.timeline(&room).unwrap().last_seen(),
            Some(Timestamp::new(9_999))
        );
        assert!(!store.flag_if_unseen(&room));
    }

    #[test]
    fn test_record_sent_clears_unread() {
        // テスト項目: 自分の送信確定でそのルームの未読は消える
        // given (前提条件):
        let mut store = MessageStore::new();
        let room = room_id(1);
        store.merge_fetched(&room, vec![message(1, 10, 100)], Timestamp::new(0));
        store.merge_fetched(&room, vec![message(1, 11, 150)], Timestamp::new(0));
        store.flag_if_unseen(&room);

        // when (操作):
        store.record_sent(message(1, 12, 200));

        // then (期待する結果):
        assert!(!store.is_unread(&room));
        assert_eq!(store.messages(&room).len(), 3);
        assert!(!store.flag_if_unseen(&room));
    }
}
