//! UseCase: 未読ルームの検出
//!
//! 低速ポーリングのたびに、選択中以外の各ルームをフェッチして最新時刻を
//! last_seen と比較し、厳密に新しいものがあれば未読集合へ追加します。
//! 個々のルームのフェッチ失敗は警告ログに落として続行します
//! （サイレントな縮退、リトライなし）。

use std::sync::Arc;

use tokio::sync::Mutex;

use renraku_shared::time::now_millis;

use crate::domain::{ChatRepository, MessageStore, RoomId, Timestamp};

/// 未読検出のユースケース
pub struct TrackUnreadUseCase {
    repository: Arc<dyn ChatRepository>,
    store: Arc<Mutex<MessageStore>>,
}

impl TrackUnreadUseCase {
    /// 新しい TrackUnreadUseCase を作成
    pub fn new(repository: Arc<dyn ChatRepository>, store: Arc<Mutex<MessageStore>>) -> Self {
        Self { repository, store }
    }

    /// Scan every room except the selected one and flag unread rooms.
    ///
    /// Returns the rooms whose unread flag newly flipped on during this
    /// scan.
    pub async fn execute(&self, rooms: &[RoomId], selected: Option<&RoomId>) -> Vec<RoomId> {
        let mut newly_unread = Vec::new();

        for room in rooms {
            if Some(room) == selected {
                continue;
            }

            let fetched = match self.repository.fetch_messages(room).await {
                Ok(fetched) => fetched,
                Err(e) => {
                    tracing::warn!("unread scan failed for room {room}: {e}");
                    continue;
                }
            };

            let now = Timestamp::new(now_millis());
            let mut store = self.store.lock().await;
            store.merge_fetched(room, fetched, now);
            if store.flag_if_unseen(room) {
                newly_unread.push(room.clone());
            }
        }

        newly_unread
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ChatMessage, MessageContent, MessageId, MockChatRepository, RepositoryError, UserId,
    };

    fn room_id(n: u128) -> RoomId {
        RoomId::from_uuid(uuid::Uuid::from_u128(n))
    }

    fn message(room: u128, id: u128, sent_at: i64) -> ChatMessage {
        ChatMessage::new(
            MessageId::from_uuid(uuid::Uuid::from_u128(id)),
            room_id(room),
            UserId::from_uuid(uuid::Uuid::from_u128(10)),
            UserId::from_uuid(uuid::Uuid::from_u128(11)),
            MessageContent::new("hi").unwrap(),
            Timestamp::new(sent_at),
        )
    }

    #[tokio::test]
    async fn test_selected_room_is_skipped() {
        // テスト項目: 選択中のルームはスキャン対象から除外される
        // given (前提条件):
        let mut mock = MockChatRepository::new();
        let skipped = room_id(1);
        let check = skipped.clone();
        mock.expect_fetch_messages()
            .withf(move |room| room != &check)
            .times(1)
            .returning(|_| Ok(vec![]));
        let store = Arc::new(Mutex::new(MessageStore::new()));
        let usecase = TrackUnreadUseCase::new(Arc::new(mock), store);

        // when (操作): room 1 を選択した状態で 2 ルームをスキャン
        let newly = usecase
            .execute(&[room_id(1), room_id(2)], Some(&skipped))
            .await;

        // then (期待する結果): room 2 のみフェッチされ、未読はなし
        assert!(newly.is_empty());
    }

    #[tokio::test]
    async fn test_new_message_flags_unselected_room() {
        // テスト項目: 未選択ルームに新着があると未読フラグが立つ
        // given (前提条件): 初回スキャンで既読状態を作る
        let mut mock = MockChatRepository::new();
        let mut calls = 0;
        mock.expect_fetch_messages().returning(move |_| {
            calls += 1;
            if calls == 1 {
                Ok(vec![message(2, 20, 100)])
            } else {
                Ok(vec![message(2, 20, 100), message(2, 21, 200)])
            }
        });
        let store = Arc::new(Mutex::new(MessageStore::new()));
        let usecase = TrackUnreadUseCase::new(Arc::new(mock), store.clone());
        let rooms = [room_id(2)];
        assert!(usecase.execute(&rooms, None).await.is_empty());

        // when (操作): 新着を含む2回目のスキャン
        let newly = usecase.execute(&rooms, None).await;

        // then (期待する結果):
        assert_eq!(newly, vec![room_id(2)]);
        assert!(store.lock().await.is_unread(&room_id(2)));
    }

    #[tokio::test]
    async fn test_failed_room_is_skipped_and_scan_continues() {
        // テスト項目: 1ルームの失敗は他ルームのスキャンを止めない
        // given (前提条件): room 1 は失敗、room 2 は新着あり
        let mut mock = MockChatRepository::new();
        let failing = room_id(1);
        mock.expect_fetch_messages().returning(move |room| {
            if room == &failing {
                Err(RepositoryError::Transport("timeout".into()))
            } else {
                Ok(vec![message(2, 20, 100)])
            }
        });
        let store = Arc::new(Mutex::new(MessageStore::new()));
        // room 2 を既読済みの状態にしておく
        store.lock().await.merge_fetched(
            &room_id(2),
            vec![],
            Timestamp::new(50),
        );
        let usecase = TrackUnreadUseCase::new(Arc::new(mock), store.clone());

        // when (操作):
        let newly = usecase.execute(&[room_id(1), room_id(2)], None).await;

        // then (期待する結果): room 2 の新着だけが検出される
        assert_eq!(newly, vec![room_id(2)]);
    }
}
