//! UseCase: 1ルームのメッセージ同期
//!
//! 選択中ルームの初回ロードと高速ポーリングの両方がこのユースケースを
//! 通ります。フェッチ結果はそのルーム専用のタイムラインへマージされ、
//! ID 列が変化しなかった場合は「変更なし」を報告します（再描画抑止）。

use std::sync::Arc;

use tokio::sync::Mutex;

use renraku_shared::time::now_millis;

use crate::domain::{ChatRepository, MessageStore, RepositoryError, RoomId, Timestamp};

/// ルーム同期のユースケース
pub struct SyncRoomUseCase {
    repository: Arc<dyn ChatRepository>,
    store: Arc<Mutex<MessageStore>>,
}

impl SyncRoomUseCase {
    /// 新しい SyncRoomUseCase を作成
    pub fn new(repository: Arc<dyn ChatRepository>, store: Arc<Mutex<MessageStore>>) -> Self {
        Self { repository, store }
    }

    /// Fetch the room's messages and merge them into its timeline.
    ///
    /// On the room's first load this also initializes the last-seen mark
    /// (latest message time, or wall-clock time for an empty room).
    ///
    /// Returns `true` when the timeline changed. Transport failures
    /// propagate; polling callers degrade them to a logged warning.
    pub async fn execute(&self, room: &RoomId) -> Result<bool, RepositoryError> {
        let fetched = self.repository.fetch_messages(room).await?;
        let now = Timestamp::new(now_millis());
        let mut store = self.store.lock().await;
        Ok(store.merge_fetched(room, fetched, now))
    }
}
