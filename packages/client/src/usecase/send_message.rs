//! UseCase: メッセージ送信
//!
//! 送信内容の検証（トリム後に空なら送信しない）、宛先の解決（ルームの
//! 2 参加者から自分を除いた相手。参加者でなければフェイルクローズド）、
//! 送信確定レコードのタイムラインへの反映までを担当します。

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{
    ChatMessage, ChatRepository, ChatRoom, MessageContent, MessageDraft, MessageStore, UserId,
};

use super::error::SendMessageError;

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    repository: Arc<dyn ChatRepository>,
    store: Arc<Mutex<MessageStore>>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(repository: Arc<dyn ChatRepository>, store: Arc<Mutex<MessageStore>>) -> Self {
        Self { repository, store }
    }

    /// Submit a message to a room as the given identity.
    ///
    /// Validation failures (`InvalidContent`, `NotAParticipant`) never reach
    /// the transport layer. On success the server-confirmed record is merged
    /// into the room's timeline and both its latest/last-seen marks advance
    /// to the record's time, so one's own message never flags the room
    /// unread.
    pub async fn execute(
        &self,
        room: &ChatRoom,
        identity: &UserId,
        raw_content: &str,
    ) -> Result<ChatMessage, SendMessageError> {
        let content = MessageContent::new(raw_content)?;
        let receiver = room
            .counterpart(identity)
            .ok_or(SendMessageError::NotAParticipant)?;

        let draft = MessageDraft {
            content,
            sender: identity.clone(),
            receiver: receiver.clone(),
        };
        let confirmed = self.repository.post_message(&room.id, draft).await?;

        let mut store = self.store.lock().await;
        store.record_sent(confirmed.clone());
        Ok(confirmed)
    }
}
