//! UseCase: ルーム作成
//!
//! 2 参加者が同一でないことを検証してから API に作成を依頼します。
//! フェッチ系と違い、作成の失敗は呼び出し元へ伝播します。

use std::sync::Arc;

use crate::domain::{ChatRepository, ChatRoom, RoomError, UserId};

use super::error::CreateRoomError;

/// ルーム作成のユースケース
pub struct CreateRoomUseCase {
    repository: Arc<dyn ChatRepository>,
}

impl CreateRoomUseCase {
    /// 新しい CreateRoomUseCase を作成
    pub fn new(repository: Arc<dyn ChatRepository>) -> Self {
        Self { repository }
    }

    /// Create a two-party room between two distinct accounts.
    pub async fn execute(
        &self,
        first_party: UserId,
        second_party: UserId,
    ) -> Result<ChatRoom, CreateRoomError> {
        if first_party == second_party {
            return Err(CreateRoomError::InvalidRoom(RoomError::IdenticalParties(
                first_party.into_string(),
            )));
        }
        let room = self
            .repository
            .create_room(first_party, second_party)
            .await?;
        Ok(room)
    }
}
