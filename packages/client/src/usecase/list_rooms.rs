//! UseCase: ルーム一覧の取得
//!
//! 管理者は全ルーム、それ以外のロールは自分が参加しているルームのみを
//! 返します。トランスポート失敗は呼び出し元へ伝播させず、空リストに
//! 縮退します（ポーリング UI を止めないための方針）。

use std::sync::Arc;

use crate::domain::{ChatRepository, ChatRoom, Role, UserId};

/// ルーム一覧取得のユースケース
pub struct ListRoomsUseCase {
    repository: Arc<dyn ChatRepository>,
}

impl ListRoomsUseCase {
    /// 新しい ListRoomsUseCase を作成
    pub fn new(repository: Arc<dyn ChatRepository>) -> Self {
        Self { repository }
    }

    /// Fetch the rooms visible to the given identity.
    ///
    /// Admin sees everything; founders and investors only see rooms they
    /// participate in. On transport failure this logs a warning and returns
    /// an empty list — it never fails.
    pub async fn execute(&self, identity: &UserId, role: Role) -> Vec<ChatRoom> {
        let rooms = match self.repository.list_rooms().await {
            Ok(rooms) => rooms,
            Err(e) => {
                tracing::warn!("failed to fetch rooms: {e}");
                return Vec::new();
            }
        };

        if role.sees_all_rooms() {
            rooms
        } else {
            rooms
                .into_iter()
                .filter(|room| room.is_participant(identity))
                .collect()
        }
    }
}
