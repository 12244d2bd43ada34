//! UseCase: ユーザーディレクトリの取得
//!
//! ルーム一覧に相手の表示名を出すための補助。ルーム一覧と同じ縮退方針で、
//! 失敗時は空のマップを返します。

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{ChatRepository, User, UserId};

/// ディレクトリ取得のユースケース
pub struct LoadDirectoryUseCase {
    repository: Arc<dyn ChatRepository>,
}

impl LoadDirectoryUseCase {
    /// 新しい LoadDirectoryUseCase を作成
    pub fn new(repository: Arc<dyn ChatRepository>) -> Self {
        Self { repository }
    }

    /// Fetch the account directory keyed by user id.
    ///
    /// On transport failure this logs a warning and returns an empty map.
    pub async fn execute(&self) -> HashMap<UserId, User> {
        match self.repository.list_users().await {
            Ok(users) => users.into_iter().map(|u| (u.id.clone(), u)).collect(),
            Err(e) => {
                tracing::warn!("failed to fetch user directory: {e}");
                HashMap::new()
            }
        }
    }
}
