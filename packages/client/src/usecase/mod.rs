//! UseCase 層
//!
//! 同期エンジンとコンソール UI から呼び出されるビジネスロジック。
//! Domain 層の Repository trait にのみ依存します（依存性の逆転）。

pub mod create_room;
pub mod directory;
pub mod error;
pub mod list_rooms;
pub mod send_message;
pub mod sync_room;
pub mod track_unread;

pub use create_room::CreateRoomUseCase;
pub use directory::LoadDirectoryUseCase;
pub use error::{CreateRoomError, SendMessageError};
pub use list_rooms::ListRoomsUseCase;
pub use send_message::SendMessageUseCase;
pub use sync_room::SyncRoomUseCase;
pub use track_unread::TrackUnreadUseCase;
