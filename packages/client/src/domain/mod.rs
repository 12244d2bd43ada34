//! Domain layer for the chat client.
//!
//! This module contains the chat model and the client-side synchronization
//! state, independent of data transfer objects (DTOs) and infrastructure
//! concerns.

pub mod entity;
pub mod error;
pub mod repository;
pub mod store;
pub mod timeline;
pub mod value_object;

pub use entity::{ChatMessage, ChatRoom, Role, User};
pub use error::{RoomError, ValueObjectError};
pub use repository::{ChatRepository, MessageDraft, RepositoryError};
pub use store::MessageStore;
pub use timeline::RoomTimeline;
pub use value_object::{MessageContent, MessageId, RoomId, Timestamp, UserId};

#[cfg(test)]
pub use repository::MockChatRepository;
