//! Repository trait for the chat API (dependency inversion).
//!
//! The domain layer owns this trait; the infrastructure layer provides the
//! REST-backed implementation, and tests substitute mocks or fakes.

use async_trait::async_trait;
use thiserror::Error;

use super::{
    entity::{ChatMessage, ChatRoom, User},
    value_object::{MessageContent, RoomId, UserId},
};

/// Errors crossing the repository boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Network-level failure (connect, timeout, TLS, ...)
    #[error("transport failure: {0}")]
    Transport(String),

    /// The token was missing or rejected
    #[error("unauthorized: token missing or rejected")]
    Unauthorized,

    /// Non-2xx response other than auth failures
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The response body did not match the expected shape
    #[error("malformed response: {0}")]
    Decode(String),
}

/// A new message ready to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDraft {
    pub content: MessageContent,
    pub sender: UserId,
    pub receiver: UserId,
}

/// Access to the chat-related REST surface.
///
/// An empty list from any fetch is a valid result, not an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// `GET /rooms/` — every room visible to the current token.
    async fn list_rooms(&self) -> Result<Vec<ChatRoom>, RepositoryError>;

    /// `POST /rooms/` — create a two-party room.
    async fn create_room(
        &self,
        first_party: UserId,
        second_party: UserId,
    ) -> Result<ChatRoom, RepositoryError>;

    /// `GET /rooms/{uuid}` — full message list of a room.
    async fn fetch_messages(&self, room: &RoomId) -> Result<Vec<ChatMessage>, RepositoryError>;

    /// `PUT /rooms/{uuid}` — submit a message, returning the server-confirmed
    /// record (with its assigned id and timestamp).
    async fn post_message(
        &self,
        room: &RoomId,
        draft: MessageDraft,
    ) -> Result<ChatMessage, RepositoryError>;

    /// `GET /users/` — the account directory, for display names.
    async fn list_users(&self) -> Result<Vec<User>, RepositoryError>;

    /// `GET /users/me` — the authenticated identity.
    async fn current_user(&self) -> Result<User, RepositoryError>;
}
