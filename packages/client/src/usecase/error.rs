//! UseCase layer error definitions.

use thiserror::Error;

use crate::domain::{RepositoryError, RoomError, ValueObjectError};

/// Errors from message submission.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SendMessageError {
    /// Content was empty (after trimming) or otherwise invalid; the
    /// transport layer is never reached in this case.
    #[error("invalid message content: {0}")]
    InvalidContent(#[from] ValueObjectError),

    /// The sender is not a participant of the room (fail closed)
    #[error("sender is not a participant of the room")]
    NotAParticipant,

    /// The API rejected or never received the message
    #[error(transparent)]
    Transport(#[from] RepositoryError),
}

/// Errors from room creation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CreateRoomError {
    /// Both parties were the same account
    #[error(transparent)]
    InvalidRoom(#[from] RoomError),

    /// The API rejected the creation
    #[error(transparent)]
    Transport(#[from] RepositoryError),
}
