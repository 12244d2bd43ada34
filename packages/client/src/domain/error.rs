//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// UserId invalid format error (not a valid UUID)
    #[error("UserId must be a valid UUID (got: {0})")]
    UserIdInvalidFormat(String),

    /// RoomId invalid format error (not a valid UUID)
    #[error("RoomId must be a valid UUID (got: {0})")]
    RoomIdInvalidFormat(String),

    /// MessageId invalid format error (not a valid UUID)
    #[error("MessageId must be a valid UUID (got: {0})")]
    MessageIdInvalidFormat(String),

    /// MessageContent validation error
    #[error("MessageContent cannot be empty after trimming")]
    MessageContentEmpty,

    /// MessageContent too long error
    #[error("MessageContent cannot exceed {max} characters (got {actual})")]
    MessageContentTooLong { max: usize, actual: usize },
}

/// Errors related to ChatRoom domain logic
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoomError {
    /// A room always has exactly two distinct participants
    #[error("a chat room requires two distinct participants (got {0} twice)")]
    IdenticalParties(String),
}
