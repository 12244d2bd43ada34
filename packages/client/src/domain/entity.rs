//! Core domain models for the chat client.

use serde::{Deserialize, Serialize};

use super::{
    error::RoomError,
    value_object::{MessageContent, MessageId, RoomId, Timestamp, UserId},
};

/// A two-party conversation container.
///
/// Rooms are created externally through the API and are never mutated or
/// deleted by this client. The participant pair is unordered; there are no
/// group rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRoom {
    /// Room identifier
    pub id: RoomId,
    /// One participant
    pub first_party: UserId,
    /// The other participant
    pub second_party: UserId,
}

impl ChatRoom {
    /// Create a new room.
    ///
    /// # Errors
    ///
    /// Returns `RoomError::IdenticalParties` if both participant ids are the
    /// same; a room always has exactly two distinct participants.
    pub fn new(id: RoomId, first_party: UserId, second_party: UserId) -> Result<Self, RoomError> {
        if first_party == second_party {
            return Err(RoomError::IdenticalParties(first_party.into_string()));
        }
        Ok(Self {
            id,
            first_party,
            second_party,
        })
    }

    /// Whether the given identity is one of the room's two participants.
    pub fn is_participant(&self, user: &UserId) -> bool {
        &self.first_party == user || &self.second_party == user
    }

    /// Resolve the other party of the room for the given identity.
    ///
    /// Returns `None` when the identity is not a participant — callers that
    /// need a receiver must fail closed in that case.
    pub fn counterpart(&self, user: &UserId) -> Option<&UserId> {
        if user == &self.first_party {
            Some(&self.second_party)
        } else if user == &self.second_party {
            Some(&self.first_party)
        } else {
            None
        }
    }
}

/// A single chat message, immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message identifier (deduplication key)
    pub id: MessageId,
    /// Owning room
    pub room_id: RoomId,
    /// Sender identity
    pub sender: UserId,
    /// Receiver identity
    pub receiver: UserId,
    /// Text body
    pub content: MessageContent,
    /// Sent timestamp (ordering key)
    pub sent_at: Timestamp,
}

impl ChatMessage {
    /// Create a new message.
    pub fn new(
        id: MessageId,
        room_id: RoomId,
        sender: UserId,
        receiver: UserId,
        content: MessageContent,
        sent_at: Timestamp,
    ) -> Self {
        Self {
            id,
            room_id,
            sender,
            receiver,
            content,
            sent_at,
        }
    }
}

/// Dashboard role of a platform account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Founder,
    Investor,
}

impl Role {
    /// Administrators see every room; founders and investors only see rooms
    /// they participate in.
    pub fn sees_all_rooms(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Parse a role from its wire form (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "founder" => Some(Role::Founder),
            "investor" => Some(Role::Investor),
            _ => None,
        }
    }
}

/// A platform account, as listed by the user directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Account identifier
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Dashboard role
    pub role: Role,
}
