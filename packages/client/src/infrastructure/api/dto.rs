//! Wire types for the platform's REST API.
//!
//! Field names follow the API's snake_case `*_uuid` convention; `sent_at`
//! is an RFC 3339 string. Conversions into domain models validate every
//! field and fail with `RepositoryError::Decode`.

use serde::{Deserialize, Serialize};

use renraku_shared::time::rfc3339_to_millis;

use crate::domain::{
    ChatMessage, ChatRoom, MessageContent, MessageId, RepositoryError, Role, RoomId, Timestamp,
    User, UserId,
};

/// `GET /rooms/` element, `POST /rooms/` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRoomDto {
    pub uuid: String,
    pub first_party_uuid: String,
    pub second_party_uuid: String,
}

/// `GET /rooms/{uuid}` element, `PUT /rooms/{uuid}` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessageDto {
    pub uuid: String,
    pub chat_room_uuid: String,
    pub content: String,
    pub sender_uuid: String,
    pub receiver_uuid: String,
    /// RFC 3339
    pub sent_at: String,
}

/// `POST /rooms/` request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomDto {
    pub first_party_uuid: String,
    pub second_party_uuid: String,
}

/// `PUT /rooms/{uuid}` request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMessageDto {
    pub content: String,
    pub sender_uuid: String,
    pub receiver_uuid: String,
}

/// `GET /users/` element, `GET /users/me` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub uuid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: String,
}

/// `POST /auth/login` request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequestDto {
    pub email: String,
    pub password: String,
}

/// `POST /auth/login` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponseDto {
    pub token: String,
}

fn decode<T, E: std::fmt::Display>(result: Result<T, E>) -> Result<T, RepositoryError> {
    result.map_err(|e| RepositoryError::Decode(e.to_string()))
}

impl TryFrom<ChatRoomDto> for ChatRoom {
    type Error = RepositoryError;

    fn try_from(dto: ChatRoomDto) -> Result<Self, Self::Error> {
        let id = decode(RoomId::new(dto.uuid))?;
        let first_party = decode(UserId::new(dto.first_party_uuid))?;
        let second_party = decode(UserId::new(dto.second_party_uuid))?;
        decode(ChatRoom::new(id, first_party, second_party))
    }
}

impl TryFrom<ChatMessageDto> for ChatMessage {
    type Error = RepositoryError;

    fn try_from(dto: ChatMessageDto) -> Result<Self, Self::Error> {
        let sent_at = rfc3339_to_millis(&dto.sent_at).ok_or_else(|| {
            RepositoryError::Decode(format!("sent_at is not RFC 3339: {}", dto.sent_at))
        })?;
        Ok(ChatMessage::new(
            decode(MessageId::new(dto.uuid))?,
            decode(RoomId::new(dto.chat_room_uuid))?,
            decode(UserId::new(dto.sender_uuid))?,
            decode(UserId::new(dto.receiver_uuid))?,
            decode(MessageContent::new(&dto.content))?,
            Timestamp::new(sent_at),
        ))
    }
}

impl TryFrom<UserDto> for User {
    type Error = RepositoryError;

    fn try_from(dto: UserDto) -> Result<Self, Self::Error> {
        let role = Role::parse(&dto.role)
            .ok_or_else(|| RepositoryError::Decode(format!("unknown role: {}", dto.role)))?;
        Ok(User {
            id: decode(UserId::new(dto.uuid))?,
            name: dto.name,
            email: dto.email,
            role,
        })
    }
}
