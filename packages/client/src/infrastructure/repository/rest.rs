//! REST-backed ChatRepository implementation.
//!
//! Maps the domain trait onto the platform's REST surface:
//!
//! ```text
//! list_rooms      GET  /rooms/
//! create_room     POST /rooms/
//! fetch_messages  GET  /rooms/{uuid}
//! post_message    PUT  /rooms/{uuid}
//! list_users      GET  /users/
//! current_user    GET  /users/me
//! ```

use async_trait::async_trait;

use crate::domain::{
    ChatMessage, ChatRepository, ChatRoom, MessageDraft, RepositoryError, RoomId, User, UserId,
};

use super::super::api::{
    ApiClient,
    dto::{ChatMessageDto, ChatRoomDto, CreateRoomDto, NewMessageDto, UserDto},
};

/// ChatRepository backed by the authenticated JSON transport.
pub struct RestChatRepository {
    api: ApiClient,
}

impl RestChatRepository {
    /// Create a repository over an authenticated client.
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ChatRepository for RestChatRepository {
    async fn list_rooms(&self) -> Result<Vec<ChatRoom>, RepositoryError> {
        let dtos: Vec<ChatRoomDto> = self.api.get("/rooms/").await?;
        dtos.into_iter().map(ChatRoom::try_from).collect()
    }

    async fn create_room(
        &self,
        first_party: UserId,
        second_party: UserId,
    ) -> Result<ChatRoom, RepositoryError> {
        let body = CreateRoomDto {
            first_party_uuid: first_party.into_string(),
            second_party_uuid: second_party.into_string(),
        };
        let dto: ChatRoomDto = self.api.post("/rooms/", &body).await?;
        ChatRoom::try_from(dto)
    }

    async fn fetch_messages(&self, room: &RoomId) -> Result<Vec<ChatMessage>, RepositoryError> {
        let dtos: Vec<ChatMessageDto> = self.api.get(&format!("/rooms/{room}")).await?;
        dtos.into_iter().map(ChatMessage::try_from).collect()
    }

    async fn post_message(
        &self,
        room: &RoomId,
        draft: MessageDraft,
    ) -> Result<ChatMessage, RepositoryError> {
        let body = NewMessageDto {
            content: draft.content.into_string(),
            sender_uuid: draft.sender.into_string(),
            receiver_uuid: draft.receiver.into_string(),
        };
        let dto: ChatMessageDto = self.api.put(&format!("/rooms/{room}"), &body).await?;
        ChatMessage::try_from(dto)
    }

    async fn list_users(&self) -> Result<Vec<User>, RepositoryError> {
        let dtos: Vec<UserDto> = self.api.get("/users/").await?;
        dtos.into_iter().map(User::try_from).collect()
    }

    async fn current_user(&self) -> Result<User, RepositoryError> {
        let dto: UserDto = self.api.get("/users/me").await?;
        User::try_from(dto)
    }
}
