//! Test fixtures: an in-memory fake of the chat API.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use renraku_client::domain::{
    ChatMessage, ChatRepository, ChatRoom, MessageContent, MessageDraft, MessageId,
    RepositoryError, Role, RoomId, Timestamp, User, UserId,
};

pub fn user_id(n: u128) -> UserId {
    UserId::from_uuid(uuid::Uuid::from_u128(n))
}

pub fn room_id(n: u128) -> RoomId {
    RoomId::from_uuid(uuid::Uuid::from_u128(n))
}

pub fn room(id: u128, first: u128, second: u128) -> ChatRoom {
    ChatRoom::new(room_id(id), user_id(first), user_id(second)).unwrap()
}

pub fn message(room: u128, id: u128, sent_at: i64, text: &str) -> ChatMessage {
    ChatMessage::new(
        MessageId::from_uuid(uuid::Uuid::from_u128(id)),
        room_id(room),
        user_id(1),
        user_id(2),
        MessageContent::new(text).unwrap(),
        Timestamp::new(sent_at),
    )
}

/// In-memory chat API double that counts fetches per room.
///
/// `fetch_count` is what the timer tests assert on: a cancelled poll task
/// must stop increasing its room's counter.
#[derive(Default)]
pub struct FakeChatRepository {
    rooms: Vec<ChatRoom>,
    messages: Mutex<HashMap<RoomId, Vec<ChatMessage>>>,
    fetch_counts: Mutex<HashMap<RoomId, usize>>,
    next_message_id: Mutex<u128>,
}

impl FakeChatRepository {
    pub fn with_rooms(rooms: Vec<ChatRoom>) -> Self {
        Self {
            rooms,
            next_message_id: Mutex::new(1_000_000),
            ..Self::default()
        }
    }

    /// Make a message visible to subsequent fetches.
    pub fn push_message(&self, message: ChatMessage) {
        self.messages
            .lock()
            .unwrap()
            .entry(message.room_id.clone())
            .or_default()
            .push(message);
    }

    /// How many times a room's messages have been fetched.
    pub fn fetch_count(&self, room: &RoomId) -> usize {
        self.fetch_counts
            .lock()
            .unwrap()
            .get(room)
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl ChatRepository for FakeChatRepository {
    async fn list_rooms(&self) -> Result<Vec<ChatRoom>, RepositoryError> {
        Ok(self.rooms.clone())
    }

    async fn create_room(
        &self,
        first_party: UserId,
        second_party: UserId,
    ) -> Result<ChatRoom, RepositoryError> {
        Ok(
            ChatRoom::new(RoomId::from_uuid(uuid::Uuid::new_v4()), first_party, second_party)
                .expect("fake create_room with identical parties"),
        )
    }

    async fn fetch_messages(&self, room: &RoomId) -> Result<Vec<ChatMessage>, RepositoryError> {
        *self
            .fetch_counts
            .lock()
            .unwrap()
            .entry(room.clone())
            .or_insert(0) += 1;
        Ok(self
            .messages
            .lock()
            .unwrap()
            .get(room)
            .cloned()
            .unwrap_or_default())
    }

    async fn post_message(
        &self,
        room: &RoomId,
        draft: MessageDraft,
    ) -> Result<ChatMessage, RepositoryError> {
        let id = {
            let mut next = self.next_message_id.lock().unwrap();
            *next += 1;
            *next
        };
        let sent_at = self
            .messages
            .lock()
            .unwrap()
            .get(room)
            .and_then(|m| m.iter().map(|m| m.sent_at.value()).max())
            .unwrap_or(0)
            + 1;
        let confirmed = ChatMessage::new(
            MessageId::from_uuid(uuid::Uuid::from_u128(id)),
            room.clone(),
            draft.sender,
            draft.receiver,
            draft.content,
            Timestamp::new(sent_at),
        );
        self.push_message(confirmed.clone());
        Ok(confirmed)
    }

    async fn list_users(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(Vec::new())
    }

    async fn current_user(&self) -> Result<User, RepositoryError> {
        Ok(User {
            id: user_id(1),
            name: "tester".to_string(),
            email: "tester@example.com".to_string(),
            role: Role::Founder,
        })
    }
}
