//! Console state and the selected-room state machine.

use std::collections::HashMap;

use crate::domain::{ChatRoom, RoomId, User, UserId};

/// Selected-room state machine.
///
/// `None -> Loading -> Ready`, transitioning back to `Loading` on every room
/// switch. A `Ready` room self-polls without a state transition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RoomView {
    /// No room selected
    #[default]
    None,
    /// Initial fetch of the room in flight
    Loading(RoomId),
    /// Room loaded and fast-polling
    Ready(RoomId),
}

impl RoomView {
    /// The room currently shown, in either `Loading` or `Ready` state.
    pub fn room(&self) -> Option<&RoomId> {
        match self {
            RoomView::None => None,
            RoomView::Loading(room) | RoomView::Ready(room) => Some(room),
        }
    }
}

/// Everything the console needs to render.
pub struct ConsoleState {
    /// Authenticated identity
    pub identity: User,
    /// Rooms visible to the identity, in listing order
    pub rooms: Vec<ChatRoom>,
    /// Display-name directory
    pub directory: HashMap<UserId, User>,
    /// Selected-room state machine
    pub view: RoomView,
}

impl ConsoleState {
    /// Label a room by the counterpart's display name, falling back to the
    /// raw uuid for accounts missing from the directory (or rooms the
    /// identity is not part of, which an admin may see).
    pub fn room_label(&self, room: &ChatRoom) -> String {
        let other = room
            .counterpart(&self.identity.id)
            .unwrap_or(&room.second_party);
        match self.directory.get(other) {
            Some(user) if !user.name.is_empty() => user.name.clone(),
            _ => other.to_string(),
        }
    }

    /// Label a sender inside the open room.
    pub fn sender_label(&self, sender: &UserId) -> String {
        if sender == &self.identity.id {
            return "me".to_string();
        }
        match self.directory.get(sender) {
            Some(user) if !user.name.is_empty() => user.name.clone(),
            _ => sender.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;

    fn user_id(n: u128) -> UserId {
        UserId::from_uuid(uuid::Uuid::from_u128(n))
    }

    fn state() -> ConsoleState {
        let me = User {
            id: user_id(1),
            name: "alice".to_string(),
            email: "alice@example.com".to_string(),
            role: Role::Founder,
        };
        let bob = User {
            id: user_id(2),
            name: "bob".to_string(),
            email: "bob@example.com".to_string(),
            role: Role::Investor,
        };
        let mut directory = HashMap::new();
        directory.insert(me.id.clone(), me.clone());
        directory.insert(bob.id.clone(), bob);
        ConsoleState {
            identity: me,
            rooms: Vec::new(),
            directory,
            view: RoomView::default(),
        }
    }

    #[test]
    fn test_view_room_accessor() {
        // テスト項目: Loading/Ready のどちらでも選択中ルームを取れる
        let room = crate::domain::RoomId::from_uuid(uuid::Uuid::from_u128(9));
        assert_eq!(RoomView::None.room(), None);
        assert_eq!(RoomView::Loading(room.clone()).room(), Some(&room));
        assert_eq!(RoomView::Ready(room.clone()).room(), Some(&room));
    }

    #[test]
    fn test_room_label_uses_counterpart_name() {
        // テスト項目: ルームのラベルは相手方の表示名になる
        let state = state();
        let room = ChatRoom::new(
            crate::domain::RoomId::from_uuid(uuid::Uuid::from_u128(9)),
            user_id(1),
            user_id(2),
        )
        .unwrap();
        assert_eq!(state.room_label(&room), "bob");
    }

    #[test]
    fn test_room_label_falls_back_to_uuid() {
        // テスト項目: ディレクトリにない相手は uuid で表示する
        let state = state();
        let room = ChatRoom::new(
            crate::domain::RoomId::from_uuid(uuid::Uuid::from_u128(9)),
            user_id(1),
            user_id(77),
        )
        .unwrap();
        assert_eq!(state.room_label(&room), user_id(77).to_string());
    }

    #[test]
    fn test_sender_label_for_own_messages() {
        // テスト項目: 自分の送信は "me" と表示される
        let state = state();
        assert_eq!(state.sender_label(&user_id(1)), "me");
        assert_eq!(state.sender_label(&user_id(2)), "bob");
    }
}
