//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ValueObjectError;

/// Maximum length of a message body in characters
pub const MESSAGE_CONTENT_MAX: usize = 10_000;

fn canonical_uuid(id: &str) -> Option<String> {
    uuid::Uuid::parse_str(id).ok().map(|u| u.to_string())
}

/// User identifier value object.
///
/// Wraps the UUID the platform assigns to every account (admin, founder or
/// investor alike).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Create a new UserId from its UUID string form.
    ///
    /// # Returns
    ///
    /// A Result containing the UserId or an error if the string is not a
    /// valid UUID.
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        canonical_uuid(&id)
            .map(Self)
            .ok_or(ValueObjectError::UserIdInvalidFormat(id))
    }

    /// Create a UserId from an already-parsed UUID.
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid.to_string())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Room identifier value object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(String);

impl RoomId {
    /// Create a new RoomId from its UUID string form.
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        canonical_uuid(&id)
            .map(Self)
            .ok_or(ValueObjectError::RoomIdInvalidFormat(id))
    }

    /// Create a RoomId from an already-parsed UUID.
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid.to_string())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message identifier value object.
///
/// Identifier equality is the sole deduplication key for messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(String);

impl MessageId {
    /// Create a new MessageId from its UUID string form.
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        canonical_uuid(&id)
            .map(Self)
            .ok_or(ValueObjectError::MessageIdInvalidFormat(id))
    }

    /// Create a MessageId from an already-parsed UUID.
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid.to_string())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message content value object.
///
/// The content is trimmed on construction; whitespace-only input is
/// rejected so an empty send never reaches the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageContent(String);

impl MessageContent {
    /// Create a new MessageContent from raw (untrimmed) input.
    pub fn new(content: &str) -> Result<Self, ValueObjectError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::MessageContentEmpty);
        }
        let len = trimmed.chars().count();
        if len > MESSAGE_CONTENT_MAX {
            return Err(ValueObjectError::MessageContentTooLong {
                max: MESSAGE_CONTENT_MAX,
                actual: len,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MessageContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds (UTC). Timestamps are the
/// sole ordering key for messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_new_success() {
        // テスト項目: 有効な UUID からユーザー ID を作成できる
        // given (前提条件):
        let id = "b83f2a11-6f5e-4c3a-9b1d-2e8a40d7c901".to_string();

        // when (操作):
        let result = UserId::new(id.clone());

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), id);
    }

    #[test]
    fn test_user_id_canonicalizes_case() {
        // テスト項目: 大文字の UUID は小文字の正規形に揃えられる
        // given (前提条件):
        let id = "B83F2A11-6F5E-4C3A-9B1D-2E8A40D7C901".to_string();

        // when (操作):
        let result = UserId::new(id).unwrap();

        // then (期待する結果):
        assert_eq!(result.as_str(), "b83f2a11-6f5e-4c3a-9b1d-2e8a40d7c901");
    }

    #[test]
    fn test_user_id_new_invalid_fails() {
        // テスト項目: UUID 形式でない文字列からは作成できない
        // given (前提条件):
        let id = "not-a-uuid".to_string();

        // when (操作):
        let result = UserId::new(id);

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            ValueObjectError::UserIdInvalidFormat("not-a-uuid".to_string())
        );
    }

    #[test]
    fn test_room_id_new_empty_fails() {
        // テスト項目: 空のルーム ID は作成できない
        // when (操作):
        let result = RoomId::new("".to_string());

        // then (期待する結果):
        assert!(result.is_err());
    }

    #[test]
    fn test_message_id_equality() {
        // テスト項目: 同じ値を持つ MessageId は等価（重複排除キー）
        // given (前提条件):
        let a = MessageId::from_uuid(uuid::Uuid::new_v4());
        let b = MessageId::new(a.as_str().to_string()).unwrap();
        let c = MessageId::from_uuid(uuid::Uuid::new_v4());

        // then (期待する結果):
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_message_content_new_trims() {
        // テスト項目: メッセージ内容は前後の空白を除去して保持される
        // when (操作):
        let result = MessageContent::new("  Hello, world!  ");

        // then (期待する結果):
        assert_eq!(result.unwrap().as_str(), "Hello, world!");
    }

    #[test]
    fn test_message_content_whitespace_only_fails() {
        // テスト項目: 空白のみの内容は作成できない
        // when (操作):
        let result = MessageContent::new("   \t\n ");

        // then (期待する結果):
        assert_eq!(result.unwrap_err(), ValueObjectError::MessageContentEmpty);
    }

    #[test]
    fn test_message_content_too_long_fails() {
        // テスト項目: 上限を超える内容は作成できない
        // given (前提条件):
        let content = "a".repeat(MESSAGE_CONTENT_MAX + 1);

        // when (操作):
        let result = MessageContent::new(&content);

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            ValueObjectError::MessageContentTooLong {
                max: MESSAGE_CONTENT_MAX,
                actual: MESSAGE_CONTENT_MAX + 1
            }
        );
    }

    #[test]
    fn test_timestamp_ordering() {
        // テスト項目: タイムスタンプは順序付けできる
        // given (前提条件):
        let ts1 = Timestamp::new(1000);
        let ts2 = Timestamp::new(2000);

        // then (期待する結果):
        assert!(ts1 < ts2);
        assert!(ts2 > ts1);
    }
}
