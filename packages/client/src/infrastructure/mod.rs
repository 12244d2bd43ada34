//! Infrastructure layer: REST transport and the repository implementation
//! backed by it.

pub mod api;
pub mod repository;

pub use api::{ApiClient, ApiError, Session};
pub use repository::RestChatRepository;
