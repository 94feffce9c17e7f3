//! Incoming message type for the core model.

use chrono::{DateTime, Utc};

use super::{chat::Chat, user::User};

/// A single incoming text message. `content` is empty for non-text messages.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
