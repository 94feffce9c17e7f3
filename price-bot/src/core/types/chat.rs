//! Chat identity type for core messages.

/// Chat (private or group) identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}
