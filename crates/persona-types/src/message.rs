use serde::{Deserialize, Serialize};

/// Speaker of a chat turn.
///
/// Stored transcript messages only ever use `User` and `Assistant`;
/// `System` appears exclusively in completion payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single message in a transcript.
///
/// Messages are append-only: created once, never mutated, removed only by
/// clearing the whole transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub content: String,
    pub role: Role,
    /// Epoch milliseconds. Informational — transcript order is authoritative.
    pub timestamp: i64,
    /// Id of the personality whose transcript owns this message.
    pub personality_id: String,
}

impl Message {
    /// Mint a message with a fresh id and the current timestamp.
    pub fn new(
        personality_id: impl Into<String>,
        content: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: format!("msg-{}", uuid::Uuid::new_v4()),
            content: content.into(),
            role,
            timestamp: crate::now_millis(),
            personality_id: personality_id.into(),
        }
    }
}
