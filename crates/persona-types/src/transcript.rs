use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Ordered message history for one personality.
///
/// Created lazily on first append; cleared in place; deleted only when the
/// owning personality is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transcript {
    pub personality_id: String,
    pub messages: Vec<Message>,
    /// Epoch milliseconds of the last append or clear; 0 for a transcript
    /// that has never been written.
    pub last_updated: i64,
}

impl Transcript {
    pub fn empty(personality_id: impl Into<String>) -> Self {
        Self {
            personality_id: personality_id.into(),
            messages: Vec::new(),
            last_updated: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
