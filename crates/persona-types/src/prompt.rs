//! Wire types for the completion endpoint.

use serde::{Deserialize, Serialize};

use crate::message::{Message, Role};
use crate::personality::Personality;

/// One role/content entry of the completion request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: Role,
    pub content: String,
}

/// Body of a completion call:
/// `{"messages":[{"role":"system","content":"..."}, ...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub messages: Vec<PromptMessage>,
}

impl CompletionRequest {
    /// Build the payload for one user turn: the personality's system prompt,
    /// the history so far, then the new user text.
    ///
    /// `history` must be the transcript as it stood before the new user
    /// message was appended, so the new text appears exactly once.
    pub fn build(personality: &Personality, history: &[Message], user_text: &str) -> Self {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(PromptMessage {
            role: Role::System,
            content: personality.system_prompt.clone(),
        });
        messages.extend(history.iter().map(|m| PromptMessage {
            role: m.role,
            content: m.content.clone(),
        }));
        messages.push(PromptMessage {
            role: Role::User,
            content: user_text.to_string(),
        });
        Self { messages }
    }
}
