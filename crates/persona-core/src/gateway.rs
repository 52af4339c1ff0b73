//! The completion gateway — one user turn against the remote endpoint.
//!
//! Turns a transcript plus new user text into a single completion request
//! and writes the result back through the store. The user message is
//! appended optimistically before the network call, so a failed completion
//! still leaves it persisted; no assistant message is appended on failure.

use persona_types::message::{Message, Role};
use persona_types::prompt::CompletionRequest;
use persona_types::{ChatError, Result};

use crate::ports::CompletionPort;
use crate::store::ChatStore;

/// Transient state of the gateway, mirrored by the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatState {
    Idle,
    /// A completion request is in flight.
    Waiting,
    /// The last send failed; held until the next attempt clears it.
    Error(String),
}

pub struct ChatGateway {
    state: ChatState,
}

impl ChatGateway {
    pub fn new() -> Self {
        Self {
            state: ChatState::Idle,
        }
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    pub fn is_waiting(&self) -> bool {
        self.state == ChatState::Waiting
    }

    /// The last failure message, if the previous send failed.
    pub fn last_error(&self) -> Option<&str> {
        match &self.state {
            ChatState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Send one user turn and return the assistant's reply message.
    ///
    /// An unknown personality id fails before anything else happens: the
    /// endpoint is never called and the transcript is never touched.
    /// Otherwise the user message is persisted first, then one request is
    /// issued — no retry, no timeout override, no streaming. On failure the
    /// error is held in [`ChatState::Error`] and the store keeps exactly
    /// the user's message; the caller may simply retry.
    pub async fn send_message(
        &mut self,
        store: &mut ChatStore,
        completion: &dyn CompletionPort,
        personality_id: &str,
        text: &str,
    ) -> Result<Message> {
        let personality = match store.personality(personality_id) {
            Some(p) => p.clone(),
            None => {
                let err = ChatError::PersonalityNotFound(personality_id.to_string());
                self.state = ChatState::Error(err.to_string());
                return Err(err);
            }
        };

        self.state = ChatState::Waiting;

        // Snapshot the history before the optimistic append, so the new
        // text appears in the payload exactly once.
        let history = store.transcript(personality_id);

        if let Err(e) = store.append_message(personality_id, text, Role::User).await {
            self.state = ChatState::Error(e.to_string());
            return Err(e);
        }

        let request = CompletionRequest::build(&personality, &history.messages, text);

        match completion.complete(request).await {
            Ok(reply) => {
                match store
                    .append_message(personality_id, &reply, Role::Assistant)
                    .await
                {
                    Ok(message) => {
                        self.state = ChatState::Idle;
                        Ok(message)
                    }
                    Err(e) => {
                        self.state = ChatState::Error(e.to_string());
                        Err(e)
                    }
                }
            }
            Err(e) => {
                self.state = ChatState::Error(e.to_string());
                Err(e)
            }
        }
    }
}

impl Default for ChatGateway {
    fn default() -> Self {
        Self::new()
    }
}
