//! The chat store — personalities and transcripts, persisted whole.
//!
//! Owns the authoritative in-memory collections the UI layer reads, and
//! writes each collection back as a single JSON document after every
//! mutation. There is no incremental diff: callers always persist the full
//! updated collection, so concurrent saves race with last-write-wins
//! semantics on a single-device client.
//!
//! Storage sits behind [`StoragePort`], so the store runs against a fake
//! in tests.

use std::collections::HashMap;
use std::sync::Arc;

use persona_types::defaults::default_personalities;
use persona_types::message::{Message, Role};
use persona_types::personality::{is_custom_id, Personality, PersonalityDraft};
use persona_types::transcript::Transcript;
use persona_types::{now_millis, Result};

use crate::ports::StoragePort;

/// Storage key for the personalities document (JSON array).
pub const PERSONALITIES_KEY: &str = "ai-chat-personalities";
/// Storage key for the transcripts document (JSON object keyed by
/// personality id).
pub const CHATS_KEY: &str = "ai-chat-messages";

pub struct ChatStore {
    storage: Arc<dyn StoragePort>,
    personalities: Vec<Personality>,
    chats: HashMap<String, Transcript>,
}

impl ChatStore {
    /// Open the store, loading both collections from storage.
    ///
    /// A missing personalities document is seeded with the default set and
    /// persisted before this returns, so the registry never observes an
    /// empty collection on first run. A corrupt or unreadable document
    /// falls back to the defaults (personalities) or an empty map (chats)
    /// instead of failing — local corruption never blocks the client,
    /// which is why this constructor is infallible.
    pub async fn open(storage: Arc<dyn StoragePort>) -> Self {
        let personalities = match storage.get(PERSONALITIES_KEY).await {
            Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                Ok(list) => list,
                Err(e) => {
                    log::warn!("corrupt personalities document ({e}), using defaults");
                    default_personalities()
                }
            },
            Ok(None) => {
                let defaults = default_personalities();
                match serde_json::to_vec(&defaults) {
                    Ok(bytes) => {
                        if let Err(e) = storage.set(PERSONALITIES_KEY, &bytes).await {
                            log::warn!("failed to seed default personalities: {e}");
                        } else {
                            log::info!(
                                "seeded {} default personalities ({})",
                                defaults.len(),
                                storage.backend_name()
                            );
                        }
                    }
                    Err(e) => log::warn!("failed to encode default personalities: {e}"),
                }
                defaults
            }
            Err(e) => {
                log::warn!("failed to read personalities ({e}), using defaults");
                default_personalities()
            }
        };

        let chats = match storage.get(CHATS_KEY).await {
            Ok(Some(bytes)) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                log::warn!("corrupt chats document ({e}), starting empty");
                HashMap::new()
            }),
            Ok(None) => HashMap::new(),
            Err(e) => {
                log::warn!("failed to read chats ({e}), starting empty");
                HashMap::new()
            }
        };

        Self {
            storage,
            personalities,
            chats,
        }
    }

    // ─── Personality registry ────────────────────────────────

    /// All personalities, defaults first (insertion order is preserved).
    pub fn personalities(&self) -> &[Personality] {
        &self.personalities
    }

    pub fn personality(&self, id: &str) -> Option<&Personality> {
        self.personalities.iter().find(|p| p.id == id)
    }

    /// Create a personality from the draft and persist the full collection.
    pub async fn add_personality(&mut self, draft: PersonalityDraft) -> Result<Personality> {
        let personality = Personality::from_draft(draft);
        self.personalities.push(personality.clone());
        self.persist_personalities().await?;
        Ok(personality)
    }

    /// Replace the record matching `personality.id` and persist.
    ///
    /// An unknown id leaves the collection unchanged; the document is
    /// re-persisted either way, per the whole-collection overwrite contract.
    pub async fn update_personality(&mut self, personality: Personality) -> Result<()> {
        if let Some(slot) = self
            .personalities
            .iter_mut()
            .find(|p| p.id == personality.id)
        {
            *slot = personality;
        }
        self.persist_personalities().await
    }

    /// Delete a custom personality and its transcript.
    ///
    /// Default-set ids are protected: the call is a no-op. Both collections
    /// are persisted in the same logical operation (personalities first);
    /// there is no cross-document transaction.
    pub async fn delete_personality(&mut self, id: &str) -> Result<()> {
        if !is_custom_id(id) {
            log::debug!("refusing to delete default personality {id}");
            return Ok(());
        }
        self.personalities.retain(|p| p.id != id);
        self.chats.remove(id);
        self.persist_personalities().await?;
        self.persist_chats().await
    }

    // ─── Chat transcripts ────────────────────────────────────

    /// The transcript for `personality_id`, or a fresh empty one when none
    /// exists. Reading never creates storage state.
    pub fn transcript(&self, personality_id: &str) -> Transcript {
        self.chats
            .get(personality_id)
            .cloned()
            .unwrap_or_else(|| Transcript::empty(personality_id))
    }

    /// Append one message, creating the transcript on first use, and
    /// persist the whole transcript map. Appends are strictly sequential
    /// per transcript: messages render in call order.
    pub async fn append_message(
        &mut self,
        personality_id: &str,
        content: &str,
        role: Role,
    ) -> Result<Message> {
        let message = Message::new(personality_id, content, role);
        let chat = self
            .chats
            .entry(personality_id.to_string())
            .or_insert_with(|| Transcript::empty(personality_id));
        chat.messages.push(message.clone());
        chat.last_updated = message.timestamp;
        self.persist_chats().await?;
        Ok(message)
    }

    /// Empty the transcript in place, leaving the personality record
    /// intact; no-op when no transcript exists yet.
    pub async fn clear_transcript(&mut self, personality_id: &str) -> Result<()> {
        match self.chats.get_mut(personality_id) {
            Some(chat) => {
                chat.messages.clear();
                chat.last_updated = now_millis();
                self.persist_chats().await
            }
            None => Ok(()),
        }
    }

    // ─── Persistence ─────────────────────────────────────────

    async fn persist_personalities(&self) -> Result<()> {
        let bytes = serde_json::to_vec(&self.personalities)?;
        self.storage.set(PERSONALITIES_KEY, &bytes).await
    }

    async fn persist_chats(&self) -> Result<()> {
        let bytes = serde_json::to_vec(&self.chats)?;
        self.storage.set(CHATS_KEY, &bytes).await
    }
}
