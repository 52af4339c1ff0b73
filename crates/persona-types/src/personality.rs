use serde::{Deserialize, Serialize};

/// Id prefix marking user-created personalities. Default-set ids carry no
/// prefix, so edit/delete eligibility is decidable from the id shape alone.
pub const CUSTOM_ID_PREFIX: &str = "custom-";

/// A named assistant persona: avatar, description, and the system prompt
/// that governs its behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personality {
    pub id: String,
    pub name: String,
    /// Avatar image URI — opaque to this crate.
    pub avatar: String,
    pub description: String,
    pub system_prompt: String,
    /// Epoch milliseconds.
    pub created_at: i64,
}

/// Fields supplied when creating a personality; id and timestamp are
/// assigned by the store.
#[derive(Debug, Clone, Default)]
pub struct PersonalityDraft {
    pub name: String,
    pub avatar: String,
    pub description: String,
    pub system_prompt: String,
}

impl Personality {
    /// Mint a user-created personality from a draft.
    pub fn from_draft(draft: PersonalityDraft) -> Self {
        Self {
            id: format!("{}{}", CUSTOM_ID_PREFIX, uuid::Uuid::new_v4()),
            name: draft.name,
            avatar: draft.avatar,
            description: draft.description,
            system_prompt: draft.system_prompt,
            created_at: crate::now_millis(),
        }
    }

    /// User-created personalities can be edited and deleted; the default
    /// set cannot.
    pub fn is_custom(&self) -> bool {
        is_custom_id(&self.id)
    }
}

pub fn is_custom_id(id: &str) -> bool {
    id.starts_with(CUSTOM_ID_PREFIX)
}
