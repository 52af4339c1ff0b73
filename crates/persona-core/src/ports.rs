//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `persona-core` (pure Rust).
//! Implementations live in `persona-platform` (native adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use persona_types::prompt::CompletionRequest;
use persona_types::Result;

// ─── Storage Port ────────────────────────────────────────────

/// Key-value storage for whole-collection JSON documents.
///
/// Values are opaque byte blobs; every `set` is a full-document overwrite
/// with no partial or merge semantics.
#[async_trait]
pub trait StoragePort: Send + Sync {
    /// Get the document stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Overwrite the document stored under `key`.
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Completion Port ─────────────────────────────────────────

/// A remote completion endpoint: one request, one assistant reply.
///
/// The call is atomic from the caller's perspective — it fully succeeds
/// with the reply text or fully fails. No retry, no streaming.
#[async_trait]
pub trait CompletionPort: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String>;
}
