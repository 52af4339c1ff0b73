use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Endpoint of the hosted completion service the original client shipped
/// against. Accepts `{"messages": [...]}`, answers `{"completion": "..."}`.
pub const DEFAULT_ENDPOINT: &str = "https://toolkit.rork.com/text/llm/";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub completion: CompletionConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    pub endpoint: String,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackendType,
    /// Directory for the file backend; the platform data dir when unset.
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageBackendType {
    /// File storage when a data directory is available, memory otherwise.
    #[default]
    Auto,
    Memory,
    File,
}
