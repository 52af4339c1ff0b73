//! Pick a storage backend from configuration.
//!
//! Priority: file (durable) → memory (fallback).

use std::path::PathBuf;
use std::sync::Arc;

use persona_core::ports::StoragePort;
use persona_types::config::{StorageBackendType, StorageConfig};

use super::{FileStorage, MemoryStorage};

/// Default data directory: `<platform data dir>/persona-chat`.
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("persona-chat"))
}

/// Open the backend named by `config`.
/// Returns a trait object so callers are backend-agnostic.
pub async fn auto_storage(config: &StorageConfig) -> Arc<dyn StoragePort> {
    match config.backend {
        StorageBackendType::Memory => {
            log::info!("storage backend: memory");
            Arc::new(MemoryStorage::new())
        }
        StorageBackendType::File | StorageBackendType::Auto => {
            let dir = config.data_dir.clone().or_else(default_data_dir);
            match dir {
                Some(dir) => match FileStorage::open(&dir).await {
                    Ok(storage) => {
                        log::info!("storage backend: file ({})", dir.display());
                        Arc::new(storage)
                    }
                    Err(e) => {
                        log::warn!("file storage unavailable ({e}), falling back to memory");
                        Arc::new(MemoryStorage::new())
                    }
                },
                None => {
                    log::warn!("no data directory available, falling back to memory");
                    Arc::new(MemoryStorage::new())
                }
            }
        }
    }
}
