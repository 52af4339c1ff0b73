//! File-backed storage: one JSON document per key in a data directory.
//!
//! Stands in for the mobile platform's async key-value store. Documents are
//! written to a temp file and renamed into place, so a crash mid-write
//! leaves the previous document intact rather than a truncated one.

use std::path::PathBuf;

use async_trait::async_trait;
use persona_core::ports::StoragePort;
use persona_types::{ChatError, Result};

pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open a storage directory, creating it if needed.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| ChatError::Storage(format!("{}: {e}", dir.display())))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl StoragePort for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path_for(key);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ChatError::Storage(format!("{}: {e}", path.display()))),
        }
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, value)
            .await
            .map_err(|e| ChatError::Storage(format!("{}: {e}", tmp.display())))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| ChatError::Storage(format!("{}: {e}", path.display())))?;
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "file"
    }
}
