//! In-memory storage backend.
//! Fastest option but nothing survives process exit.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use persona_core::ports::StoragePort;
use persona_types::{ChatError, Result};

pub struct MemoryStorage {
    data: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            data: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StoragePort for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let data = self
            .data
            .lock()
            .map_err(|_| ChatError::Storage("memory backend lock poisoned".to_string()))?;
        Ok(data.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut data = self
            .data
            .lock()
            .map_err(|_| ChatError::Storage("memory backend lock poisoned".to_string()))?;
        data.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_overwrite() {
        let storage = MemoryStorage::new();
        assert!(storage.get("k").await.unwrap().is_none());

        storage.set("k", b"one").await.unwrap();
        assert_eq!(storage.get("k").await.unwrap().unwrap(), b"one");

        storage.set("k", b"two").await.unwrap();
        assert_eq!(storage.get("k").await.unwrap().unwrap(), b"two");
    }
}
