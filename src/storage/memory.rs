use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::storage::{generate_file_name, FileStorage, StorageError};

/// In-memory file storage for testing
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, name: &str) -> Option<Vec<u8>> {
        self.files.lock().await.get(name).cloned()
    }

    pub async fn len(&self) -> usize {
        self.files.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl FileStorage for InMemoryStorage {
    async fn store(
        &self,
        original_name: Option<&str>,
        contents: &[u8],
    ) -> Result<String, StorageError> {
        let name = generate_file_name(original_name);
        self.files
            .lock()
            .await
            .insert(name.clone(), contents.to_vec());
        Ok(name)
    }

    async fn remove(&self, name: &str) -> Result<(), StorageError> {
        self.files.lock().await.remove(name);
        Ok(())
    }
}
