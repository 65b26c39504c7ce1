use std::path::PathBuf;

use async_trait::async_trait;

use crate::storage::{generate_file_name, FileStorage, StorageError};

/// Stores uploads as plain files under a single directory
#[derive(Debug, Clone)]
pub struct DiskStorage {
    root: PathBuf,
}

impl DiskStorage {
    /// Create the storage, making sure the directory exists
    pub async fn new(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }
}

#[async_trait]
impl FileStorage for DiskStorage {
    async fn store(
        &self,
        original_name: Option<&str>,
        contents: &[u8],
    ) -> Result<String, StorageError> {
        let name = generate_file_name(original_name);
        tokio::fs::write(self.root.join(&name), contents).await?;
        tracing::debug!(file = %name, bytes = contents.len(), "Stored upload");
        Ok(name)
    }

    async fn remove(&self, name: &str) -> Result<(), StorageError> {
        match tokio::fs::remove_file(self.root.join(name)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
