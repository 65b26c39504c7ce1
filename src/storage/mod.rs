pub mod disk;
pub mod memory;

pub use disk::DiskStorage;
pub use memory::InMemoryStorage;

use std::path::Path;

use async_trait::async_trait;
use uuid::Uuid;

/// Storage for uploaded documents.
/// Callers only ever persist the generated name, never file contents.
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Store the bytes and return the generated unique name
    async fn store(&self, original_name: Option<&str>, contents: &[u8])
        -> Result<String, StorageError>;

    /// Remove a previously stored file. Removing a missing file is not an error.
    async fn remove(&self, name: &str) -> Result<(), StorageError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("File storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build a unique file name keeping the (sanitized) extension of the upload.
pub fn generate_file_name(original_name: Option<&str>) -> String {
    let extension = original_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
        .unwrap_or_default();

    format!("{}{}", Uuid::new_v4(), extension)
}
