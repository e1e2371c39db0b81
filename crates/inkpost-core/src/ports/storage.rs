//! File storage port - abstraction over the public upload disk.

use async_trait::async_trait;

use crate::error::StorageError;

/// Durable, publicly readable blob store addressed by directory and filename.
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Store `bytes` under `directory` with a generated filename ending in
    /// `.{extension}`. Returns the stored path relative to the disk root.
    async fn put(
        &self,
        directory: &str,
        extension: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError>;

    /// Remove a stored file. Missing files are not an error.
    async fn delete(&self, path: &str) -> Result<(), StorageError>;

    /// Public URL of a stored path.
    fn url(&self, path: &str) -> String;
}
