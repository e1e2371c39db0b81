use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use uuid::Uuid;

use inkpost_core::error::StorageError;
use inkpost_core::ports::FileStorage;

/// Local directory served publicly under `public_url`.
#[derive(Debug, Clone)]
pub struct PublicDiskStorage {
    root: PathBuf,
    public_url: String,
}

impl PublicDiskStorage {
    pub fn new(root: impl Into<PathBuf>, public_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_url: public_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a stored path below the root. Absolute paths and `..` are refused.
    fn resolve(&self, relative: &str) -> Result<PathBuf, StorageError> {
        let candidate = Path::new(relative);
        let escapes = candidate
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if relative.is_empty() || escapes {
            return Err(StorageError::Unsupported(format!("invalid path {relative}")));
        }
        Ok(self.root.join(candidate))
    }
}

#[async_trait]
impl FileStorage for PublicDiskStorage {
    async fn put(
        &self,
        directory: &str,
        extension: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        let relative = format!("{}/{}.{}", directory, Uuid::new_v4(), extension);
        let target = self.resolve(&relative)?;

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&target, &bytes).await?;

        tracing::info!(path = %relative, size = bytes.len(), "Stored upload");
        Ok(relative)
    }

    async fn delete(&self, path: &str) -> Result<(), StorageError> {
        let target = self.resolve(path)?;
        match tokio::fs::remove_file(&target).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.public_url, path.trim_start_matches('/'))
    }
}
