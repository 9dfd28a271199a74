//! Local filesystem adapter.
//!
//! Implements the `FileSystem` trait from `personagen-core` over `tokio::fs`.

use std::path::Path;

use personagen_core::service::fs::FileSystem;

/// Local filesystem implementation of the `FileSystem` trait.
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for LocalFileSystem {
    async fn write_file(&self, path: &Path, content: &str) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(path, content).await
    }

    async fn create_dir_all(&self, path: &Path) -> Result<(), std::io::Error> {
        tokio::fs::create_dir_all(path).await
    }

    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }
}
