//! FileSystem trait for abstracting file I/O.
//!
//! The `LocalFileSystem` adapter lives in personagen-infra; tests use an
//! in-memory implementation.

use std::path::Path;

/// Abstraction over the filesystem operations the persona writer needs.
pub trait FileSystem: Send + Sync {
    /// Write string content to a file, replacing any existing content.
    fn write_file(
        &self,
        path: &Path,
        content: &str,
    ) -> impl std::future::Future<Output = Result<(), std::io::Error>> + Send;

    /// Create a directory and all parent directories.
    fn create_dir_all(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<(), std::io::Error>> + Send;

    /// Check whether a path exists.
    fn exists(&self, path: &Path) -> impl std::future::Future<Output = bool> + Send;
}
