//! Shared test doubles.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::service::fs::FileSystem;

/// In-memory filesystem. Clones share state.
#[derive(Clone, Default)]
pub struct MemoryFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
    dirs: Arc<Mutex<HashSet<PathBuf>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryFileSystem {
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn get(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn has_dir(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains(path)
    }

    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

impl FileSystem for MemoryFileSystem {
    async fn write_file(&self, path: &Path, content: &str) -> Result<(), std::io::Error> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only filesystem",
            ));
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    async fn create_dir_all(&self, path: &Path) -> Result<(), std::io::Error> {
        self.dirs.lock().unwrap().insert(path.to_path_buf());
        Ok(())
    }

    async fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path) || self.has_dir(path)
    }
}

/// Real filesystem over `tokio::fs`, for tempdir-backed tests.
pub struct TokioFileSystem;

impl FileSystem for TokioFileSystem {
    async fn write_file(&self, path: &Path, content: &str) -> Result<(), std::io::Error> {
        tokio::fs::write(path, content).await
    }

    async fn create_dir_all(&self, path: &Path) -> Result<(), std::io::Error> {
        tokio::fs::create_dir_all(path).await
    }

    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }
}
