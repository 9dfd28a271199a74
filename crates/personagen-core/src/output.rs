//! Persona file output.

use std::path::PathBuf;

use personagen_types::error::PersonaError;
use personagen_types::username::Username;

use crate::service::fs::FileSystem;

/// `user_persona_<username>.txt`
pub fn persona_filename(username: &Username) -> String {
    format!("user_persona_{username}.txt")
}

/// Writes generated persona text under a fixed output directory.
pub struct PersonaWriter<F> {
    fs: F,
    output_dir: PathBuf,
}

impl<F: FileSystem> PersonaWriter<F> {
    pub fn new(fs: F, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            output_dir: output_dir.into(),
        }
    }

    /// Full path the persona for `username` is written to.
    pub fn path_for(&self, username: &Username) -> PathBuf {
        self.output_dir.join(persona_filename(username))
    }

    /// Write `content` verbatim, overwriting any previous persona for the
    /// same account. Returns the written path.
    #[tracing::instrument(skip(self, content), fields(user = %username, bytes = content.len()))]
    pub async fn write(&self, username: &Username, content: &str) -> Result<PathBuf, PersonaError> {
        let path = self.path_for(username);

        self.fs
            .create_dir_all(&self.output_dir)
            .await
            .map_err(|source| PersonaError::WriteFailed {
                path: self.output_dir.clone(),
                source,
            })?;

        if self.fs.exists(&path).await {
            tracing::debug!(path = %path.display(), "overwriting existing persona file");
        }

        self.fs
            .write_file(&path, content)
            .await
            .map_err(|source| PersonaError::WriteFailed {
                path: path.clone(),
                source,
            })?;

        tracing::info!(path = %path.display(), "persona written");
        Ok(path)
    }
}
