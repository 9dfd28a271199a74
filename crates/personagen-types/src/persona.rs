//! Persona document and run summary types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::record::RecordKind;
use crate::username::Username;

/// The assembled prompt text sent to the generation service.
///
/// Opaque to everything downstream of the prompt assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonaDocument(String);

impl PersonaDocument {
    pub fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Summary of a completed persona run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaReport {
    pub username: Username,
    /// Where the persona text was written.
    pub path: PathBuf,
    pub post_count: usize,
    pub comment_count: usize,
    /// Listings that ended on a swallowed fault.
    pub interrupted: Vec<RecordKind>,
}
