//! Shared domain types for personagen.
//!
//! Records, usernames, persona documents, configuration and the error
//! enums used across the workspace.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod error;
pub mod llm;
pub mod persona;
pub mod record;
pub mod username;
