//! Infrastructure layer for personagen.
//!
//! Contains implementations of the ports defined in `personagen-core`: the
//! Reddit record source, the OpenAI-compatible LLM provider, and the local
//! filesystem adapter. Also loads configuration and credentials.

pub mod config;
pub mod filesystem;
pub mod llm;
pub mod reddit;
pub mod secret;
