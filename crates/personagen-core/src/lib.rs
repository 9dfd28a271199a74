//! Pipeline logic and port traits for personagen.
//!
//! This crate defines the ports (`RecordSource`, `LlmProvider`, `FileSystem`)
//! that the infrastructure layer implements. It depends only on
//! `personagen-types` and never on `personagen-infra` or any network crate.

pub mod fetch;
pub mod identity;
pub mod llm;
pub mod output;
pub mod persona;
pub mod prompt;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;
