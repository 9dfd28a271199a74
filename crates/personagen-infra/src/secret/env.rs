//! Environment variable secret provider.

use super::SecretProvider;

/// Reads secrets from the process environment.
///
/// Run `dotenvy::dotenv()` first if a `.env` file should count.
pub struct EnvSecretProvider;

impl EnvSecretProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvSecretProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretProvider for EnvSecretProvider {
    fn get(&self, key: &str) -> Option<String> {
        match std::env::var(key) {
            Ok(val) if val.trim().is_empty() => None,
            Ok(val) => Some(val),
            Err(std::env::VarError::NotPresent) => None,
            Err(std::env::VarError::NotUnicode(_)) => {
                // Secrets must be valid strings; treat as unset.
                tracing::warn!(key, "ignoring non-unicode environment variable");
                None
            }
        }
    }
}
