//! Configuration types for personagen.
//!
//! `AppConfig` mirrors the optional `personagen.toml` file. Every section and
//! field has a default, so an empty file (or no file) is a valid config.
//! Credentials are not part of this file; they come from the environment.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default number of records fetched per kind.
pub const DEFAULT_FETCH_LIMIT: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(limit) => limit,
    None => unreachable!(),
};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub fetch: FetchSettings,
    pub generation: GenerationSettings,
    pub output: OutputSettings,
    pub reddit: RedditSettings,
}

/// Record fetching settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchSettings {
    /// Maximum posts and, separately, maximum comments to retrieve.
    pub limit: NonZeroUsize,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_FETCH_LIMIT,
        }
    }
}

/// Fixed parameters for the persona completion call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    /// Override for the OpenAI-compatible endpoint.
    pub base_url: Option<String>,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: "gpt-4".to_string(),
            temperature: 0.7,
            max_tokens: 2000,
            base_url: None,
        }
    }
}

/// Where persona files land.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub dir: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
        }
    }
}

/// Reddit endpoints and client identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RedditSettings {
    /// Used when `REDDIT_USER_AGENT` is not set.
    pub user_agent: String,
    /// Prefix joined with record permalinks in the prompt.
    pub link_base: String,
    pub api_base: String,
    pub auth_url: String,
}

impl Default for RedditSettings {
    fn default() -> Self {
        Self {
            user_agent: concat!("personagen/", env!("CARGO_PKG_VERSION")).to_string(),
            link_base: "https://reddit.com".to_string(),
            api_base: "https://oauth.reddit.com".to_string(),
            auth_url: "https://www.reddit.com/api/v1/access_token".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default_values() {
        let config = AppConfig::default();
        assert_eq!(config.fetch.limit.get(), 100);
        assert_eq!(config.generation.model, "gpt-4");
        assert!((config.generation.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.generation.max_tokens, 2000);
        assert_eq!(config.output.dir, PathBuf::from("."));
        assert_eq!(config.reddit.link_base, "https://reddit.com");
    }

    #[test]
    fn test_app_config_deserialize_empty() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.fetch.limit, DEFAULT_FETCH_LIMIT);
        assert!(config.generation.base_url.is_none());
    }

    #[test]
    fn test_app_config_deserialize_partial_sections() {
        let toml_str = r#"
[fetch]
limit = 25

[generation]
model = "gpt-4o-mini"

[output]
dir = "personas"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.fetch.limit.get(), 25);
        assert_eq!(config.generation.model, "gpt-4o-mini");
        // Unspecified fields keep their defaults
        assert_eq!(config.generation.max_tokens, 2000);
        assert_eq!(config.output.dir, PathBuf::from("personas"));
        assert_eq!(config.reddit.api_base, "https://oauth.reddit.com");
    }

    #[test]
    fn test_app_config_rejects_zero_limit() {
        let result = toml::from_str::<AppConfig>("[fetch]\nlimit = 0\n");
        assert!(result.is_err());
    }
}
