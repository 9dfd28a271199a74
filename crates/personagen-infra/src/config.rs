//! Configuration loader for personagen.
//!
//! Reads an optional TOML file into [`AppConfig`]. Falls back to defaults
//! when the file is missing or malformed.

use std::path::{Path, PathBuf};

use personagen_types::config::AppConfig;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "PERSONAGEN_CONFIG";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "personagen.toml";

/// Pick the config file to load.
///
/// Priority:
/// 1. `explicit` (the `--config` flag)
/// 2. `PERSONAGEN_CONFIG` environment variable
/// 3. `personagen.toml` in the working directory, if present
/// 4. `personagen/config.toml` under the platform config directory
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(CONFIG_ENV) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir().map(|dir| dir.join("personagen").join("config.toml"))
}

/// Load configuration from `path`.
///
/// - If the file does not exist, returns [`AppConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_app_config(path: &Path) -> AppConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return AppConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", path.display());
            config
        }
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_app_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_app_config(&tmp.path().join("personagen.toml")).await;
        assert_eq!(config.fetch.limit.get(), 100);
        assert_eq!(config.generation.model, "gpt-4");
    }

    #[tokio::test]
    async fn load_app_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("personagen.toml");
        tokio::fs::write(
            &config_path,
            r#"
[fetch]
limit = 40

[generation]
model = "gpt-4o"
temperature = 0.3

[reddit]
link_base = "https://old.reddit.com"
"#,
        )
        .await
        .unwrap();

        let config = load_app_config(&config_path).await;
        assert_eq!(config.fetch.limit.get(), 40);
        assert_eq!(config.generation.model, "gpt-4o");
        assert!((config.generation.temperature - 0.3).abs() < f64::EPSILON);
        assert_eq!(config.generation.max_tokens, 2000);
        assert_eq!(config.reddit.link_base, "https://old.reddit.com");
    }

    #[tokio::test]
    async fn load_app_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("personagen.toml");
        tokio::fs::write(&config_path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_app_config(&config_path).await;
        assert_eq!(config.fetch.limit.get(), 100);
    }

    #[tokio::test]
    async fn load_app_config_zero_limit_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("personagen.toml");
        tokio::fs::write(&config_path, "[fetch]\nlimit = 0\n").await.unwrap();

        let config = load_app_config(&config_path).await;
        assert_eq!(config.fetch.limit.get(), 100);
    }

    #[test]
    fn resolve_config_path_prefers_explicit() {
        let explicit = Path::new("/etc/personagen/custom.toml");
        assert_eq!(
            resolve_config_path(Some(explicit)),
            Some(PathBuf::from("/etc/personagen/custom.toml"))
        );
    }
}
