//! LLM provider implementations.
//!
//! Contains the OpenAI-compatible implementation of the [`LlmProvider`]
//! trait defined in `personagen-core`, and a factory ([`create_provider`])
//! that builds it from [`GenerationSettings`].
//!
//! [`LlmProvider`]: personagen_core::llm::provider::LlmProvider

pub mod openai_compat;

use secrecy::SecretString;

use personagen_core::llm::box_provider::BoxLlmProvider;
use personagen_types::config::GenerationSettings;
use personagen_types::llm::LlmError;

use self::openai_compat::OpenAiCompatibleProvider;
use self::openai_compat::config::{OpenAiCompatConfig, capabilities_for_model, openai_defaults};

/// Create a [`BoxLlmProvider`] for persona generation.
///
/// Uses the public OpenAI endpoint unless `settings.base_url` overrides it.
///
/// # Errors
///
/// Returns [`LlmError::AuthenticationFailed`] when no API key is available.
pub fn create_provider(
    settings: &GenerationSettings,
    api_key: Option<SecretString>,
) -> Result<BoxLlmProvider, LlmError> {
    let key = api_key.ok_or(LlmError::AuthenticationFailed)?;

    let config = match settings.base_url.as_deref() {
        Some(base_url) => OpenAiCompatConfig {
            provider_name: "openai-compatible".into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: key,
            model: settings.model.clone(),
            capabilities: capabilities_for_model(&settings.model),
        },
        None => openai_defaults(key, &settings.model),
    };

    tracing::debug!(
        provider = %config.provider_name,
        base_url = %config.base_url,
        model = %config.model,
        "creating LLM provider"
    );
    Ok(BoxLlmProvider::new(OpenAiCompatibleProvider::new(config)))
}
