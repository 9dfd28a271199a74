//! Configuration and defaults for the OpenAI-compatible provider.

use secrecy::SecretString;

use personagen_types::llm::ProviderCapabilities;

/// Public OpenAI endpoint.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for an OpenAI-compatible LLM provider.
///
/// Used to construct an [`super::OpenAiCompatibleProvider`].
pub struct OpenAiCompatConfig {
    /// Human-readable provider name (e.g., "openai").
    pub provider_name: String,
    /// Base URL for the API (e.g., "https://api.openai.com/v1").
    pub base_url: String,
    pub api_key: SecretString,
    /// Model used when a request leaves `model` empty.
    pub model: String,
    pub capabilities: ProviderCapabilities,
}

/// OpenAI default configuration.
pub fn openai_defaults(api_key: SecretString, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "openai".into(),
        base_url: OPENAI_BASE_URL.into(),
        api_key,
        model: model.into(),
        capabilities: capabilities_for_model(model),
    }
}

/// Context and output limits by model family.
pub fn capabilities_for_model(model: &str) -> ProviderCapabilities {
    if model.starts_with("gpt-4o") || model.starts_with("gpt-4.1") {
        ProviderCapabilities {
            max_context_tokens: 128_000,
            max_output_tokens: 16_384,
        }
    } else if model.starts_with("gpt-4-turbo") {
        ProviderCapabilities {
            max_context_tokens: 128_000,
            max_output_tokens: 4_096,
        }
    } else if model.starts_with("gpt-4") {
        ProviderCapabilities {
            max_context_tokens: 8_192,
            max_output_tokens: 8_192,
        }
    } else if model.starts_with("gpt-3.5") {
        ProviderCapabilities {
            max_context_tokens: 16_385,
            max_output_tokens: 4_096,
        }
    } else {
        // Conservative defaults for unknown models
        ProviderCapabilities {
            max_context_tokens: 128_000,
            max_output_tokens: 4_096,
        }
    }
}
