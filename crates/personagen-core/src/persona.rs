//! Persona generation via LLM.
//!
//! `PersonaGenerator` sends an assembled [`PersonaDocument`] to the configured
//! provider as a single user message under a fixed system instruction and
//! returns the generated text untouched. No retries: any provider fault
//! becomes [`PersonaError::GenerationFailed`].

use personagen_types::config::GenerationSettings;
use personagen_types::error::PersonaError;
use personagen_types::llm::{CompletionRequest, LlmError, Message, MessageRole};
use personagen_types::persona::PersonaDocument;

use crate::llm::box_provider::BoxLlmProvider;

/// System prompt for the persona generation call.
pub const PERSONA_SYSTEM_PROMPT: &str =
    "You are an expert in social profiling and behavior analysis.";

pub struct PersonaGenerator {
    provider: Option<BoxLlmProvider>,
    settings: GenerationSettings,
}

impl PersonaGenerator {
    pub fn new(provider: BoxLlmProvider, settings: GenerationSettings) -> Self {
        Self {
            provider: Some(provider),
            settings,
        }
    }

    /// A generator with no backend (e.g. no API key configured).
    ///
    /// Every call fails with `GenerationFailed(AuthenticationFailed)`, so a
    /// missing key surfaces at generation time rather than at startup.
    pub fn unconfigured(settings: GenerationSettings) -> Self {
        Self {
            provider: None,
            settings,
        }
    }

    /// Build the completion request for a document.
    pub fn build_request(&self, document: &PersonaDocument) -> CompletionRequest {
        CompletionRequest {
            model: self.settings.model.clone(),
            messages: vec![Message {
                role: MessageRole::User,
                content: document.as_str().to_string(),
            }],
            system: Some(PERSONA_SYSTEM_PROMPT.to_string()),
            max_tokens: self.settings.max_tokens,
            temperature: Some(self.settings.temperature),
        }
    }

    /// Generate persona text for a document.
    #[tracing::instrument(
        name = "generate_persona",
        skip(self, document),
        fields(
            gen_ai.operation.name = "generate_persona",
            gen_ai.request.model = %self.settings.model,
            gen_ai.request.temperature = self.settings.temperature,
            gen_ai.request.max_tokens = self.settings.max_tokens,
            prompt_chars = document.as_str().len()
        )
    )]
    pub async fn generate(&self, document: &PersonaDocument) -> Result<String, PersonaError> {
        let Some(provider) = self.provider.as_ref() else {
            tracing::warn!("no LLM provider configured");
            return Err(PersonaError::GenerationFailed(LlmError::AuthenticationFailed));
        };

        let request = self.build_request(document);
        let max_output = provider.capabilities().max_output_tokens;
        if request.max_tokens > max_output {
            tracing::warn!(
                requested = request.max_tokens,
                max_output,
                "max_tokens exceeds the model's output limit"
            );
        }

        let response = provider.complete(&request).await.map_err(|err| {
            tracing::error!(provider = provider.name(), error = %err, "persona generation failed");
            PersonaError::GenerationFailed(err)
        })?;

        if response.content.trim().is_empty() {
            tracing::error!(provider = provider.name(), "provider returned an empty persona");
            return Err(PersonaError::GenerationFailed(LlmError::Provider {
                message: "empty completion".to_string(),
            }));
        }

        tracing::info!(
            gen_ai.provider.name = provider.name(),
            gen_ai.response.id = %response.id,
            gen_ai.response.finish_reasons = %response.stop_reason,
            gen_ai.usage.input_tokens = response.usage.input_tokens,
            gen_ai.usage.output_tokens = response.usage.output_tokens,
            "persona generated"
        );

        Ok(response.content)
    }
}
