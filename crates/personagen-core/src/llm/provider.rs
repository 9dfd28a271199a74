//! LlmProvider trait definition.
//!
//! This is the core abstraction that LLM backends implement. Uses RPITIT
//! for `complete`; the object-safe wrapper lives in `box_provider`.

use personagen_types::llm::{
    CompletionRequest, CompletionResponse, LlmError, ProviderCapabilities,
};

/// Trait for LLM provider backends (OpenAI and compatible endpoints).
///
/// Implementations live in personagen-infra (e.g., `OpenAiCompatibleProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// Context and output limits of the configured model.
    fn capabilities(&self) -> &ProviderCapabilities;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
