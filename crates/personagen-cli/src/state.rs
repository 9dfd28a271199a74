//! Application state wiring all services together.
//!
//! `PersonaService` is generic over the record source and filesystem;
//! AppState pins it to the concrete infra implementations.

use anyhow::Context;

use personagen_core::fetch::RecordFetcher;
use personagen_core::output::PersonaWriter;
use personagen_core::persona::PersonaGenerator;
use personagen_core::service::persona::PersonaService;
use personagen_infra::config::{load_app_config, resolve_config_path};
use personagen_infra::filesystem::LocalFileSystem;
use personagen_infra::llm::create_provider;
use personagen_infra::reddit::RedditClient;
use personagen_infra::reddit::config::RedditConfig;
use personagen_infra::secret::load_credentials;
use personagen_types::config::AppConfig;

use crate::cli::Cli;

pub type ConcretePersonaService = PersonaService<RedditClient, LocalFileSystem>;

pub struct AppState {
    pub persona_service: ConcretePersonaService,
}

impl AppState {
    /// Load configuration and credentials, then wire the pipeline.
    ///
    /// Missing credentials do not fail here; they surface when the Reddit
    /// client or the generator first needs them.
    pub async fn init(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = match resolve_config_path(cli.config.as_deref()) {
            Some(path) => load_app_config(&path).await,
            None => AppConfig::default(),
        };
        cli.apply_overrides(&mut config);

        let credentials = load_credentials();

        let reddit = RedditClient::new(RedditConfig::new(&config.reddit, credentials.reddit))
            .context("failed to create Reddit client")?;

        let generator = match create_provider(&config.generation, credentials.openai_api_key) {
            Ok(provider) => PersonaGenerator::new(provider, config.generation.clone()),
            Err(err) => {
                tracing::warn!(error = %err, "LLM provider unavailable, generation will fail");
                PersonaGenerator::unconfigured(config.generation.clone())
            }
        };

        let writer = PersonaWriter::new(LocalFileSystem::new(), config.output.dir.clone());

        let persona_service = PersonaService::new(
            RecordFetcher::new(reddit, config.fetch.limit),
            generator,
            writer,
            config.reddit.link_base.clone(),
        );

        tracing::debug!(
            limit = config.fetch.limit.get(),
            model = %config.generation.model,
            output_dir = %config.output.dir.display(),
            "application state initialized"
        );

        Ok(Self { persona_service })
    }
}
