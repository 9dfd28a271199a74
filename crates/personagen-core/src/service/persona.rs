//! End-to-end persona run: fetch, assemble, generate, write.

use personagen_types::error::PersonaError;
use personagen_types::persona::PersonaReport;
use personagen_types::username::Username;

use crate::fetch::RecordFetcher;
use crate::fetch::progress::FetchProgress;
use crate::fetch::source::RecordSource;
use crate::output::PersonaWriter;
use crate::persona::PersonaGenerator;
use crate::prompt::build_persona_document;
use crate::service::fs::FileSystem;

/// Steps a caller can surface to the user while a run is in flight.
pub trait RunObserver: FetchProgress {
    /// Called once the prompt is assembled, right before the LLM call.
    fn generating(&self) {}
}

/// Orchestrates a single persona run for one account.
///
/// Generic over the record source and filesystem so the whole flow can be
/// exercised with in-memory doubles.
pub struct PersonaService<S, F> {
    fetcher: RecordFetcher<S>,
    generator: PersonaGenerator,
    writer: PersonaWriter<F>,
    link_base: String,
}

impl<S: RecordSource, F: FileSystem> PersonaService<S, F> {
    pub fn new(
        fetcher: RecordFetcher<S>,
        generator: PersonaGenerator,
        writer: PersonaWriter<F>,
        link_base: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            generator,
            writer,
            link_base: link_base.into(),
        }
    }

    /// Run the pipeline for `username`.
    ///
    /// Returns [`PersonaError::NoContent`] without calling the LLM when the
    /// account yielded no posts and no comments. Nothing is written unless
    /// generation succeeds.
    #[tracing::instrument(name = "persona_run", skip(self, observer), fields(user = %username))]
    pub async fn run<O: RunObserver>(
        &self,
        username: &Username,
        observer: &O,
    ) -> Result<PersonaReport, PersonaError> {
        let result = self.fetcher.fetch(username, observer).await;

        for kind in &result.interrupted {
            tracing::warn!(%kind, "listing ended early; persona built from partial data");
        }

        if result.is_empty() {
            tracing::info!("no posts or comments retrieved");
            return Err(PersonaError::NoContent(username.clone()));
        }

        tracing::info!(
            posts = result.posts.len(),
            comments = result.comments.len(),
            "records fetched"
        );

        let document = build_persona_document(&result, &self.link_base);

        observer.generating();
        let persona = self.generator.generate(&document).await?;

        let path = self.writer.write(username, &persona).await?;

        Ok(PersonaReport {
            username: username.clone(),
            path,
            post_count: result.posts.len(),
            comment_count: result.comments.len(),
            interrupted: result.interrupted,
        })
    }
}

/// Observer that ignores every event.
pub struct SilentObserver;

impl FetchProgress for SilentObserver {}

impl RunObserver for SilentObserver {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use futures_util::stream;
    use personagen_types::config::GenerationSettings;
    use personagen_types::error::SourceError;
    use personagen_types::llm::{
        CompletionRequest, CompletionResponse, LlmError, ProviderCapabilities, StopReason, Usage,
    };
    use personagen_types::record::{Comment, Post, RecordKind};

    use crate::fetch::source::RecordStream;
    use crate::llm::box_provider::BoxLlmProvider;
    use crate::llm::provider::LlmProvider;
    use crate::test_support::MemoryFileSystem;

    // -----------------------------------------------------------------------
    // Doubles
    // -----------------------------------------------------------------------

    #[derive(Default)]
    struct StaticSource {
        posts: Vec<Post>,
        comments: Vec<Comment>,
        fail_posts: bool,
    }

    impl RecordSource for StaticSource {
        fn name(&self) -> &str {
            "static"
        }

        fn posts<'a>(&'a self, _username: &'a Username, _limit: usize) -> RecordStream<'a, Post> {
            if self.fail_posts {
                return Box::pin(stream::iter(vec![Err(SourceError::NotFound(
                    "user/alice/submitted".to_string(),
                ))]));
            }
            Box::pin(stream::iter(self.posts.clone().into_iter().map(Ok)))
        }

        fn comments<'a>(
            &'a self,
            _username: &'a Username,
            _limit: usize,
        ) -> RecordStream<'a, Comment> {
            Box::pin(stream::iter(self.comments.clone().into_iter().map(Ok)))
        }
    }

    struct ScriptedLlm {
        fail: bool,
        reply: &'static str,
        calls: std::sync::Arc<AtomicUsize>,
        prompt: std::sync::Arc<Mutex<Option<String>>>,
        capabilities: ProviderCapabilities,
    }

    impl ScriptedLlm {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                reply: "# Persona: alice\n\nLikes Rust.",
                calls: Default::default(),
                prompt: Default::default(),
                capabilities: ProviderCapabilities {
                    max_context_tokens: 8_192,
                    max_output_tokens: 4_096,
                },
            }
        }
    }

    impl LlmProvider for ScriptedLlm {
        fn name(&self) -> &str {
            "scripted"
        }

        fn capabilities(&self) -> &ProviderCapabilities {
            &self.capabilities
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.prompt.lock().unwrap() = Some(request.messages[0].content.clone());
            if self.fail {
                return Err(LlmError::Provider {
                    message: "upstream 500".to_string(),
                });
            }
            Ok(CompletionResponse {
                id: "chatcmpl-1".to_string(),
                content: self.reply.to_string(),
                model: request.model.clone(),
                stop_reason: StopReason::EndTurn,
                usage: Usage::default(),
            })
        }
    }

    #[derive(Default)]
    struct CountingObserver {
        generating: AtomicUsize,
    }

    impl FetchProgress for CountingObserver {}

    impl RunObserver for CountingObserver {
        fn generating(&self) {
            self.generating.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct Harness {
        service: PersonaService<StaticSource, MemoryFileSystem>,
        fs: MemoryFileSystem,
        calls: std::sync::Arc<AtomicUsize>,
        prompt: std::sync::Arc<Mutex<Option<String>>>,
    }

    fn harness(source: StaticSource, llm_fails: bool) -> Harness {
        harness_with(source, ScriptedLlm::new(llm_fails))
    }

    fn harness_with(source: StaticSource, llm: ScriptedLlm) -> Harness {
        let calls = llm.calls.clone();
        let prompt = llm.prompt.clone();
        let fs = MemoryFileSystem::default();

        let service = PersonaService::new(
            RecordFetcher::new(source, NonZeroUsize::new(100).unwrap()),
            PersonaGenerator::new(BoxLlmProvider::new(llm), GenerationSettings::default()),
            PersonaWriter::new(fs.clone(), "out"),
            "https://reddit.com",
        );

        Harness {
            service,
            fs,
            calls,
            prompt,
        }
    }

    fn alice() -> Username {
        "alice".parse().unwrap()
    }

    fn one_post() -> Vec<Post> {
        vec![Post {
            title: "Hi".to_string(),
            body: "hello".to_string(),
            permalink: "/r/x/1".to_string(),
        }]
    }

    // -----------------------------------------------------------------------
    // Tests
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn test_run_writes_generated_persona() {
        let h = harness(
            StaticSource {
                posts: one_post(),
                ..Default::default()
            },
            false,
        );
        let observer = CountingObserver::default();

        let report = h.service.run(&alice(), &observer).await.unwrap();

        assert_eq!(report.path, PathBuf::from("out/user_persona_alice.txt"));
        assert_eq!(report.post_count, 1);
        assert_eq!(report.comment_count, 0);
        assert!(report.interrupted.is_empty());
        assert_eq!(
            h.fs.get(&report.path).as_deref(),
            Some("# Persona: alice\n\nLikes Rust.")
        );
        assert_eq!(observer.generating.load(Ordering::SeqCst), 1);

        let prompt = h.prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("- Hi\nhello\n(Source: https://reddit.com/r/x/1)"));
    }

    #[tokio::test]
    async fn test_empty_account_skips_generation() {
        let h = harness(StaticSource::default(), false);

        let err = h.service.run(&alice(), &SilentObserver).await.unwrap_err();

        assert!(matches!(err, PersonaError::NoContent(ref u) if u.as_str() == "alice"));
        assert_eq!(h.calls.load(Ordering::SeqCst), 0);
        assert_eq!(h.fs.file_count(), 0);
    }

    #[tokio::test]
    async fn test_generation_failure_writes_nothing() {
        let h = harness(
            StaticSource {
                posts: one_post(),
                ..Default::default()
            },
            true,
        );

        let err = h.service.run(&alice(), &SilentObserver).await.unwrap_err();

        assert!(matches!(err, PersonaError::GenerationFailed(_)));
        assert_eq!(h.fs.file_count(), 0);
        assert!(!h.fs.has_dir(Path::new("out")));
    }

    #[tokio::test]
    async fn test_empty_completion_writes_nothing() {
        let h = harness_with(
            StaticSource {
                posts: one_post(),
                ..Default::default()
            },
            ScriptedLlm {
                reply: "",
                ..ScriptedLlm::new(false)
            },
        );

        let err = h.service.run(&alice(), &SilentObserver).await.unwrap_err();

        assert!(matches!(err, PersonaError::GenerationFailed(_)));
        assert_eq!(h.calls.load(Ordering::SeqCst), 1);
        assert_eq!(h.fs.file_count(), 0);
    }

    #[tokio::test]
    async fn test_post_fault_still_generates_from_comments() {
        let h = harness(
            StaticSource {
                comments: vec![Comment {
                    body: "nice".to_string(),
                    permalink: "/r/x/1/c".to_string(),
                }],
                fail_posts: true,
                ..Default::default()
            },
            false,
        );

        let report = h.service.run(&alice(), &SilentObserver).await.unwrap();

        assert_eq!(report.post_count, 0);
        assert_eq!(report.comment_count, 1);
        assert_eq!(report.interrupted, vec![RecordKind::Post]);
        assert_eq!(h.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_write_failure_surfaces() {
        let h = harness(
            StaticSource {
                posts: one_post(),
                ..Default::default()
            },
            false,
        );
        h.fs.fail_writes();

        let err = h.service.run(&alice(), &SilentObserver).await.unwrap_err();

        assert!(matches!(err, PersonaError::WriteFailed { .. }));
    }
}
