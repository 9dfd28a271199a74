//! Bounded, fault-tolerant retrieval of an account's posts and comments.
//!
//! `RecordFetcher` drains two independent record streams from a
//! [`RecordSource`], capping each at the configured limit. A fault in one
//! stream ends that listing (keeping whatever arrived before it) without
//! affecting the other; the fault is logged and the kind is recorded in
//! [`FetchResult::interrupted`].

pub mod progress;
pub mod source;

use std::num::NonZeroUsize;

use futures_util::StreamExt;

use personagen_types::record::{FetchResult, RecordKind};
use personagen_types::username::Username;

use self::progress::FetchProgress;
use self::source::{RecordSource, RecordStream};

/// Fetches up to `limit` posts and up to `limit` comments per run.
pub struct RecordFetcher<S> {
    source: S,
    limit: NonZeroUsize,
}

impl<S: RecordSource> RecordFetcher<S> {
    pub fn new(source: S, limit: NonZeroUsize) -> Self {
        Self { source, limit }
    }

    /// Retrieve posts, then comments, for `username`.
    ///
    /// Never fails: source faults are logged and treated as the end of the
    /// affected listing.
    #[tracing::instrument(
        name = "fetch_records",
        skip(self, progress),
        fields(source = self.source.name(), user = %username, limit = self.limit.get())
    )]
    pub async fn fetch(&self, username: &Username, progress: &dyn FetchProgress) -> FetchResult {
        let limit = self.limit.get();

        let posts = drain(
            RecordKind::Post,
            self.source.posts(username, limit),
            limit,
            progress,
        )
        .await;
        let comments = drain(
            RecordKind::Comment,
            self.source.comments(username, limit),
            limit,
            progress,
        )
        .await;

        let interrupted = [
            (RecordKind::Post, posts.interrupted),
            (RecordKind::Comment, comments.interrupted),
        ]
        .into_iter()
        .filter_map(|(kind, interrupted)| interrupted.then_some(kind))
        .collect();

        FetchResult {
            posts: posts.records,
            comments: comments.records,
            interrupted,
        }
    }
}

struct Drained<T> {
    records: Vec<T>,
    interrupted: bool,
}

async fn drain<T>(
    kind: RecordKind,
    mut stream: RecordStream<'_, T>,
    limit: usize,
    progress: &dyn FetchProgress,
) -> Drained<T> {
    progress.started(kind, limit);

    let mut records = Vec::new();
    let mut interrupted = false;

    // Stop polling at the cap so the source never fetches a page we would discard.
    while records.len() < limit {
        match stream.next().await {
            Some(Ok(record)) => {
                records.push(record);
                progress.advanced(kind, records.len());
            }
            Some(Err(err)) => {
                tracing::warn!(
                    %kind,
                    error = %err,
                    fetched = records.len(),
                    "record retrieval failed, treating as end of listing"
                );
                interrupted = true;
                break;
            }
            None => break,
        }
    }

    progress.finished(kind, records.len());
    tracing::debug!(%kind, fetched = records.len(), interrupted, "listing drained");

    Drained {
        records,
        interrupted,
    }
}
