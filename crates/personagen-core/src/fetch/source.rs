//! RecordSource trait definition.

use std::pin::Pin;

use futures_util::Stream;

use personagen_types::error::SourceError;
use personagen_types::record::{Comment, Post};
use personagen_types::username::Username;

/// A lazily paginated stream of records, newest first.
///
/// Returns a boxed stream (not RPITIT) so sources can hide their
/// pagination cursor inside the stream state.
pub type RecordStream<'a, T> = Pin<Box<dyn Stream<Item = Result<T, SourceError>> + Send + 'a>>;

/// Trait for remote account-content services.
///
/// Implementations live in personagen-infra (e.g., `RedditClient`). `limit`
/// is a page-sizing hint; the fetcher enforces the cap itself and stops
/// polling once it has enough records.
pub trait RecordSource: Send + Sync {
    /// Human-readable source name for logs.
    fn name(&self) -> &str;

    /// Submitted posts for `username`, newest first.
    fn posts<'a>(&'a self, username: &'a Username, limit: usize) -> RecordStream<'a, Post>;

    /// Comments written by `username`, newest first.
    fn comments<'a>(&'a self, username: &'a Username, limit: usize) -> RecordStream<'a, Comment>;
}
