use personagen_types::record::RecordKind;

/// Observer for incremental fetch progress.
///
/// The fetcher calls these as records arrive; implementations must not block.
/// All methods default to no-ops.
pub trait FetchProgress: Send + Sync {
    /// A listing is about to be fetched.
    fn started(&self, _kind: RecordKind, _limit: usize) {}

    /// `fetched` records of `kind` have been collected so far.
    fn advanced(&self, _kind: RecordKind, _fetched: usize) {}

    /// The listing is done, whether exhausted, capped or interrupted.
    fn finished(&self, _kind: RecordKind, _fetched: usize) {}
}

/// Progress observer that reports nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl FetchProgress for SilentProgress {}
