//! Normalized account records and the bounded collection built from them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which listing a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Post,
    Comment,
}

impl RecordKind {
    /// Human-readable label for progress output (e.g. "Fetching Posts").
    pub fn progress_label(&self) -> &'static str {
        match self {
            RecordKind::Post => "Fetching Posts",
            RecordKind::Comment => "Fetching Comments",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Post => write!(f, "posts"),
            RecordKind::Comment => write!(f, "comments"),
        }
    }
}

/// A submitted post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    /// Self-text; empty for link posts.
    pub body: String,
    /// Site-relative link, e.g. `/r/rust/comments/abc/title/`.
    pub permalink: String,
}

impl Post {
    pub fn source_url(&self, link_base: &str) -> String {
        format!("{link_base}{}", self.permalink)
    }
}

/// A comment left on someone else's post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub body: String,
    pub permalink: String,
}

impl Comment {
    pub fn source_url(&self, link_base: &str) -> String {
        format!("{link_base}{}", self.permalink)
    }
}

/// Posts and comments retrieved for one user, newest first.
///
/// Each sequence is capped at the fetch limit. `interrupted` lists the kinds
/// whose retrieval stopped on a fault rather than on the end of the listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResult {
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub interrupted: Vec<RecordKind>,
}

impl FetchResult {
    /// True when neither posts nor comments were retrieved.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty() && self.comments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_url_joins_base_and_permalink() {
        let post = Post {
            title: "Hi".to_string(),
            body: "hello".to_string(),
            permalink: "/r/x/1".to_string(),
        };
        assert_eq!(post.source_url("https://reddit.com"), "https://reddit.com/r/x/1");

        let comment = Comment {
            body: "nice".to_string(),
            permalink: "/r/x/1/c/2".to_string(),
        };
        assert_eq!(
            comment.source_url("https://reddit.com"),
            "https://reddit.com/r/x/1/c/2"
        );
    }

    #[test]
    fn test_fetch_result_emptiness() {
        let mut result = FetchResult::default();
        assert!(result.is_empty());

        result.comments.push(Comment {
            body: "only a comment".to_string(),
            permalink: "/c".to_string(),
        });
        assert!(!result.is_empty());
    }

    #[test]
    fn test_record_kind_labels() {
        assert_eq!(RecordKind::Post.to_string(), "posts");
        assert_eq!(RecordKind::Comment.progress_label(), "Fetching Comments");
    }
}
