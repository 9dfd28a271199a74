//! Reddit API wire types.
//!
//! Only the fields personagen reads are modelled; everything else in the
//! listing payload is ignored.

use serde::Deserialize;

use personagen_types::record::{Comment, Post};

/// Body of a successful `client_credentials` token exchange.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: u64,
}

/// `{"kind": "Listing", "data": {...}}`
#[derive(Debug, Deserialize)]
pub struct Listing<T> {
    pub data: ListingData<T>,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListingData<T> {
    /// Cursor for the next page; `null` on the last page.
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default)]
    pub children: Vec<Thing<T>>,
}

/// A listing child (`t3` for posts, `t1` for comments).
#[derive(Debug, Deserialize)]
pub struct Thing<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct PostData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub selftext: String,
    pub permalink: String,
}

impl From<PostData> for Post {
    fn from(data: PostData) -> Self {
        Post {
            title: data.title,
            body: data.selftext,
            permalink: data.permalink,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CommentData {
    #[serde(default)]
    pub body: String,
    pub permalink: String,
}

impl From<CommentData> for Comment {
    fn from(data: CommentData) -> Self {
        Comment {
            body: data.body,
            permalink: data.permalink,
        }
    }
}
