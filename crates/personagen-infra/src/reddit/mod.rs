//! Reddit record source.
//!
//! [`RedditClient`] implements [`RecordSource`] over Reddit's OAuth API using
//! app-only (`client_credentials`) authentication. Listings are paged lazily
//! with the `after` cursor inside each record stream, so the fetcher's cap
//! decides how many pages are ever requested.

pub mod config;
pub mod types;

use serde::de::DeserializeOwned;
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::OnceCell;

use personagen_core::fetch::source::{RecordSource, RecordStream};
use personagen_types::error::SourceError;
use personagen_types::record::{Comment, Post};
use personagen_types::username::Username;

use self::config::RedditConfig;
use self::types::{CommentData, Listing, PostData, TokenResponse};

/// Reddit's maximum page size for listing endpoints.
const MAX_PAGE_SIZE: usize = 100;

/// Reddit API client.
///
/// Does NOT derive Debug; it holds client credentials and a bearer token.
pub struct RedditClient {
    http: reqwest::Client,
    config: RedditConfig,
    token: OnceCell<SecretString>,
}

impl RedditClient {
    pub fn new(config: RedditConfig) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| SourceError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            config,
            token: OnceCell::new(),
        })
    }

    /// Bearer token for this run, fetched on first use.
    async fn access_token(&self) -> Result<&SecretString, SourceError> {
        self.token.get_or_try_init(|| self.request_token()).await
    }

    #[tracing::instrument(skip(self))]
    async fn request_token(&self) -> Result<SecretString, SourceError> {
        let (Some(client_id), Some(client_secret)) =
            (&self.config.client_id, &self.config.client_secret)
        else {
            return Err(SourceError::MissingCredentials(
                "REDDIT_CLIENT_ID and REDDIT_CLIENT_SECRET must be set".to_string(),
            ));
        };

        let response = self
            .http
            .post(&self.config.auth_url)
            .basic_auth(client_id.expose_secret(), Some(client_secret.expose_secret()))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| SourceError::Transport(format!("token request failed: {e}")))?;

        let response = check_status(response, "access_token").await?;
        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| SourceError::Deserialization(format!("failed to parse token response: {e}")))?;

        tracing::debug!(
            token_type = %token.token_type,
            expires_in = token.expires_in,
            "obtained reddit access token"
        );
        Ok(SecretString::from(token.access_token))
    }

    /// Fetch one listing page for `username`.
    async fn fetch_page<T: DeserializeOwned>(
        &self,
        username: &Username,
        endpoint: &str,
        page_size: usize,
        after: Option<&str>,
    ) -> Result<Listing<T>, SourceError> {
        let token = self.access_token().await?;
        let url = format!("{}/user/{}/{}", self.config.api_base, username, endpoint);

        let mut query = vec![
            ("sort", "new".to_string()),
            ("raw_json", "1".to_string()),
            ("limit", page_size.to_string()),
        ];
        if let Some(cursor) = after {
            query.push(("after", cursor.to_string()));
        }

        tracing::debug!(%url, page_size, after, "requesting listing page");

        let response = self
            .http
            .get(&url)
            .bearer_auth(token.expose_secret())
            .query(&query)
            .send()
            .await
            .map_err(|e| SourceError::Transport(format!("listing request failed: {e}")))?;

        let response = check_status(response, &format!("user/{username}/{endpoint}")).await?;
        response
            .json()
            .await
            .map_err(|e| SourceError::Deserialization(format!("failed to parse listing: {e}")))
    }

    /// Lazily paginated listing, at most `limit` items.
    fn listing<'a, D, T>(
        &'a self,
        username: &'a Username,
        endpoint: &'static str,
        limit: usize,
    ) -> RecordStream<'a, T>
    where
        D: DeserializeOwned + Send + 'a,
        T: From<D> + Send + 'a,
    {
        Box::pin(async_stream::try_stream! {
            let mut remaining = limit;
            let mut after: Option<String> = None;

            while remaining > 0 {
                let page: Listing<D> = self
                    .fetch_page(username, endpoint, remaining.min(MAX_PAGE_SIZE), after.as_deref())
                    .await?;

                if page.data.children.is_empty() {
                    break;
                }

                for child in page.data.children.into_iter().take(remaining) {
                    remaining -= 1;
                    yield T::from(child.data);
                }

                match page.data.after {
                    Some(cursor) => after = Some(cursor),
                    None => break,
                }
            }
        })
    }
}

/// Map a non-success status to a [`SourceError`].
async fn check_status(
    response: reqwest::Response,
    resource: &str,
) -> Result<reqwest::Response, SourceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(match status.as_u16() {
        401 => SourceError::Unauthorized(resource.to_string()),
        403 => SourceError::Forbidden(resource.to_string()),
        404 => SourceError::NotFound(resource.to_string()),
        429 => SourceError::RateLimited,
        code => SourceError::Http {
            status: code,
            message: body,
        },
    })
}

impl RecordSource for RedditClient {
    fn name(&self) -> &str {
        "reddit"
    }

    fn posts<'a>(&'a self, username: &'a Username, limit: usize) -> RecordStream<'a, Post> {
        self.listing::<PostData, Post>(username, "submitted", limit)
    }

    fn comments<'a>(&'a self, username: &'a Username, limit: usize) -> RecordStream<'a, Comment> {
        self.listing::<CommentData, Comment>(username, "comments", limit)
    }
}
