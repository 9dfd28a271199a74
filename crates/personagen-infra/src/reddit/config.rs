//! Reddit client configuration.

use std::time::Duration;

use personagen_types::config::RedditSettings;
use secrecy::SecretString;

use crate::secret::RedditCredentials;

/// Request timeout for every Reddit call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything [`super::RedditClient`] needs to talk to Reddit.
///
/// Credentials stay optional here; their absence surfaces as
/// `SourceError::MissingCredentials` on the first request.
pub struct RedditConfig {
    pub client_id: Option<SecretString>,
    pub client_secret: Option<SecretString>,
    pub user_agent: String,
    /// OAuth2 token endpoint.
    pub auth_url: String,
    /// Base URL for authenticated listing calls.
    pub api_base: String,
    pub timeout: Duration,
}

impl RedditConfig {
    /// Merge file settings with environment credentials.
    ///
    /// `REDDIT_USER_AGENT` wins over the configured user agent.
    pub fn new(settings: &RedditSettings, credentials: RedditCredentials) -> Self {
        Self {
            client_id: credentials.client_id,
            client_secret: credentials.client_secret,
            user_agent: credentials
                .user_agent
                .unwrap_or_else(|| settings.user_agent.clone()),
            auth_url: settings.auth_url.clone(),
            api_base: settings.api_base.trim_end_matches('/').to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}
