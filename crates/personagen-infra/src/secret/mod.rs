//! Credential resolution.
//!
//! Credentials are read once at startup into an immutable [`Credentials`]
//! value. Nothing here validates them: a missing key is only noticed by the
//! component that needs it.

pub mod env;

use secrecy::SecretString;

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const REDDIT_CLIENT_ID: &str = "REDDIT_CLIENT_ID";
pub const REDDIT_CLIENT_SECRET: &str = "REDDIT_CLIENT_SECRET";
pub const REDDIT_USER_AGENT: &str = "REDDIT_USER_AGENT";

/// Read-only lookup of named secrets.
pub trait SecretProvider {
    /// Value for `key`, or `None` when unset or empty.
    fn get(&self, key: &str) -> Option<String>;
}

/// Reddit app credentials.
#[derive(Default)]
pub struct RedditCredentials {
    pub client_id: Option<SecretString>,
    pub client_secret: Option<SecretString>,
    pub user_agent: Option<String>,
}

/// All credentials a run may use.
#[derive(Default)]
pub struct Credentials {
    pub openai_api_key: Option<SecretString>,
    pub reddit: RedditCredentials,
}

impl Credentials {
    /// Resolve every credential from `provider`.
    pub fn resolve(provider: &impl SecretProvider) -> Self {
        let secret = |key: &str| provider.get(key).map(SecretString::from);

        let credentials = Self {
            openai_api_key: secret(OPENAI_API_KEY),
            reddit: RedditCredentials {
                client_id: secret(REDDIT_CLIENT_ID),
                client_secret: secret(REDDIT_CLIENT_SECRET),
                user_agent: provider.get(REDDIT_USER_AGENT),
            },
        };

        tracing::debug!(
            openai_api_key = credentials.openai_api_key.is_some(),
            reddit_client_id = credentials.reddit.client_id.is_some(),
            reddit_client_secret = credentials.reddit.client_secret.is_some(),
            reddit_user_agent = credentials.reddit.user_agent.is_some(),
            "credentials resolved"
        );

        credentials
    }
}

/// Resolve credentials from the process environment.
pub fn load_credentials() -> Credentials {
    Credentials::resolve(&env::EnvSecretProvider::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    struct MapProvider(HashMap<&'static str, &'static str>);

    impl SecretProvider for MapProvider {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key).map(|v| v.to_string())
        }
    }

    #[test]
    fn test_resolve_all_present() {
        let provider = MapProvider(HashMap::from([
            (OPENAI_API_KEY, "sk-test"),
            (REDDIT_CLIENT_ID, "client-id"),
            (REDDIT_CLIENT_SECRET, "client-secret"),
            (REDDIT_USER_AGENT, "persona/0.1 by u/someone"),
        ]));

        let credentials = Credentials::resolve(&provider);

        assert_eq!(
            credentials.openai_api_key.as_ref().unwrap().expose_secret(),
            "sk-test"
        );
        assert_eq!(
            credentials.reddit.client_id.as_ref().unwrap().expose_secret(),
            "client-id"
        );
        assert_eq!(
            credentials.reddit.client_secret.as_ref().unwrap().expose_secret(),
            "client-secret"
        );
        assert_eq!(
            credentials.reddit.user_agent.as_deref(),
            Some("persona/0.1 by u/someone")
        );
    }

    #[test]
    fn test_resolve_missing_is_not_an_error() {
        let credentials = Credentials::resolve(&MapProvider(HashMap::new()));

        assert!(credentials.openai_api_key.is_none());
        assert!(credentials.reddit.client_id.is_none());
        assert!(credentials.reddit.client_secret.is_none());
        assert!(credentials.reddit.user_agent.is_none());
    }
}
