//! Profile URL → username extraction.

use std::sync::LazyLock;

use regex::Regex;

use personagen_types::error::PersonaError;
use personagen_types::username::Username;

/// `reddit.com/user/<name>`; the name runs to the next `/`, `?`, `#` or whitespace.
static PROFILE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"reddit\.com/user/([^/?#\s]+)").expect("profile URL pattern is valid")
});

/// Extract the account name from a profile URL.
///
/// Accepts any input containing `reddit.com/user/<name>` (with or without a
/// scheme, `www.`/`old.` prefixes, or trailing path segments). Anything else,
/// including empty input, yields [`PersonaError::InvalidUrl`].
pub fn extract_username(input: &str) -> Result<Username, PersonaError> {
    PROFILE_URL
        .captures(input)
        .and_then(|caps| caps.get(1))
        .and_then(|name| name.as_str().parse::<Username>().ok())
        .ok_or_else(|| PersonaError::InvalidUrl(input.to_string()))
}
