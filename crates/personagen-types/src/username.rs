use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated account name extracted from a profile URL.
///
/// Non-empty and limited to Reddit's name alphabet (`A-Z`, `a-z`, `0-9`,
/// `_`, `-`), so it is safe to embed in a URL path and a file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Username {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("username must not be empty".to_string());
        }
        if let Some(bad) = s
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-')))
        {
            return Err(format!("invalid character {bad:?} in username '{s}'"));
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for Username {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}
