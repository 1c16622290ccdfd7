//! Process configuration.
//!
//! The only setting is the Up personal access token, read from
//! `UP_PERSONAL_ACCESS_TOKEN`. There is no default: a missing or blank token
//! stops the server before it accepts any request.

use std::fmt;

use thiserror::Error;

/// Environment variable holding the personal access token.
pub const TOKEN_VAR: &str = "UP_PERSONAL_ACCESS_TOKEN";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "{0} environment variable is required. Get your token from the Up mobile app: \
         Settings > Security > Personal Access Tokens"
    )]
    Missing(&'static str),

    #[error("{0} cannot be empty")]
    Empty(&'static str),
}

/// Validated configuration.
#[derive(Clone)]
pub struct Config {
    personal_access_token: String,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(TOKEN_VAR).ok_or(ConfigError::Missing(TOKEN_VAR))?;
        let token = raw.trim();
        if token.is_empty() {
            return Err(ConfigError::Empty(TOKEN_VAR));
        }

        Ok(Self {
            personal_access_token: token.to_string(),
        })
    }

    pub fn personal_access_token(&self) -> &str {
        &self.personal_access_token
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("personal_access_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use speculate2::speculate;

    fn lookup_with(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |name| {
            assert_eq!(name, TOKEN_VAR);
            value.map(str::to_string)
        }
    }

    speculate! {
        describe "from_lookup" {
            it "fails when the token is unset" {
                let err = Config::from_lookup(lookup_with(None)).unwrap_err();
                assert_eq!(err, ConfigError::Missing(TOKEN_VAR));
                assert!(err.to_string().contains("UP_PERSONAL_ACCESS_TOKEN environment variable is required"));
            }

            it "fails when the token is empty" {
                let err = Config::from_lookup(lookup_with(Some(""))).unwrap_err();
                assert_eq!(err, ConfigError::Empty(TOKEN_VAR));
            }

            it "treats whitespace-only tokens as empty" {
                let err = Config::from_lookup(lookup_with(Some(" \t\n "))).unwrap_err();
                assert_eq!(err.to_string(), "UP_PERSONAL_ACCESS_TOKEN cannot be empty");
            }

            it "trims surrounding whitespace" {
                let config = Config::from_lookup(lookup_with(Some("  up:yeah:abc123 \n"))).unwrap();
                assert_eq!(config.personal_access_token(), "up:yeah:abc123");
            }

            it "keeps inner characters untouched" {
                let config = Config::from_lookup(lookup_with(Some("a b"))).unwrap();
                assert_eq!(config.personal_access_token(), "a b");
            }
        }

        describe "debug output" {
            it "never shows the token" {
                let config = Config::from_lookup(lookup_with(Some("secret-token"))).unwrap();
                let rendered = format!("{:?}", config);
                assert!(!rendered.contains("secret-token"));
                assert!(rendered.contains("redacted"));
            }
        }
    }
}
