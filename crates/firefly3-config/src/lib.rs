//! Provider-level configuration for the Firefly III workspace.
//!
//! Resolution policy: an explicitly supplied value always wins; when a
//! value is absent the `FIREFLY3_ENDPOINT` / `FIREFLY3_API_KEY`
//! environment variables are consulted; when both are missing the
//! error names the field and how to set it. Both values are immutable
//! for the lifetime of the process — resolve once, construct the
//! provider, done.

use figment::{
    Figment,
    providers::Env,
};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "endpoint is not configured; set it explicitly or via the FIREFLY3_ENDPOINT environment variable"
    )]
    MissingEndpoint,

    #[error(
        "API key is not configured; set it explicitly or via the FIREFLY3_API_KEY environment variable"
    )]
    MissingApiKey,

    #[error("invalid endpoint `{endpoint}`: {source}")]
    InvalidEndpoint {
        endpoint: String,
        source: url::ParseError,
    },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Config ──────────────────────────────────────────────────────────

/// Resolved, validated provider configuration.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub endpoint: Url,
    pub api_key: SecretString,
}

/// Environment-sourced raw values (`FIREFLY3_*`).
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    endpoint: Option<String>,
    api_key: Option<String>,
}

impl ProviderConfig {
    /// Resolve configuration from explicit values with environment
    /// fallback.
    ///
    /// Pass `None` for anything the caller did not set; the
    /// corresponding `FIREFLY3_*` variable is used instead.
    pub fn resolve(
        endpoint: Option<String>,
        api_key: Option<SecretString>,
    ) -> Result<Self, ConfigError> {
        let env: RawConfig = Figment::new()
            .merge(Env::prefixed("FIREFLY3_"))
            .extract()?;

        let raw_endpoint = endpoint
            .or(env.endpoint)
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingEndpoint)?;

        let api_key = api_key
            .or_else(|| env.api_key.map(SecretString::from))
            .filter(|s| !s.expose_secret().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let endpoint = raw_endpoint
            .parse()
            .map_err(|source| ConfigError::InvalidEndpoint {
                endpoint: raw_endpoint,
                source,
            })?;

        Ok(Self { endpoint, api_key })
    }

    /// Resolve from the environment alone.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(None, None)
    }
}
