use std::env;
use thiserror::Error;
use url::Url;

pub const DEFAULT_RETELL_API_URL: &str = "https://api.retellai.com/v2/create-phone-call";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("RETELL_API_URL is not a valid url: {0}")]
    InvalidProviderUrl(#[from] url::ParseError),
}

/// Process configuration, read once at start-up and handed to the router.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Bearer token for the voice provider. Left unchecked here, a missing
    /// key shows up as an authorization error from the provider.
    pub retell_api_key: Option<String>,
    /// Caller id the provider dials from.
    pub retell_from_number: Option<String>,
    pub retell_api_url: Url,
    pub sentry_dsn: Option<String>,
    /// CORS origin for the landing pages. `None` allows any origin.
    pub allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let retell_api_key = non_empty("RETELL_API_KEY");
        if retell_api_key.is_none() {
            tracing::warn!("RETELL_API_KEY is not set, provider calls will be rejected");
        }
        let retell_from_number = non_empty("RETELL_FROM_NUMBER");
        if retell_from_number.is_none() {
            tracing::warn!("RETELL_FROM_NUMBER is not set, calls will go out without a caller id");
        }

        let retell_api_url = Url::parse(
            non_empty("RETELL_API_URL")
                .as_deref()
                .unwrap_or(DEFAULT_RETELL_API_URL),
        )?;

        Ok(Self {
            listen_addr: non_empty("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
            retell_api_key,
            retell_from_number,
            retell_api_url,
            sentry_dsn: non_empty("SENTRY_DSN"),
            allowed_origin: non_empty("ALLOWED_ORIGIN"),
        })
    }
}
