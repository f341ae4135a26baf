//! Resolver configuration: service base address and request timeout.

use std::env;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Base address of the public link service.
pub const DEFAULT_BASE_URL: &str = "http://go.servr.link/api/";

/// Upper bound on a single request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Environment variable overriding the base address.
pub const BASE_URL_ENV: &str = "SERVRLINK_API_URL";

/// Environment variable overriding the timeout, in milliseconds.
pub const TIMEOUT_ENV: &str = "SERVRLINK_TIMEOUT_MS";

/// Invalid configuration value.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base address is not an absolute URL.
    #[error("invalid base URL {url:?}")]
    BaseUrl {
        /// The rejected value.
        url: String,
        /// Parser failure.
        #[source]
        source: url::ParseError,
    },
    /// The base address cannot carry paths (e.g. `mailto:`).
    #[error("base URL {0:?} cannot be used as a base for endpoint paths")]
    NotABase(String),
    /// The timeout is not a whole number of milliseconds.
    #[error("invalid SERVRLINK_TIMEOUT_MS value {0:?}")]
    Timeout(String),
}

/// Where and how long to talk to the link service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
    timeout: Duration,
}

impl ClientConfig {
    /// Override the service base address.
    ///
    /// A missing trailing slash is added so endpoint paths nest under it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `url` is not an absolute, hierarchical URL.
    pub fn with_base_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.base_url = parse_base_url(url)?;
        Ok(self)
    }

    /// Override the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a config from `SERVRLINK_API_URL` and `SERVRLINK_TIMEOUT_MS`,
    /// loading a `.env` file first if one exists. Unset variables keep
    /// their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is the normal case.
        let _ = dotenvy::dotenv();
        Self::from_vars(env::var(BASE_URL_ENV).ok(), env::var(TIMEOUT_ENV).ok())
    }

    fn from_vars(
        base_url: Option<String>,
        timeout_ms: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(url) = base_url {
            config = config.with_base_url(&url)?;
        }
        if let Some(ms) = timeout_ms {
            let ms = ms.trim().parse::<u64>().map_err(|_| ConfigError::Timeout(ms.clone()))?;
            config = config.with_timeout(Duration::from_millis(ms));
        }
        Ok(config)
    }

    /// Service base address, always ending in `/`.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Per-request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).unwrap_or_else(|e| {
                unreachable!("DEFAULT_BASE_URL is a valid URL: {e}")
            }),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw)
        .map_err(|source| ConfigError::BaseUrl { url: raw.to_string(), source })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::NotABase(raw.to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
