//! Client configuration.
//!
//! [`ClientConfig`] carries everything needed to reach the Scalex API: the
//! base URL, the `s-api-key` credential and the blockchain network type used
//! by transaction and customer creation. All three are validated once, here,
//! so a constructed config is always usable.
//!
//! ```rust,ignore
//! use scalex::ClientConfig;
//!
//! // Explicit values
//! let config = ClientConfig::new("https://api.scalex.africa", "my-key", "testnet")?;
//!
//! // Or from SCALEX_BASE_URL / SCALEX_API_KEY / SCALEX_NETWORK_TYPE
//! let config = ClientConfig::from_env()?;
//! ```

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::api::error::{ApiError, ApiResult};

/// Prefix shared by all environment variables read by [`ClientConfig::from_env`].
pub const ENV_PREFIX: &str = "SCALEX_";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Raw environment view; every field optional so absence is reported per variable.
#[derive(Debug, Deserialize)]
struct EnvConfig {
    base_url: Option<String>,
    api_key: Option<String>,
    network_type: Option<String>,
    timeout_secs: Option<u64>,
}

/// Immutable configuration for a Scalex client.
#[derive(Clone)]
pub struct ClientConfig {
    base_url: String,
    api_key: String,
    network_type: String,
    timeout: Duration,
    default_headers: Vec<(String, String)>,
}

impl ClientConfig {
    /// Create a config from explicit values.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if any value is empty or blank.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        network_type: impl Into<String>,
    ) -> ApiResult<Self> {
        let base_url = required(base_url.into(), "SCALEX_BASE_URL", "base URL")?;
        let api_key = required(api_key.into(), "SCALEX_API_KEY", "API key")?;
        let network_type = required(network_type.into(), "SCALEX_NETWORK_TYPE", "network type")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            network_type,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: Vec::new(),
        })
    }

    /// Read the config from the process environment.
    ///
    /// Reads `SCALEX_BASE_URL`, `SCALEX_API_KEY`, `SCALEX_NETWORK_TYPE` and the
    /// optional `SCALEX_TIMEOUT_SECS`.
    pub fn from_env() -> ApiResult<Self> {
        let raw = envy::prefixed(ENV_PREFIX)
            .from_env::<EnvConfig>()
            .map_err(|e| ApiError::Configuration(e.to_string()))?;
        Self::from_raw(raw)
    }

    /// Same as [`from_env`](Self::from_env), but loads a `.env` file first when one exists.
    pub fn from_dotenv() -> ApiResult<Self> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
            Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(ApiError::Configuration(format!("Failed to load .env: {}", e))),
        }
        Self::from_env()
    }

    /// Read the config from an explicit list of `(name, value)` variables.
    pub fn from_env_iter<I>(vars: I) -> ApiResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let raw = envy::prefixed(ENV_PREFIX)
            .from_iter::<_, EnvConfig>(vars)
            .map_err(|e| ApiError::Configuration(e.to_string()))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: EnvConfig) -> ApiResult<Self> {
        let config = Self::new(
            raw.base_url.unwrap_or_default(),
            raw.api_key.unwrap_or_default(),
            raw.network_type.unwrap_or_default(),
        )?;
        Ok(match raw.timeout_secs {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        })
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add a default header sent with every request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Value of the `s-api-key` header.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Blockchain network used for transaction and customer creation.
    pub fn network_type(&self) -> &str {
        &self.network_type
    }

    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Extra default headers.
    pub fn default_headers(&self) -> &[(String, String)] {
        &self.default_headers
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("network_type", &self.network_type)
            .field("timeout", &self.timeout)
            .field("default_headers", &self.default_headers)
            .finish()
    }
}

fn required(value: String, var: &str, what: &str) -> ApiResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ApiError::Configuration(format!("Provide a {} ({} is not set)", what, var)));
    }
    Ok(value.to_string())
}
