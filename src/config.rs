//! Client configuration.
//!
//! Values come from code via the `with_*` setters or from `ADDRESSCHECK_*`
//! environment variables.

use crate::types::*;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URI: &str = "https://adc.maileon.com/svc/2.0";
pub const DEFAULT_MIME_TYPE: &str = "application/json";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_PROXY_PORT: u16 = 80;

pub const ENV_USERNAME: &str = "ADDRESSCHECK_USERNAME";
pub const ENV_PASSWORD: &str = "ADDRESSCHECK_PASSWORD";
pub const ENV_BASE_URI: &str = "ADDRESSCHECK_BASE_URI";
pub const ENV_MIME_TYPE: &str = "ADDRESSCHECK_MIME_TYPE";
pub const ENV_TIMEOUT: &str = "ADDRESSCHECK_TIMEOUT";
pub const ENV_PROXY_HOST: &str = "ADDRESSCHECK_PROXY_HOST";
pub const ENV_PROXY_PORT: &str = "ADDRESSCHECK_PROXY_PORT";
pub const ENV_DEBUG: &str = "ADDRESSCHECK_DEBUG";

/// Configuration for TLS
#[derive(Clone, Debug)]
pub struct TlsConfig {
    pub min_tls_version: Option<reqwest::tls::Version>,
    pub cert_verification: bool,
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            min_tls_version: Some(reqwest::tls::Version::TLS_1_2),
            cert_verification: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProxyConfig {
    pub host: String,
    pub port: u16,
}

impl ProxyConfig {
    pub fn url(&self) -> String {
        if self.host.contains("://") {
            format!("{}:{}", self.host, self.port)
        } else {
            format!("http://{}:{}", self.host, self.port)
        }
    }
}

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_uri: String,
    pub credentials: Option<SecureCredentials>,
    /// Sent as both `Content-Type` and `Accept`; empty disables both headers
    pub mime_type: String,
    /// Used as connect timeout and as total request timeout
    pub timeout: Duration,
    pub proxy: Option<ProxyConfig>,
    /// Log outgoing requests and their results at debug level
    pub debug: bool,
    pub tls: TlsConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_uri: DEFAULT_BASE_URI.to_string(),
            credentials: None,
            mime_type: DEFAULT_MIME_TYPE.to_string(),
            timeout: DEFAULT_TIMEOUT,
            proxy: None,
            debug: false,
            tls: TlsConfig::default(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read configuration from `ADDRESSCHECK_*` environment variables
    pub fn from_env() -> AddressCheckResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup using the `ADDRESSCHECK_*` names.
    /// Missing keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> AddressCheckResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_uri) = lookup(ENV_BASE_URI) {
            config.base_uri = base_uri;
        }

        let username = lookup(ENV_USERNAME);
        let password = lookup(ENV_PASSWORD);
        if username.is_some() || password.is_some() {
            config.credentials = Some(SecureCredentials::new(
                username.unwrap_or_default(),
                password.unwrap_or_default(),
            ));
        }

        if let Some(mime_type) = lookup(ENV_MIME_TYPE) {
            config.mime_type = mime_type;
        }

        if let Some(timeout) = lookup(ENV_TIMEOUT) {
            let seconds = timeout.trim().parse::<u64>().map_err(|_| {
                AddressCheckError::InvalidConfig(format!("{} must be a number of seconds, got '{}'", ENV_TIMEOUT, timeout))
            })?;
            config.timeout = Duration::from_secs(seconds);
        }

        if let Some(host) = lookup(ENV_PROXY_HOST).filter(|h| !h.is_empty()) {
            let port = match lookup(ENV_PROXY_PORT) {
                Some(port) => port.trim().parse::<u16>().map_err(|_| {
                    AddressCheckError::InvalidConfig(format!("{} must be a port number, got '{}'", ENV_PROXY_PORT, port))
                })?,
                None => DEFAULT_PROXY_PORT,
            };
            config.proxy = Some(ProxyConfig { host, port });
        }

        if let Some(debug) = lookup(ENV_DEBUG) {
            config.debug = matches!(debug.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on");
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = base_uri.into();
        self
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some(SecureCredentials::new(username, password));
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_proxy(mut self, host: impl Into<String>, port: u16) -> Self {
        self.proxy = Some(ProxyConfig { host: host.into(), port });
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_tls_config(mut self, tls: TlsConfig) -> Self {
        self.tls = tls;
        self
    }

    /// Check that the base URI can carry resource paths
    pub fn validate(&self) -> AddressCheckResult<()> {
        let url = Url::parse(&self.base_uri)
            .map_err(|e| AddressCheckError::InvalidConfig(format!("invalid base URI '{}': {}", self.base_uri, e)))?;
        if url.cannot_be_a_base() {
            return Err(AddressCheckError::InvalidConfig(format!(
                "base URI '{}' cannot carry a resource path",
                self.base_uri
            )));
        }
        if self.timeout.is_zero() {
            return Err(AddressCheckError::InvalidConfig("timeout must be greater than 0".into()));
        }
        Ok(())
    }
}
