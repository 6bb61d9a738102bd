// Core Client Implementation

use crate::config::{ClientConfig, ProxyConfig};
use crate::normalizer::ResponseNormalizer;
use crate::response::NormalizedResult;
use crate::services::{AddressService, InfoService};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::*;
use reqwest::{header, Client as HttpClient, Request};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

#[derive(Clone)]
pub struct AddressCheck {
    pub(crate) http_client: HttpClient,
    pub(crate) config: ClientConfig,
    pub(crate) transport: Arc<dyn Transport>,
    // set once `with_transport` replaces the reqwest transport
    pub(crate) custom_transport: bool,
}

impl AddressCheck {
    /// Create a client for the default endpoint with the given credentials
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> AddressCheckResult<Self> {
        Self::from_config(ClientConfig::default().with_credentials(username, password))
    }

    /// Create a client from a full configuration
    pub fn from_config(config: ClientConfig) -> AddressCheckResult<Self> {
        config.validate()?;
        let http_client = build_http_client(&config)?;
        let transport = Arc::new(ReqwestTransport::new(http_client.clone()));

        Ok(Self {
            http_client,
            config,
            transport,
            custom_transport: false,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_uri
    }

    /// Set a custom base URL for the API
    pub fn with_base_url(mut self, url: impl Into<String>) -> AddressCheckResult<Self> {
        self.config.base_uri = url.into();
        self.config.validate()?;
        Ok(self)
    }

    /// Set the MIME type sent as `Content-Type` and `Accept`
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.config.mime_type = mime_type.into();
        self
    }

    /// Set the connect and total timeout applied to each request
    pub fn with_timeout(mut self, timeout: Duration) -> AddressCheckResult<Self> {
        if timeout.is_zero() {
            return Err(AddressCheckError::ValidationError("timeout must be greater than 0".into()));
        }
        self.config.timeout = timeout;
        self.rebuild_http_client()?;
        Ok(self)
    }

    /// Route requests through an HTTP proxy; an empty host removes the proxy
    pub fn with_proxy(mut self, host: impl Into<String>, port: u16) -> AddressCheckResult<Self> {
        let host = host.into();
        self.config.proxy = if host.is_empty() {
            None
        } else {
            Some(ProxyConfig { host, port })
        };
        self.rebuild_http_client()?;
        Ok(self)
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    pub fn is_debug(&self) -> bool {
        self.config.debug
    }

    /// Replace the transport, e.g. with a recording mock in tests
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Arc::new(transport);
        self.custom_transport = true;
        self
    }

    // connect timeout and proxy live in the reqwest client, not on the request
    fn rebuild_http_client(&mut self) -> AddressCheckResult<()> {
        self.http_client = build_http_client(&self.config)?;
        if !self.custom_transport {
            self.transport = Arc::new(ReqwestTransport::new(self.http_client.clone()));
        }
        Ok(())
    }

    /// Service for the `address/*` checks
    pub fn address(&self) -> AddressService {
        AddressService::new(Arc::new(self.clone()))
    }

    /// Service for the `info/*` resources
    pub fn info(&self) -> InfoService {
        InfoService::new(Arc::new(self.clone()))
    }

    /// Send a GET request for a resource path such as `address/syntax/someone@example.com`
    pub async fn get(&self, resource_path: &str, query: &[(&str, &str)]) -> AddressCheckResult<NormalizedResult> {
        let segments: Vec<&str> = resource_path.split('/').filter(|s| !s.is_empty()).collect();
        self.get_segments(&segments, query, None).await
    }

    /// Send a GET request for already separated path segments.
    ///
    /// Each segment is percent-encoded on its own, so a `/` inside an argument stays part of it.
    pub(crate) async fn get_segments(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
        accept_language: Option<&str>,
    ) -> AddressCheckResult<NormalizedResult> {
        let request = self.build_request(segments, query, accept_language)?;
        if self.config.debug {
            log_request(&request);
        }

        let outcome = self.transport.execute(request).await;
        let result = ResponseNormalizer::normalize(outcome);

        if self.config.debug {
            match &result {
                Ok(normalized) => log::debug!("Result:\n{}", normalized),
                Err(error) => log::debug!("Caught error: {}", error),
            }
        }

        result
    }

    /// Full request URL for a resource path and query parameters
    pub fn request_url(&self, segments: &[&str], query: &[(&str, &str)]) -> AddressCheckResult<Url> {
        let mut url = Url::parse(&self.config.base_uri)
            .map_err(|e| AddressCheckError::InvalidConfig(format!("invalid base URI '{}': {}", self.config.base_uri, e)))?;

        url.path_segments_mut()
            .map_err(|_| {
                AddressCheckError::InvalidConfig(format!("base URI '{}' cannot carry a resource path", self.config.base_uri))
            })?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }

    fn build_request(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
        accept_language: Option<&str>,
    ) -> AddressCheckResult<Request> {
        let credentials = self
            .config
            .credentials
            .as_ref()
            .filter(|c| c.is_complete())
            .ok_or(AddressCheckError::MissingCredentials)?;

        let url = self.request_url(segments, query)?;
        let mut builder = self
            .http_client
            .get(url)
            .basic_auth(credentials.username(), Some(credentials.password()))
            .timeout(self.config.timeout);

        if !self.config.mime_type.is_empty() {
            builder = builder
                .header(header::CONTENT_TYPE, self.config.mime_type.as_str())
                .header(header::ACCEPT, self.config.mime_type.as_str());
        }

        if let Some(language) = accept_language.filter(|l| !l.is_empty()) {
            builder = builder.header(header::ACCEPT_LANGUAGE, language);
        }

        builder
            .build()
            .map_err(|e| AddressCheckError::request_error(format!("invalid request: {}", e), Some(e)))
    }
}

fn build_http_client(config: &ClientConfig) -> AddressCheckResult<HttpClient> {
    let mut builder = HttpClient::builder()
        .connect_timeout(config.timeout)
        .timeout(config.timeout)
        .danger_accept_invalid_certs(!config.tls.cert_verification);

    if let Some(version) = config.tls.min_tls_version {
        builder = builder.min_tls_version(version);
    }

    if let Some(proxy_config) = &config.proxy {
        let proxy_url = proxy_config.url();
        let proxy = reqwest::Proxy::all(proxy_url.as_str())
            .map_err(|e| AddressCheckError::InvalidConfig(format!("invalid proxy '{}': {}", proxy_url, e)))?;
        builder = builder.proxy(proxy);
    }

    builder
        .build()
        .map_err(|e| AddressCheckError::InvalidConfig(format!("failed to create HTTP client: {}", e)))
}

fn log_request(request: &Request) {
    log::debug!("{}", request_log(request));
}

fn request_log(request: &Request) -> String {
    let headers: String = request
        .headers()
        .iter()
        .map(|(name, value)| format!("{}: {}\n", name, value.to_str().unwrap_or("<binary>")))
        .collect();
    format!("{} {}\n{}", request.method(), request.url(), redact_authorization(&headers))
}

impl std::fmt::Debug for AddressCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddressCheck")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
