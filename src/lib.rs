//! # addresscheck: a Rust client for the AddressCheck API
//!
//! This crate wraps the AddressCheck e-mail verification REST API. Every check
//! is a typed method on a service; every response is normalized into a
//! [`NormalizedResult`] carrying the status code, the decoded JSON or XML body,
//! and syntax warnings expanded into readable messages.
//!
//! ## Key Features
//!
//! - All `address/*` checks and `info/*` resources as async methods
//! - JSON and XML responses decoded into one tree shape
//! - Warning codes (`synm001`, `extm012`, ...) translated from a static catalog
//! - Typed errors separating retryable transport/server failures from permanent ones
//! - Pluggable transport for testing without a network
//! - Credentials redacted from debug output
//!
//! ## Basic Usage
//!
//! ```no_run
//! use addresscheck::from_env;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads ADDRESSCHECK_USERNAME and ADDRESSCHECK_PASSWORD
//!     let client = from_env()?;
//!
//!     let result = client.address().syntax_check("someone@example").await?;
//!     if let Some(warnings) = result.syntax_warnings() {
//!         for (code, message) in warnings {
//!             println!("{}: {}", code, message);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod types;
pub mod client;
pub mod config;
pub mod normalizer;
pub mod response;
pub mod services;
pub mod transport;
pub mod warnings;
mod xml;

// Re-export core components
pub use client::AddressCheck;
pub use config::{ClientConfig, ProxyConfig, TlsConfig};
pub use normalizer::ResponseNormalizer;
pub use response::{NormalizedResult, RawResponse, ResponseBody};
pub use transport::{ReqwestTransport, Transport, TransportFailure};
pub use types::{
    redact_authorization, AddressCheckError, AddressCheckResult, BodyFormat, SecureCredentials, TransportErrorKind,
};
pub use warnings::{WarningFamily, WarningTable};

pub use services::{AddressCheckService, AddressService, InfoService, ServiceOperations, ValidationOperations};

pub mod prelude {
    //! Convenient imports for commonly used types and functions
    pub use crate::{
        from_env, new_client, AddressCheck, AddressCheckError, AddressCheckResult, AddressService, ClientConfig,
        InfoService, NormalizedResult, ResponseBody, WarningTable,
    };
}

// Entry point functions
pub fn new_client(username: impl Into<String>, password: impl Into<String>) -> AddressCheckResult<AddressCheck> {
    AddressCheck::new(username, password)
}

/// Create a client from `ADDRESSCHECK_*` environment variables.
///
/// Fails with [`AddressCheckError::MissingCredentials`] when username or password is unset.
pub fn from_env() -> AddressCheckResult<AddressCheck> {
    let config = ClientConfig::from_env()?;
    if !config.credentials.as_ref().is_some_and(|c| c.is_complete()) {
        return Err(AddressCheckError::MissingCredentials);
    }
    AddressCheck::from_config(config)
}
