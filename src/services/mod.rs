//! Typed service methods for the AddressCheck resources.
//!
//! Each service owns one path prefix (`address`, `info`) and maps every method
//! to exactly one GET resource below it.
//!
//! ## Architecture
//!
//! - `AddressCheckService` trait: names the service and its path prefix
//! - `ValidationOperations` trait: argument checks shared by all services
//! - `ServiceOperations` trait: validated GET of `<prefix>/<resource>/<argument>`
//! - `BaseService`: implements all three and serves as a composition base
//!
//! Services contain a `BaseService` and delegate to it.
//!
//! ## Example: a custom service
//!
//! ```rust
//! use addresscheck::{AddressCheck, AddressCheckResult, NormalizedResult};
//! use addresscheck::services::{AddressCheckService, ServiceOperations, ValidationOperations, base::BaseService};
//! use std::sync::Arc;
//!
//! struct MailboxService {
//!     base: BaseService,
//! }
//!
//! impl MailboxService {
//!     pub fn new(client: Arc<AddressCheck>) -> Self {
//!         Self { base: BaseService::new(client, "mailbox") }
//!     }
//!
//!     pub async fn status(&self, email: impl Into<String>) -> AddressCheckResult<NormalizedResult> {
//!         self.fetch("status", "email", email.into()).await
//!     }
//! }
//!
//! impl AddressCheckService for MailboxService {
//!     fn service_name(&self) -> &str {
//!         self.base.service_name()
//!     }
//! }
//!
//! impl ValidationOperations for MailboxService {}
//!
//! impl ServiceOperations for MailboxService {
//!     fn client(&self) -> &AddressCheck {
//!         self.base.client()
//!     }
//! }
//! ```

pub mod base;
pub mod address;
pub mod info;

pub use address::AddressService;
pub use info::InfoService;

use crate::client::AddressCheck;
use crate::response::NormalizedResult;
use crate::types::*;
use std::future::Future;
use std::pin::Pin;

/// Future returned by service operations
pub type CheckFuture<'a> = Pin<Box<dyn Future<Output = AddressCheckResult<NormalizedResult>> + Send + 'a>>;

/// Common trait for all services
pub trait AddressCheckService: Send + Sync {
    /// The path prefix this service owns, e.g. `address`
    fn service_name(&self) -> &str;
}

/// Argument checks run before any request is built
pub trait ValidationOperations: AddressCheckService {
    fn validation_error<T>(&self, message: impl Into<String>) -> AddressCheckResult<T> {
        Err(AddressCheckError::ValidationError(format!(
            "{}: {}",
            self.service_name(),
            message.into()
        )))
    }

    /// Validate a string parameter is not blank
    fn validate_string<S: Into<String>>(&self, value: S, param_name: &str) -> AddressCheckResult<String> {
        let string = value.into();
        if string.trim().is_empty() {
            return self.validation_error(format!("{} cannot be empty", param_name));
        }
        Ok(string)
    }
}

/// Shared request path for service methods
pub trait ServiceOperations: ValidationOperations {
    /// Get a reference to the AddressCheck client
    fn client(&self) -> &AddressCheck;

    /// GET `<service>/<resource>/<argument>` after validating the argument
    fn fetch<'a>(&'a self, resource: &'a str, param_name: &'a str, argument: String) -> CheckFuture<'a> {
        self.fetch_with_language(resource, param_name, argument, None)
    }

    /// Like [`fetch`](Self::fetch), sending `Accept-Language` for this request only
    fn fetch_with_language<'a>(
        &'a self,
        resource: &'a str,
        param_name: &'a str,
        argument: String,
        language: Option<String>,
    ) -> CheckFuture<'a> {
        Box::pin(async move {
            let argument = self.validate_string(argument, param_name)?;
            let segments = [self.service_name(), resource, argument.as_str()];
            self.client()
                .get_segments(&segments, &[], language.as_deref())
                .await
        })
    }
}
