//! Lookups of the resources behind the checks, all below `info/`.
//!
//! Several resources take an info ID: `a:` followed by an address, or `m:`
//! followed by a mail exchanger name.

use crate::client::AddressCheck;
use crate::response::NormalizedResult;
use crate::services::base::BaseService;
use crate::services::{AddressCheckService, ServiceOperations, ValidationOperations};
use crate::types::*;
use std::sync::Arc;

/// Client for the info resources
pub struct InfoService {
    base: BaseService,
}

impl InfoService {
    pub fn new(client: Arc<AddressCheck>) -> Self {
        Self {
            base: BaseService::new(client, "info"),
        }
    }

    /// Blacklist resource for a local part or domain name
    pub async fn blacklist(&self, id: impl Into<String>) -> AddressCheckResult<NormalizedResult> {
        self.fetch("blacklist", "id", id.into()).await
    }

    pub async fn botrisk(&self, id: impl Into<String>) -> AddressCheckResult<NormalizedResult> {
        self.fetch("botrisk", "id", id.into()).await
    }

    /// Company resource for a domain.
    ///
    /// `language` is an RFC 5646 tag for the economic classifications and is
    /// sent as `Accept-Language` on this request only.
    pub async fn company_domain(
        &self,
        domain: impl Into<String>,
        language: Option<&str>,
    ) -> AddressCheckResult<NormalizedResult> {
        self.fetch_with_language("companydomain", "domain", domain.into(), language.map(String::from))
            .await
    }

    pub async fn disposable(&self, id: impl Into<String>) -> AddressCheckResult<NormalizedResult> {
        self.fetch("disposable", "id", id.into()).await
    }

    pub async fn education_domain(&self, domain: impl Into<String>) -> AddressCheckResult<NormalizedResult> {
        self.fetch("educationdomain", "domain", domain.into()).await
    }

    pub async fn gravatar_profile_information(&self, email: impl Into<String>) -> AddressCheckResult<NormalizedResult> {
        self.fetch("gravatar", "email", email.into()).await
    }

    /// How the domain's mail servers answer questions about address existence
    pub async fn mailserver_diagnosis(&self, domain: impl Into<String>) -> AddressCheckResult<NormalizedResult> {
        self.fetch("mailserverdiagnosis", "domain", domain.into()).await
    }

    pub async fn spam_trap(&self, id: impl Into<String>) -> AddressCheckResult<NormalizedResult> {
        self.fetch("spamtrap", "id", id.into()).await
    }
}

impl AddressCheckService for InfoService {
    fn service_name(&self) -> &str {
        self.base.service_name()
    }
}

impl ValidationOperations for InfoService {}

impl ServiceOperations for InfoService {
    fn client(&self) -> &AddressCheck {
        self.base.client()
    }
}
