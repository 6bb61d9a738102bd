//! Checks on a single e-mail address, all below `address/`.

use crate::client::AddressCheck;
use crate::response::NormalizedResult;
use crate::services::base::BaseService;
use crate::services::{AddressCheckService, ServiceOperations, ValidationOperations};
use crate::types::*;
use std::sync::Arc;

const PARAM: &str = "email";

/// Client for the address check resources
pub struct AddressService {
    base: BaseService,
}

impl AddressService {
    pub fn new(client: Arc<AddressCheck>) -> Self {
        Self {
            base: BaseService::new(client, "address"),
        }
    }

    /// Formal validity and existence of the address.
    ///
    /// Returns as soon as a temporary error makes the existence check impossible.
    pub async fn fast_quality_check(&self, email: impl Into<String>) -> AddressCheckResult<NormalizedResult> {
        self.fetch("quality", PARAM, email.into()).await
    }

    /// Formal validity and existence of the address, with a background recheck on temporary errors.
    ///
    /// Repeat the call later to pick up the result of the background check.
    pub async fn enhanced_quality_check(&self, email: impl Into<String>) -> AddressCheckResult<NormalizedResult> {
        self.fetch("quality-n", PARAM, email.into()).await
    }

    /// Syntax-only validation; reports `syntaxWarnings`
    pub async fn syntax_check(&self, email: impl Into<String>) -> AddressCheckResult<NormalizedResult> {
        self.fetch("syntax", PARAM, email.into()).await
    }

    /// Risk of getting blacklisted when mailing this address
    pub async fn blacklist_risk_check(&self, email: impl Into<String>) -> AddressCheckResult<NormalizedResult> {
        self.fetch("blacklist", PARAM, email.into()).await
    }

    /// Risk that the address belongs to a bot
    pub async fn bot_risk_check(&self, email: impl Into<String>) -> AddressCheckResult<NormalizedResult> {
        self.fetch("botrisk", PARAM, email.into()).await
    }

    /// Whether the domain answers with challenge-response anti-spam mails
    pub async fn challenge_response_risk_check(&self, email: impl Into<String>) -> AddressCheckResult<NormalizedResult> {
        self.fetch("crrisk", PARAM, email.into()).await
    }

    pub async fn company_domain_check(&self, email: impl Into<String>) -> AddressCheckResult<NormalizedResult> {
        self.fetch("companydomain", PARAM, email.into()).await
    }

    /// Whether the domain hands out temporary, disposable addresses
    pub async fn disposable_address_check(&self, email: impl Into<String>) -> AddressCheckResult<NormalizedResult> {
        self.fetch("disposable", PARAM, email.into()).await
    }

    pub async fn education_domain_check(&self, email: impl Into<String>) -> AddressCheckResult<NormalizedResult> {
        self.fetch("educationdomain", PARAM, email.into()).await
    }

    /// Gender and name hints derived from the local part
    pub async fn gender_and_name_check(&self, email: impl Into<String>) -> AddressCheckResult<NormalizedResult> {
        self.fetch("gender", PARAM, email.into()).await
    }

    pub async fn gravatar_check(&self, email: impl Into<String>) -> AddressCheckResult<NormalizedResult> {
        self.fetch("gravatar", PARAM, email.into()).await
    }

    /// Whether the domain belongs to an ISP, webmail or telecom provider
    pub async fn iwt_domain_check(&self, email: impl Into<String>) -> AddressCheckResult<NormalizedResult> {
        self.fetch("iwt", PARAM, email.into()).await
    }

    pub async fn language_check(&self, email: impl Into<String>) -> AddressCheckResult<NormalizedResult> {
        self.fetch("language", PARAM, email.into()).await
    }

    /// Whether the address is registered as a no-advertising household
    pub async fn no_advertising_check(&self, email: impl Into<String>) -> AddressCheckResult<NormalizedResult> {
        self.fetch("no-advertising", PARAM, email.into()).await
    }

    pub async fn public_service_domain_check(&self, email: impl Into<String>) -> AddressCheckResult<NormalizedResult> {
        self.fetch("publicservicedomain", PARAM, email.into()).await
    }

    pub async fn robinson_list_check(&self, email: impl Into<String>) -> AddressCheckResult<NormalizedResult> {
        self.fetch("robinsonlist", PARAM, email.into()).await
    }

    /// Whether the address is a functional role rather than a person
    pub async fn role_check(&self, email: impl Into<String>) -> AddressCheckResult<NormalizedResult> {
        self.fetch("role", PARAM, email.into()).await
    }

    pub async fn spam_trap_check(&self, email: impl Into<String>) -> AddressCheckResult<NormalizedResult> {
        self.fetch("spamtrap", PARAM, email.into()).await
    }
}

impl AddressCheckService for AddressService {
    fn service_name(&self) -> &str {
        self.base.service_name()
    }
}

impl ValidationOperations for AddressService {}

impl ServiceOperations for AddressService {
    fn client(&self) -> &AddressCheck {
        self.base.client()
    }
}
