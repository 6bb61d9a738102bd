//! Base implementation for AddressCheck services.

use crate::client::AddressCheck;
use crate::services::{AddressCheckService, ServiceOperations, ValidationOperations};
use std::sync::Arc;

/// Base service providing the shared plumbing for all services
pub struct BaseService {
    /// Reference to the AddressCheck client
    client: Arc<AddressCheck>,
    /// Path prefix for this service
    service_name: String,
}

impl BaseService {
    /// Create a new base service
    pub fn new(client: Arc<AddressCheck>, service_name: impl Into<String>) -> Self {
        Self {
            client,
            service_name: service_name.into(),
        }
    }
}

impl AddressCheckService for BaseService {
    fn service_name(&self) -> &str {
        &self.service_name
    }
}

impl ValidationOperations for BaseService {}

impl ServiceOperations for BaseService {
    fn client(&self) -> &AddressCheck {
        &self.client
    }
}
