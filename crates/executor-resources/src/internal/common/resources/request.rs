use std::fmt;

use serde::{Deserialize, Serialize};

use crate::internal::common::error::ResourceError;
use crate::internal::common::resources::ResourceAmount;
use crate::internal::common::resources::names::{custom_resource_type, is_allowed_resource_name};

/// A single resource asked for by each executor of a resource profile.
///
/// The resource name is validated when the request is created, so every existing
/// request names either an internal resource (`cores`, `memory`, ...) or a custom
/// resource from the `resource.` namespace. A request cannot be modified; build a new
/// one instead.
///
/// `discovery_script` is a path to a script that prints the addresses of the
/// resource on the executor node. It is only stored here, never executed.
/// `vendor` is passed to cluster managers that understand it.
#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq)]
#[serde(try_from = "ExecutorResourceRequestDef")]
pub struct ExecutorResourceRequest {
    resource_name: String,
    amount: ResourceAmount,
    discovery_script: String,
    vendor: String,
}

impl ExecutorResourceRequest {
    pub fn new(
        resource_name: impl Into<String>,
        amount: ResourceAmount,
    ) -> crate::Result<ExecutorResourceRequest> {
        Self::with_details(resource_name, amount, String::new(), String::new())
    }

    pub fn with_details(
        resource_name: impl Into<String>,
        amount: ResourceAmount,
        discovery_script: impl Into<String>,
        vendor: impl Into<String>,
    ) -> crate::Result<ExecutorResourceRequest> {
        let resource_name = resource_name.into();
        if !is_allowed_resource_name(&resource_name) {
            log::debug!("Rejecting executor resource request for '{resource_name}'");
            return Err(ResourceError::InvalidResourceName(resource_name));
        }
        Ok(ExecutorResourceRequest {
            resource_name,
            amount,
            discovery_script: discovery_script.into(),
            vendor: vendor.into(),
        })
    }

    #[inline]
    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    #[inline]
    pub fn amount(&self) -> ResourceAmount {
        self.amount
    }

    #[inline]
    pub fn discovery_script(&self) -> &str {
        &self.discovery_script
    }

    #[inline]
    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn is_custom(&self) -> bool {
        self.custom_resource_type().is_some()
    }

    pub fn custom_resource_type(&self) -> Option<&str> {
        custom_resource_type(&self.resource_name)
    }
}

impl fmt::Display for ExecutorResourceRequest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "name: {}, amount: {}", self.resource_name, self.amount)?;
        if !self.discovery_script.is_empty() {
            write!(f, ", script: {}", self.discovery_script)?;
        }
        if !self.vendor.is_empty() {
            write!(f, ", vendor: {}", self.vendor)?;
        }
        Ok(())
    }
}

// Unvalidated form, deserialized data has to pass through `with_details`
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ExecutorResourceRequestDef {
    #[serde(alias = "name")]
    resource_name: String,
    amount: ResourceAmount,
    #[serde(default, alias = "discoveryScript")]
    discovery_script: String,
    #[serde(default)]
    vendor: String,
}

impl TryFrom<ExecutorResourceRequestDef> for ExecutorResourceRequest {
    type Error = ResourceError;

    fn try_from(def: ExecutorResourceRequestDef) -> Result<Self, Self::Error> {
        ExecutorResourceRequest::with_details(
            def.resource_name,
            def.amount,
            def.discovery_script,
            def.vendor,
        )
    }
}
