use std::path::Path;

use serde::Deserialize;

use crate::internal::common::resources::ExecutorResourceRequest;

/// Executor resource requests read from a TOML document:
///
/// ```toml
/// [[resource]]
/// name = "cores"
/// amount = 4
///
/// [[resource]]
/// name = "resource.gpu"
/// amount = 2
/// discovery_script = "/opt/getGpus.sh"
/// vendor = "nvidia.com"
/// ```
///
/// Each entry is validated the same way as [`ExecutorResourceRequest::with_details`].
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ResourceRequestsConfig {
    #[serde(default, rename = "resource")]
    requests: Vec<ExecutorResourceRequest>,
}

impl ResourceRequestsConfig {
    pub fn from_toml(input: &str) -> crate::Result<Self> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: &Path) -> crate::Result<Self> {
        log::debug!("Loading executor resources from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        log::debug!(
            "Loaded {} executor resource request(s) from {}",
            config.requests.len(),
            path.display()
        );
        Ok(config)
    }

    pub fn requests(&self) -> &[ExecutorResourceRequest] {
        &self.requests
    }

    pub fn into_requests(self) -> Vec<ExecutorResourceRequest> {
        self.requests
    }
}
