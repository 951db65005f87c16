use derive_builder::Builder;

use crate::internal::common::resources::{
    CUSTOM_RESOURCE_PREFIX, ExecutorResourceRequest, ResourceAmount,
};

pub use RequestConfigBuilder as RequestBuilder;

#[derive(Builder)]
#[builder(pattern = "owned", derive(Clone))]
pub struct RequestConfig {
    #[builder(setter(into))]
    name: String,
    #[builder(default)]
    amount: ResourceAmount,
    #[builder(default, setter(into))]
    discovery_script: String,
    #[builder(default, setter(into))]
    vendor: String,
}

impl RequestConfigBuilder {
    pub fn try_finish(self) -> crate::Result<ExecutorResourceRequest> {
        let RequestConfig {
            name,
            amount,
            discovery_script,
            vendor,
        } = self.build().unwrap();
        ExecutorResourceRequest::with_details(name, amount, discovery_script, vendor)
    }

    pub fn finish(self) -> ExecutorResourceRequest {
        self.try_finish().unwrap()
    }
}

pub fn custom(device: &str, amount: ResourceAmount) -> RequestBuilder {
    RequestBuilder::default()
        .name(format!("{CUSTOM_RESOURCE_PREFIX}{device}"))
        .amount(amount)
}
