pub mod internal;

pub use crate::internal::config::ResourceRequestsConfig;

pub type Error = internal::common::error::ResourceError;
pub type Result<T> = std::result::Result<T, Error>;

pub mod resources {
    pub use crate::internal::common::resources::{
        CORES_RESOURCE_NAME, CUSTOM_RESOURCE_PREFIX, EXECUTOR_INTERNAL_RESOURCES,
        ExecutorResourceRequest, MEMORY_RESOURCE_NAME, OVERHEAD_MEMORY_RESOURCE_NAME,
        PYSPARK_MEMORY_RESOURCE_NAME, ResourceAmount, custom_resource_type,
        is_allowed_resource_name, is_internal_resource_name, is_permitted_resource_name,
    };
}
