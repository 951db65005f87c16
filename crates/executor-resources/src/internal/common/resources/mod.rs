pub mod names;
pub mod request;

pub use names::{
    CORES_RESOURCE_NAME, CUSTOM_RESOURCE_PREFIX, EXECUTOR_INTERNAL_RESOURCES,
    MEMORY_RESOURCE_NAME, OVERHEAD_MEMORY_RESOURCE_NAME, PYSPARK_MEMORY_RESOURCE_NAME,
    custom_resource_type, is_allowed_resource_name, is_internal_resource_name,
    is_permitted_resource_name,
};
pub use request::ExecutorResourceRequest;

/// Amount of a resource per executor (cores, MiB of memory, number of devices, ...).
/// Negative values are representable and are not rejected at this level.
pub type ResourceAmount = i64;
