pub const CORES_RESOURCE_NAME: &str = "cores";
pub const MEMORY_RESOURCE_NAME: &str = "memory";
pub const OVERHEAD_MEMORY_RESOURCE_NAME: &str = "memoryOverhead";
pub const PYSPARK_MEMORY_RESOURCE_NAME: &str = "pyspark.memory";

/// Namespace of user defined resources (e.g. `resource.gpu`).
pub const CUSTOM_RESOURCE_PREFIX: &str = "resource.";

/// Resources with built-in scheduling semantics. This set is closed.
pub const EXECUTOR_INTERNAL_RESOURCES: [&str; 4] = [
    CORES_RESOURCE_NAME,
    MEMORY_RESOURCE_NAME,
    OVERHEAD_MEMORY_RESOURCE_NAME,
    PYSPARK_MEMORY_RESOURCE_NAME,
];

#[inline]
pub fn is_internal_resource_name(name: &str) -> bool {
    EXECUTOR_INTERNAL_RESOURCES.contains(&name)
}

/// A name is permitted when it is one of the internal resources or when it starts
/// with `prefix`. The check is case-sensitive and the name is not normalized.
#[inline]
pub fn is_permitted_resource_name(name: &str, prefix: &str) -> bool {
    is_internal_resource_name(name) || name.starts_with(prefix)
}

#[inline]
pub fn is_allowed_resource_name(name: &str) -> bool {
    is_permitted_resource_name(name, CUSTOM_RESOURCE_PREFIX)
}

/// Returns the device class of a custom resource, i.e. `gpu` for `resource.gpu`.
pub fn custom_resource_type(name: &str) -> Option<&str> {
    name.strip_prefix(CUSTOM_RESOURCE_PREFIX)
}
