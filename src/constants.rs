//! # Constants
//!
//! Well-known names shared between the API types and the tooling built on them.
//!
//! None of these are enforced by the schema. The operator conventionally only
//! acts on the `Config` named [`IMAGE_REGISTRY_RESOURCE_NAME`], but a cluster
//! may hold other instances and they decode like any other.

/// API group of the `Config` custom resource
pub const API_GROUP: &str = "imageregistry.operator.openshift.io";

/// API version of the `Config` custom resource
pub const API_VERSION: &str = "v1";

/// Kind of the list wrapper returned by list operations
pub const CONFIG_LIST_KIND: &str = "ConfigList";

/// Operator status type reported when the registry has been removed
pub const OPERATOR_STATUS_TYPE_REMOVED: &str = "Removed";

/// Base name for registry workloads
pub const IMAGE_REGISTRY_NAME: &str = "image-registry";

/// Name of the singleton `Config` the operator reconciles
pub const IMAGE_REGISTRY_RESOURCE_NAME: &str = "instance";

/// Name of the registry certificates config map
pub const IMAGE_REGISTRY_CERTIFICATES_NAME: &str = "image-registry-certificates";

/// Name of the operator-managed storage credentials secret
pub const IMAGE_REGISTRY_PRIVATE_CONFIGURATION: &str = "image-registry-private-configuration";

/// Name of the user-provided storage credentials secret
pub const IMAGE_REGISTRY_PRIVATE_CONFIGURATION_USER: &str =
    "image-registry-private-configuration-user";

/// Namespace the operator and the registry run in
pub const IMAGE_REGISTRY_OPERATOR_NAMESPACE: &str = "openshift-image-registry";

/// Whether the registry storage medium exists
pub const STORAGE_EXISTS: &str = "StorageExists";

/// Whether the storage medium the operator created was tagged correctly
pub const STORAGE_TAGGED: &str = "StorageTagged";

/// Whether the storage medium the operator created has encryption enabled
pub const STORAGE_ENCRYPTED: &str = "StorageEncrypted";

/// Whether the storage medium cleans up incomplete uploads automatically
pub const STORAGE_INCOMPLETE_UPLOAD_CLEANUP_ENABLED: &str = "StorageIncompleteUploadCleanupEnabled";

/// Storage condition types in declaration order
pub const STORAGE_CONDITION_TYPES: [&str; 4] = [
    STORAGE_EXISTS,
    STORAGE_TAGGED,
    STORAGE_ENCRYPTED,
    STORAGE_INCOMPLETE_UPLOAD_CLEANUP_ENABLED,
];

/// Default log level for the binaries
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log format for the binaries (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Default document format for printed resources (yaml or json)
pub const DEFAULT_OUTPUT_FORMAT: &str = "yaml";

/// Default server-side timeout for watch requests (seconds)
/// Must stay below the API server's 295s cap on watch timeouts
pub const DEFAULT_WATCH_TIMEOUT_SECS: u32 = 290;
