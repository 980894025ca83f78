//! # Custom Resource Definitions
//!
//! API types for the image registry operator's `Config` resource.
//!
//! These are plain data: they round-trip through JSON and YAML, clone
//! deeply, and never validate or rewrite what they are given. Validation,
//! defaulting and picking between conflicting storage backends belong to
//! the operator that consumes them.
//!
//! ## Module Structure
//!
//! - `spec.rs` - The `Config` resource and its desired state
//! - `status.rs` - Observed state written by the operator
//! - `storage.rs` - Storage backends (Azure, filesystem, GCS, S3, Swift)
//! - `network.rs` - Proxy settings and routes
//! - `requests.rs` - Read/write request limits
//! - `operator.rs` - Generic operator status, conditions and management state
//! - `list.rs` - List wrapper

mod list;
mod network;
mod operator;
mod requests;
mod spec;
mod status;
mod storage;

// Re-export all public types
pub use list::ConfigList;
pub use network::{ImageRegistryConfigProxy, ImageRegistryConfigRoute};
pub use operator::{
    ConditionStatus, GenerationStatus, ManagementState, OperatorCondition, OperatorStatus,
};
pub use requests::{ImageRegistryConfigRequests, ImageRegistryConfigRequestsLimits};
pub use spec::{Config, ImageRegistrySpec};
pub use status::ImageRegistryStatus;
pub use storage::{
    ImageRegistryConfigStorage, ImageRegistryConfigStorageAzure,
    ImageRegistryConfigStorageFilesystem, ImageRegistryConfigStorageGCS,
    ImageRegistryConfigStorageS3, ImageRegistryConfigStorageSwift, StorageBackend, StorageKind,
    VolumeSource,
};
