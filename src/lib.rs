//! Image Registry Operator API
//!
//! Kubernetes API types for the image registry operator's cluster-scoped
//! `Config` resource (`imageregistry.operator.openshift.io/v1`), plus the
//! small amount of tooling needed to generate its CRD and inspect instances.
//!
//! ## Quick Start
//!
//! ```rust
//! use image_registry_operator_api::prelude::*;
//!
//! let config: Config = serde_yaml::from_str(r#"
//! metadata:
//!   name: instance
//! spec:
//!   managementState: Managed
//!   storage:
//!     s3:
//!       bucket: registry-bucket
//! "#).unwrap();
//! assert_eq!(config.spec.storage.kind().unwrap(), Some(StorageKind::S3));
//! ```

pub mod config;
pub mod constants;
pub mod crd;
pub mod document;
pub mod duration;
pub mod error;
pub mod observability;
pub mod prelude;
