//! # Prelude
//!
//! Re-exports commonly used types and traits for convenience.
//!
//! ```rust
//! use image_registry_operator_api::prelude::*;
//! ```

// CRD types - most commonly used
pub use crate::crd::*;

pub use crate::constants::{
    IMAGE_REGISTRY_OPERATOR_NAMESPACE, IMAGE_REGISTRY_RESOURCE_NAME, STORAGE_CONDITION_TYPES,
};
pub use crate::document::{decode, encode, Document, Format};
pub use crate::duration::Duration;
pub use crate::error::{Error, Result};

// Needed for Config::crd()
pub use kube::CustomResourceExt;
