//! # Errors
//!
//! Errors raised by the tooling around the API types.
//!
//! The API types themselves never fail: malformed documents are rejected by
//! serde at the decode boundary and surface here as [`Error::Yaml`] or
//! [`Error::Json`].

use crate::crd::StorageKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A duration string could not be parsed
    #[error("invalid duration {input:?}: {reason}")]
    InvalidDuration { input: String, reason: String },

    /// More than one storage backend is set on the same storage block
    #[error("multiple storage backends configured: {}", format_kinds(.0))]
    AmbiguousStorage(Vec<StorageKind>),

    /// The document's `kind` is neither `Config` nor `ConfigList`
    #[error("unsupported document kind {0:?}, expected Config or ConfigList")]
    UnsupportedKind(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

fn format_kinds(kinds: &[StorageKind]) -> String {
    kinds
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
