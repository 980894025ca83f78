//! # Config Spec
//!
//! The `Config` custom resource and its desired state.

use crate::crd::{
    ImageRegistryConfigProxy, ImageRegistryConfigRequests, ImageRegistryConfigRoute,
    ImageRegistryConfigStorage, ManagementState,
};
use serde::{Deserialize, Serialize};

/// Desired state of the image registry
///
/// The operator conventionally only acts on the cluster-scoped `Config` named
/// `instance`. Every field is passed through as written: nothing here
/// validates, defaults or resolves conflicting settings.
///
/// # Example
///
/// ```yaml
/// apiVersion: imageregistry.operator.openshift.io/v1
/// kind: Config
/// metadata:
///   name: instance
/// spec:
///   managementState: Managed
///   storage:
///     s3:
///       bucket: registry-bucket
///       region: us-east-1
///       encrypt: true
///   requests:
///     read:
///       maxrunning: 100
///       maxwaitinqueue: 30s
///   tls: true
///   replicas: 2
/// ```
#[derive(
    kube::CustomResource, Debug, Clone, Default, PartialEq, Deserialize, Serialize, schemars::JsonSchema,
)]
#[kube(
    kind = "Config",
    group = "imageregistry.operator.openshift.io",
    version = "v1",
    plural = "configs",
    status = "crate::crd::ImageRegistryStatus",
    shortname = "irc",
    derive = "PartialEq",
    derive = "Default",
    printcolumn = r#"{"name":"Management", "type":"string", "jsonPath":".spec.managementState"}, {"name":"Storage Managed", "type":"boolean", "jsonPath":".status.storageManaged"}, {"name":"Hostname", "type":"string", "jsonPath":".status.internalRegistryHostname"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct ImageRegistrySpec {
    /// Whether the operator manages, ignores or removes the registry
    pub management_state: ManagementState,
    /// Secret used by the registry to sign upload state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_secret: Option<String>,
    /// Proxy settings for the registry's outbound connections
    #[serde(default, skip_serializing_if = "ImageRegistryConfigProxy::is_empty")]
    pub proxy: ImageRegistryConfigProxy,
    /// Storage backend, at most one of azure, filesystem, gcs, s3 or swift
    #[serde(default, skip_serializing_if = "ImageRegistryConfigStorage::is_empty")]
    pub storage: ImageRegistryConfigStorage,
    /// Read and write request limits
    #[serde(default, skip_serializing_if = "ImageRegistryConfigRequests::is_empty")]
    pub requests: ImageRegistryConfigRequests,
    /// Whether the registry serves TLS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<bool>,
    /// Config map with additional trusted CAs for the registry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_config_name: Option<String>,
    /// Whether to expose the registry through the default route
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_route: Option<bool>,
    /// Additional routes for the registry
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<ImageRegistryConfigRoute>,
    /// Number of registry replicas
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
    /// Registry log verbosity
    #[serde(default, rename = "logging", skip_serializing_if = "Option::is_none")]
    pub log_level: Option<i64>,
}
