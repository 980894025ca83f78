//! # Network Configuration
//!
//! Proxy settings for outbound registry traffic and routes exposing the
//! registry outside the cluster.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Proxy settings passed through to the registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageRegistryConfigProxy {
    /// Proxy for plain HTTP connections
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<String>,
    /// Proxy for HTTPS connections
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub https: Option<String>,
    /// Comma separated hosts that bypass the proxy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_proxy: Option<String>,
}

impl ImageRegistryConfigProxy {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.http.is_none() && self.https.is_none() && self.no_proxy.is_none()
    }
}

/// Additional external route for the registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageRegistryConfigRoute {
    /// Name of the route object
    pub name: String,
    /// Externally reachable hostname
    pub hostname: String,
    /// Secret holding the route's TLS certificate
    pub secret_name: String,
}

impl ImageRegistryConfigRoute {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        hostname: impl Into<String>,
        secret_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            hostname: hostname.into(),
            secret_name: secret_name.into(),
        }
    }
}
