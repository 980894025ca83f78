//! # Request Limits
//!
//! Admission knobs for registry read and write requests. These are only
//! configuration values, the registry applies them.

use crate::duration::Duration;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Limits for one class of requests
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct ImageRegistryConfigRequestsLimits {
    /// Maximum number of requests served concurrently
    #[serde(default, rename = "maxrunning", skip_serializing_if = "Option::is_none")]
    pub max_running: Option<i64>,
    /// Maximum number of requests waiting for a slot
    #[serde(default, rename = "maxinqueue", skip_serializing_if = "Option::is_none")]
    pub max_in_queue: Option<i64>,
    /// Maximum time a request may wait in the queue, e.g. "30s"
    #[serde(default, rename = "maxwaitinqueue", skip_serializing_if = "Option::is_none")]
    pub max_wait_in_queue: Option<Duration>,
}

impl ImageRegistryConfigRequestsLimits {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.max_running.is_none() && self.max_in_queue.is_none() && self.max_wait_in_queue.is_none()
    }
}

/// Limits for read (pull) and write (push) requests
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct ImageRegistryConfigRequests {
    #[serde(default, skip_serializing_if = "ImageRegistryConfigRequestsLimits::is_empty")]
    pub read: ImageRegistryConfigRequestsLimits,
    #[serde(default, skip_serializing_if = "ImageRegistryConfigRequestsLimits::is_empty")]
    pub write: ImageRegistryConfigRequestsLimits,
}

impl ImageRegistryConfigRequests {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read.is_empty() && self.write.is_empty()
    }
}
