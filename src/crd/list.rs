//! # Config List
//!
//! List wrapper produced by list operations against the resource store.

use crate::constants::{API_GROUP, API_VERSION, CONFIG_LIST_KIND};
use crate::crd::Config;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ListMeta;
use serde::{Deserialize, Serialize};

/// Ordered collection of `Config` resources
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigList {
    #[serde(default = "default_list_api_version")]
    pub api_version: String,
    #[serde(default = "default_list_kind")]
    pub kind: String,
    /// List metadata (resource version, continue token)
    #[serde(default)]
    pub metadata: ListMeta,
    #[serde(default)]
    pub items: Vec<Config>,
}

impl ConfigList {
    #[must_use]
    pub fn new(items: Vec<Config>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Config> {
        self.items.iter()
    }
}

impl Default for ConfigList {
    fn default() -> Self {
        Self {
            api_version: default_list_api_version(),
            kind: default_list_kind(),
            metadata: ListMeta::default(),
            items: Vec::new(),
        }
    }
}

impl From<kube::core::ObjectList<Config>> for ConfigList {
    fn from(list: kube::core::ObjectList<Config>) -> Self {
        Self {
            metadata: list.metadata,
            ..Self::new(list.items)
        }
    }
}

impl FromIterator<Config> for ConfigList {
    fn from_iter<I: IntoIterator<Item = Config>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for ConfigList {
    type Item = Config;
    type IntoIter = std::vec::IntoIter<Config>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConfigList {
    type Item = &'a Config;
    type IntoIter = std::slice::Iter<'a, Config>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn default_list_api_version() -> String {
    format!("{API_GROUP}/{API_VERSION}")
}

fn default_list_kind() -> String {
    CONFIG_LIST_KIND.to_string()
}
