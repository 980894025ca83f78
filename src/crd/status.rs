//! # Config Status
//!
//! Observed state written back by the operator.

use crate::constants::STORAGE_CONDITION_TYPES;
use crate::crd::{ImageRegistryConfigStorage, OperatorCondition, OperatorStatus};
use serde::{Deserialize, Serialize};

/// Status of the image registry
///
/// The generic operator status is held as its own field and inlined into the
/// status object on the wire, so `conditions` and `observedGeneration` sit
/// next to `storageManaged`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageRegistryStatus {
    /// Conditions, generations and replica counts
    #[serde(flatten)]
    pub operator: OperatorStatus,
    /// Whether the operator created the storage medium (such as an S3 bucket)
    #[serde(default)]
    pub storage_managed: bool,
    /// Hostname the registry is reachable at from inside the cluster
    #[serde(default)]
    pub internal_registry_hostname: String,
    /// Storage configuration the operator resolved and is using
    #[serde(default)]
    pub storage: ImageRegistryConfigStorage,
}

impl ImageRegistryStatus {
    /// The four storage condition types paired with their current condition
    pub fn storage_conditions(
        &self,
    ) -> impl Iterator<Item = (&'static str, Option<&OperatorCondition>)> + '_ {
        STORAGE_CONDITION_TYPES
            .into_iter()
            .map(|condition_type| (condition_type, self.operator.condition(condition_type)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crd::ConditionStatus;

    #[test]
    fn test_operator_status_is_inlined() {
        let mut status = ImageRegistryStatus {
            storage_managed: true,
            internal_registry_hostname: "image-registry.openshift-image-registry.svc:5000"
                .to_string(),
            ..ImageRegistryStatus::default()
        };
        status.operator.observed_generation = Some(4);

        let value = serde_json::to_value(&status).unwrap();
        assert_eq!(value["observedGeneration"], 4);
        assert_eq!(value["readyReplicas"], 0);
        assert_eq!(value["storageManaged"], true);
        assert!(value.get("operator").is_none());
        // Always written, even when empty
        assert_eq!(value["storage"], serde_json::json!({}));
    }

    #[test]
    fn test_storage_conditions_in_declaration_order() {
        let mut status = ImageRegistryStatus::default();
        status
            .operator
            .set_condition(OperatorCondition::new("StorageEncrypted", ConditionStatus::True));

        let conditions: Vec<_> = status
            .storage_conditions()
            .map(|(condition_type, condition)| (condition_type, condition.map(|c| c.status)))
            .collect();
        assert_eq!(
            conditions,
            vec![
                ("StorageExists", None),
                ("StorageTagged", None),
                ("StorageEncrypted", Some(ConditionStatus::True)),
                ("StorageIncompleteUploadCleanupEnabled", None),
            ]
        );
    }
}
