//! # Operator Status
//!
//! Generic operator types shared by operator configuration resources:
//! management state, conditions and generation tracking.

use chrono::{SecondsFormat, Utc};
use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Whether and how the operator should manage its workload
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ManagementState {
    /// The operator actively manages the workload
    #[default]
    Managed,
    /// The operator leaves the workload alone
    Unmanaged,
    /// The operator removes the workload
    Removed,
    /// The operator manages the workload even when that disrupts it
    Force,
}

impl ManagementState {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ManagementState::Managed => "Managed",
            ManagementState::Unmanaged => "Unmanaged",
            ManagementState::Removed => "Removed",
            ManagementState::Force => "Force",
        }
    }
}

impl fmt::Display for ManagementState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl JsonSchema for ManagementState {
    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed("ManagementState")
    }

    fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
        // Plain string enum, a oneOf per documented variant is not structural
        schemars::json_schema!({
            "type": "string",
            "enum": ["Managed", "Unmanaged", "Removed", "Force"],
            "description": "Whether and how the operator should manage the registry: Managed, Unmanaged, Removed or Force"
        })
    }
}

/// Status value of a condition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ConditionStatus {
    True,
    False,
    #[default]
    Unknown,
}

impl ConditionStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionStatus::True => "True",
            ConditionStatus::False => "False",
            ConditionStatus::Unknown => "Unknown",
        }
    }
}

impl From<bool> for ConditionStatus {
    fn from(value: bool) -> Self {
        if value {
            ConditionStatus::True
        } else {
            ConditionStatus::False
        }
    }
}

impl fmt::Display for ConditionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl JsonSchema for ConditionStatus {
    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed("ConditionStatus")
    }

    fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
        schemars::json_schema!({
            "type": "string",
            "enum": ["True", "False", "Unknown"]
        })
    }
}

/// Condition represents an observation of the operator's state
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OperatorCondition {
    /// Type of condition, e.g. `StorageExists`
    pub r#type: String,
    /// Status of the condition (True, False, Unknown)
    pub status: ConditionStatus,
    /// Last time the status changed (RFC3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<String>,
    /// Machine readable reason for the last transition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Human readable message for the last transition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl OperatorCondition {
    #[must_use]
    pub fn new(r#type: impl Into<String>, status: ConditionStatus) -> Self {
        Self {
            r#type: r#type.into(),
            status,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn is_true(&self) -> bool {
        self.status == ConditionStatus::True
    }
}

/// Last generation of a resource the operator acted on
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerationStatus {
    /// Group of the tracked resource
    #[serde(default)]
    pub group: String,
    /// Resource (plural) of the tracked resource
    #[serde(default)]
    pub resource: String,
    /// Namespace of the tracked resource
    #[serde(default)]
    pub namespace: String,
    /// Name of the tracked resource
    #[serde(default)]
    pub name: String,
    /// Generation of the tracked resource last acted upon
    #[serde(default)]
    pub last_generation: i64,
    /// Optional hash of the tracked resource's content
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hash: String,
}

/// Status fields common to every operator
///
/// Embedded inline into the status of operator resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OperatorStatus {
    /// Generation of the spec last observed by the operator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
    /// Latest observations of the operator's state
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<OperatorCondition>,
    /// Level the operator is at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Number of ready replicas of the managed workload
    #[serde(default)]
    pub ready_replicas: i32,
    /// Generations of the resources the operator manages
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generations: Vec<GenerationStatus>,
}

impl OperatorStatus {
    /// Find a condition by type
    #[must_use]
    pub fn condition(&self, r#type: &str) -> Option<&OperatorCondition> {
        self.conditions.iter().find(|c| c.r#type == r#type)
    }

    /// Whether the condition exists and is `True`
    #[must_use]
    pub fn is_condition_true(&self, r#type: &str) -> bool {
        self.condition(r#type).is_some_and(OperatorCondition::is_true)
    }

    /// Insert or replace a condition, matched by type
    ///
    /// The transition time is only moved when the status changes. A new
    /// condition without a transition time is stamped with the current time.
    pub fn set_condition(&mut self, mut condition: OperatorCondition) {
        match self
            .conditions
            .iter_mut()
            .find(|c| c.r#type == condition.r#type)
        {
            Some(existing) => {
                if existing.status == condition.status {
                    condition
                        .last_transition_time
                        .clone_from(&existing.last_transition_time);
                } else if condition.last_transition_time.is_none() {
                    condition.last_transition_time = Some(now_rfc3339());
                }
                *existing = condition;
            }
            None => {
                if condition.last_transition_time.is_none() {
                    condition.last_transition_time = Some(now_rfc3339());
                }
                self.conditions.push(condition);
            }
        }
    }

    /// Remove a condition by type, returning it when present
    pub fn remove_condition(&mut self, r#type: &str) -> Option<OperatorCondition> {
        let index = self.conditions.iter().position(|c| c.r#type == r#type)?;
        Some(self.conditions.remove(index))
    }
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_management_state_wire_values() {
        for (state, wire) in [
            (ManagementState::Managed, "Managed"),
            (ManagementState::Unmanaged, "Unmanaged"),
            (ManagementState::Removed, "Removed"),
            (ManagementState::Force, "Force"),
        ] {
            assert_eq!(serde_json::to_value(state).unwrap(), serde_json::json!(wire));
            assert_eq!(state.to_string(), wire);
            let decoded: ManagementState = serde_json::from_value(serde_json::json!(wire)).unwrap();
            assert_eq!(decoded, state);
        }
    }

    #[test]
    fn test_management_state_rejects_unknown_value() {
        let result: Result<ManagementState, _> = serde_json::from_str("\"Sometimes\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_set_condition_stamps_new_condition() {
        let mut status = OperatorStatus::default();
        status.set_condition(OperatorCondition::new("StorageExists", ConditionStatus::True));

        let condition = status.condition("StorageExists").unwrap();
        assert!(condition.last_transition_time.is_some());
        assert!(status.is_condition_true("StorageExists"));
    }

    #[test]
    fn test_set_condition_keeps_transition_time_when_status_unchanged() {
        let mut status = OperatorStatus::default();
        let mut first = OperatorCondition::new("StorageTagged", ConditionStatus::False);
        first.last_transition_time = Some("2020-01-01T00:00:00Z".to_string());
        status.set_condition(first);

        status.set_condition(
            OperatorCondition::new("StorageTagged", ConditionStatus::False)
                .with_reason("TaggingFailed")
                .with_message("still failing"),
        );

        assert_eq!(status.conditions.len(), 1);
        let condition = status.condition("StorageTagged").unwrap();
        assert_eq!(
            condition.last_transition_time.as_deref(),
            Some("2020-01-01T00:00:00Z")
        );
        assert_eq!(condition.reason.as_deref(), Some("TaggingFailed"));
    }

    #[test]
    fn test_set_condition_moves_transition_time_on_status_change() {
        let mut status = OperatorStatus::default();
        let mut first = OperatorCondition::new("StorageEncrypted", ConditionStatus::False);
        first.last_transition_time = Some("2020-01-01T00:00:00Z".to_string());
        status.set_condition(first);

        status.set_condition(OperatorCondition::new("StorageEncrypted", ConditionStatus::True));

        let condition = status.condition("StorageEncrypted").unwrap();
        assert!(condition.is_true());
        assert_ne!(
            condition.last_transition_time.as_deref(),
            Some("2020-01-01T00:00:00Z")
        );
    }

    #[test]
    fn test_remove_condition() {
        let mut status = OperatorStatus::default();
        status.set_condition(OperatorCondition::new("A", ConditionStatus::True));
        status.set_condition(OperatorCondition::new("B", ConditionStatus::Unknown));

        let removed = status.remove_condition("A").unwrap();
        assert_eq!(removed.r#type, "A");
        assert!(status.condition("A").is_none());
        assert!(status.remove_condition("A").is_none());
        assert_eq!(status.conditions.len(), 1);
    }

    #[test]
    fn test_operator_status_encoding() {
        let status = OperatorStatus {
            observed_generation: Some(3),
            ready_replicas: 2,
            ..OperatorStatus::default()
        };
        assert_eq!(
            serde_json::to_value(&status).unwrap(),
            serde_json::json!({"observedGeneration": 3, "readyReplicas": 2})
        );
    }
}
