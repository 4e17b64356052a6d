use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

/// An automation workflow template.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Formula {
    #[serde(skip_serializing_if = "crate::is_zero")]
    pub id: i64,
    pub name: String,
    pub user_id: i64,
    pub account_id: i64,
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_date: Option<OffsetDateTime>,
    pub steps: Vec<Step>,
    pub triggers: Vec<Trigger>,
    pub active: bool,
    pub single_threaded: bool,
    pub configuration: Vec<FormulaConfiguration>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api: String,
    /// Populated client-side by combining the formula list with per-formula
    /// instance lookups; the platform does not return it.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instances: Vec<FormulaInstance>,
}

impl Formula {
    /// Type of the first trigger, the one the platform fires the formula with.
    pub fn primary_trigger_type(&self) -> Option<&str> {
        self.triggers.first().map(|t| t.kind.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Step {
    #[serde(skip_serializing_if = "crate::is_zero")]
    pub id: i64,
    pub on_success: Vec<String>,
    pub on_failure: Vec<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Trigger {
    #[serde(skip_serializing_if = "crate::is_zero")]
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub on_success: Vec<String>,
    pub on_failure: Vec<String>,
    #[serde(rename = "async")]
    pub is_async: bool,
    pub name: String,
    pub properties: Value,
}

/// A configuration variable a formula instance must supply.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FormulaConfiguration {
    #[serde(skip_serializing_if = "crate::is_zero")]
    pub id: i64,
    #[serde(alias = "Key")]
    pub key: String,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(rename = "type", alias = "Type")]
    pub kind: String,
    #[serde(alias = "Required")]
    pub required: bool,
}

/// A configured, runnable occurrence of a [`Formula`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormulaInstance {
    pub id: i64,
    pub formula: Formula,
    pub name: String,
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_date: Option<OffsetDateTime>,
    pub settings: Value,
    pub active: bool,
    pub configuration: Value,
}

/// Request body for `POST /formulas/{id}/instances`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FormulaInstanceConfig {
    pub name: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormulaInstanceCreationResponse {
    pub id: i64,
    pub request_id: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormulaInstanceExecution {
    pub id: i64,
    pub formula_instance_id: i64,
    pub status: String,
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_date: Option<OffsetDateTime>,
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_date: Option<OffsetDateTime>,
}

/// Body for `PATCH /formulas/instances/executions/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExecutionStatusRequest {
    pub status: String,
}

impl ExecutionStatusRequest {
    pub fn cancelled() -> Self {
        Self {
            status: "cancelled".to_string(),
        }
    }
}
