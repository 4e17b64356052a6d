use serde::{Deserialize, Serialize};

/// An organization-level canonical object schema.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommonResource {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "elementInstanceIds", skip_serializing_if = "Vec::is_empty")]
    pub element_instance_ids: Vec<i64>,
    pub fields: Vec<ResourceField>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub level: String,
}

impl CommonResource {
    pub fn field_paths(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.path.as_str()).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceField {
    #[serde(rename = "type")]
    pub kind: String,
    pub path: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub associated_level: String,
    #[serde(skip_serializing_if = "crate::is_zero")]
    pub associated_id: i64,
}
