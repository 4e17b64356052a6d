use serde::{Deserialize, Serialize};

/// Per-element usage and capability descriptor from `GET /elements/metadata`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Metadata {
    pub id: i64,
    pub name: String,
    pub key: String,
    pub image: String,
    pub display_order: i64,
    pub active: bool,
    pub beta: bool,
    pub description: String,
    pub transformations: bool,
    pub element_type: String,
    pub churros: bool,
    pub element_class: String,
    pub normalized_paging: bool,
    pub swagger_validated: bool,
    pub cloneable: bool,
    pub authentication_type: String,
    pub events: Events,
    pub discovery: Discovery,
    pub bulk: Bulk,
    pub usage: Usage,
    pub api: ApiDescriptor,
    pub hub: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Events {
    pub supported: bool,
    pub methods: Vec<String>,
    pub polling_version: String,
    pub polling: Polling,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Polling {
    pub subscriptions: PollType,
    pub invoices: PollType,
    pub plans: PollType,
    pub customers: PollType,
    pub transactions: PollType,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PollType {
    pub poll_url: String,
    pub event_types: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Discovery {
    pub custom_fields: bool,
    pub custom_objects: bool,
    pub endpoint_custom_fields: bool,
    pub endpoint_custom_objects: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Bulk {
    pub upload: bool,
    pub download: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Usage {
    #[serde(alias = "InstanceCount")]
    pub instance_count: i64,
    #[serde(alias = "CustomerCount")]
    pub customer_count: i64,
    #[serde(alias = "Traffic")]
    pub traffic: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiDescriptor {
    #[serde(rename = "type")]
    pub kind: String,
    pub content_type: String,
}
