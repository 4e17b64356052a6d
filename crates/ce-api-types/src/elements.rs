use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{is_false, is_zero};

/// A connector definition as returned by `GET /elements`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Element {
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub key: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image: String,
    #[serde(skip_serializing_if = "is_false")]
    pub active: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub deleted: bool,
    #[serde(rename = "typeOauth", skip_serializing_if = "is_false")]
    pub oauth: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub trial_account: bool,
    #[serde(
        rename = "configuration_description",
        skip_serializing_if = "String::is_empty"
    )]
    pub configuration_description: String,
    #[serde(rename = "signup_url", skip_serializing_if = "String::is_empty")]
    pub signup_url: String,
    #[serde(rename = "default_transformations", skip_serializing_if = "Vec::is_empty")]
    pub default_transformations: Vec<InstanceTransformation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub configuration: Vec<ElementConfiguration>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ElementResource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objects: Option<Value>,
    #[serde(skip_serializing_if = "is_false")]
    pub transformations_enabled: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub bulk_download_enabled: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub bulk_upload_enabled: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub cloneable: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub extendable: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub beta: bool,
    pub authentication: ElementAuthentication,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hooks: Option<Value>,
    #[serde(skip_serializing_if = "is_false")]
    pub extended: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hub: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub protocol_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
    #[serde(skip_serializing_if = "is_false")]
    pub private: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hook_name: String,
}

/// One configuration parameter an element asks for when provisioning.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementConfiguration {
    pub id: i64,
    pub name: String,
    pub key: String,
    pub description: String,
    pub default_value: String,
    pub reseller_config: bool,
    pub company_config: bool,
    pub active: bool,
    pub internal: bool,
    pub group_control: bool,
    pub display_order: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub hide_from_console: bool,
    pub required: bool,
}

/// An API resource (endpoint) exposed by an element.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementResource {
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub created_date: String,
    #[serde(rename = "updateDate", skip_serializing_if = "String::is_empty")]
    pub updated_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub path: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub vendor_path: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub method: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub vendor_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hooks: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pagination_type: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub owner_account_id: i64,
}

/// Default field transformation shipped with an element.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct InstanceTransformation {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "vendor_name", skip_serializing_if = "String::is_empty")]
    pub vendor_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ElementAuthentication {
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub kind: String,
}
