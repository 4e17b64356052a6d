use serde::{Deserialize, Serialize};

use crate::elements::Element;

/// Field mapping between a canonical object and a vendor's native object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Transformation {
    pub level: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub object_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub vendor_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub start_date: String,
    pub fields: Vec<TransformationField>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub configuration: Vec<TransformationConfiguration>,
    #[serde(skip_serializing_if = "crate::is_false")]
    pub is_legacy: bool,
    pub script: TransformationScript,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransformationField {
    #[serde(rename = "type")]
    pub kind: String,
    pub path: String,
    pub vendor_path: String,
    pub level: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TransformationConfiguration {
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: DirectionProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DirectionProperties {
    pub from_vendor: bool,
    pub to_vendor: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransformationScript {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub body: String,
    pub mime_type: String,
    pub filter_empty_response: bool,
}

/// Association of an account and element with a transformation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AccountElement {
    pub id: i64,
    pub name: String,
    pub level: String,
    pub account: AssociatedAccount,
    pub element: Element,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssociatedAccount {
    pub status: String,
    pub environment: String,
    pub active: bool,
    pub id: i64,
    pub default_account: bool,
}
