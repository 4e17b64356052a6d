use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::elements::Element;

/// A configured, authenticated occurrence of an [`Element`].
///
/// `configuration` varies per element, so it stays an open map rather than a
/// struct with a field per known key.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementInstance {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub created_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub token: String,
    pub element: Element,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_id: Option<i64>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provision_interactions: Option<Value>,
    pub valid: bool,
    pub disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cache_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_time_to_live: Option<i64>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub configuration: Map<String, Value>,
    pub events_enabled: bool,
    pub trace_logging_enabled: bool,
    pub caching_enabled: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub external_authentication: String,
    pub user: InstanceUser,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub transformation_data: Vec<TransformationData>,
}

impl ElementInstance {
    /// Tags rendered the way the platform console shows them: `[a b]`.
    pub fn tag_list(&self) -> String {
        format!("[{}]", self.tags.join(" "))
    }
}

/// The user that owns an element instance.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InstanceUser {
    pub id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email_address: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransformationData {
    pub object_name: String,
    pub vendor_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_dotted_configuration_keys() {
        let raw = r#"{"id":9,"name":"prod","token":"abc=","element":{"key":"box"},
            "configuration":{"event.notification.enabled":"true","base_url":"https://x"},
            "tags":["a","b"]}"#;
        let instance: ElementInstance = serde_json::from_str(raw).expect("decode");
        assert_eq!(instance.token, "abc=");
        assert_eq!(instance.element.key, "box");
        assert_eq!(
            instance.configuration.get("event.notification.enabled"),
            Some(&Value::String("true".into()))
        );
        assert_eq!(instance.tag_list(), "[a b]");
    }
}
