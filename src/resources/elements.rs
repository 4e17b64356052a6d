use ce_api_types::Element;
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use crate::{ClientError, Ctx, Exchange};

const ELEMENTS: &str = "/elements";
const DENY_LIST: &str = "/customers/elements/blacklist";

pub fn get_all_elements(ctx: &Ctx) -> Result<Exchange, ClientError> {
    ctx.get(ELEMENTS)
}

pub fn get_element_keys(ctx: &Ctx) -> Result<Exchange, ClientError> {
    ctx.get("/elements/keys")
}

/// Full element definition, suitable for re-import.
pub fn get_export_element(ctx: &Ctx, element_id: &str) -> Result<Exchange, ClientError> {
    ctx.get(&format!("{ELEMENTS}/{element_id}"))
}

pub fn import_element(ctx: &Ctx, element: &Element) -> Result<Exchange, ClientError> {
    ctx.send_json(Method::POST, ELEMENTS, element)
}

pub fn delete_element(ctx: &Ctx, element_id: i64) -> Result<Exchange, ClientError> {
    ctx.delete(&format!("{ELEMENTS}/{element_id}"))
}

pub fn get_element_metadata(ctx: &Ctx, element_id: &str) -> Result<Exchange, ClientError> {
    ctx.get(&format!("{ELEMENTS}/{element_id}/metadata"))
}

/// OpenAPI document for an element.
pub fn get_element_oai(ctx: &Ctx, element_id: &str) -> Result<Exchange, ClientError> {
    ctx.get(&format!("{ELEMENTS}/{element_id}/docs"))
}

/// LoopBack model document. `force` regenerates it; `version` selects a
/// stored revision and is ignored when forcing.
pub fn get_element_lbdocs(
    ctx: &Ctx,
    element_id: &str,
    force: bool,
    version: Option<&str>,
) -> Result<Exchange, ClientError> {
    let mut query = Vec::new();
    if force {
        query.push(("force", "true".to_string()));
    }
    if let Some(version) = version.filter(|v| !v.is_empty()) {
        query.push(("version", version.to_string()));
    }
    let url = ctx.url_with_query(&format!("{ELEMENTS}/{element_id}/lbdocs"), &query)?;
    crate::execute(ctx, Method::GET, url, &ctx.auth, None)
}

pub fn get_element_instances(ctx: &Ctx, element_id: &str) -> Result<Exchange, ClientError> {
    ctx.get(&format!("{ELEMENTS}/{element_id}/instances"))
}

pub fn get_element_model_validation(ctx: &Ctx, element_id: &str) -> Result<Exchange, ClientError> {
    ctx.get(&format!("{ELEMENTS}/{element_id}/validate"))
}

pub fn get_element_oauth_url(ctx: &Ctx, element_id: &str) -> Result<Exchange, ClientError> {
    ctx.get(&format!("{ELEMENTS}/{element_id}/oauth/url"))
}

/// Hide elements from the organization's catalog.
pub fn add_to_elements_deny_list(ctx: &Ctx, keys: &[String]) -> Result<Exchange, ClientError> {
    ctx.send_json(Method::PUT, DENY_LIST, keys)
}

pub fn reset_elements_deny_list(ctx: &Ctx) -> Result<Exchange, ClientError> {
    ctx.delete(DENY_LIST)
}

/// Resolve an element key to its numeric id. Numeric input is returned as
/// is without touching the network.
pub fn element_key_to_id(ctx: &Ctx, key: &str) -> Result<i64, ClientError> {
    if let Ok(id) = key.trim().parse::<i64>() {
        return Ok(id);
    }

    let elements: Vec<Element> = get_all_elements(ctx)?.json()?;
    let found = elements
        .iter()
        .find(|element| element.key == key)
        .map(|element| element.id)
        .filter(|id| *id != 0);

    match found {
        Some(id) => {
            debug!(key, id, "resolved element key");
            Ok(id)
        }
        None => Err(ClientError::NotFound(format!(
            "unable to find element id for element key {key}"
        ))),
    }
}

/// Keep only private (custom) elements of a `GET /elements` body.
pub fn filter_custom_elements(body: &[u8]) -> Result<Vec<u8>, ClientError> {
    filter_elements(body, |element| {
        element.get("private").and_then(Value::as_bool) == Some(true)
    })
}

/// Keep only the element whose key is exactly `key`.
pub fn filter_element_from_list(key: &str, body: &[u8]) -> Result<Vec<u8>, ClientError> {
    filter_elements(body, |element| {
        element.get("key").and_then(Value::as_str) == Some(key)
    })
}

// Elements stay as open JSON so filtering never drops unmodelled fields.
fn filter_elements(body: &[u8], keep: impl Fn(&Value) -> bool) -> Result<Vec<u8>, ClientError> {
    let elements: Vec<Value> =
        serde_json::from_slice(body).map_err(|source| ClientError::Decode {
            body: body.to_vec(),
            source,
        })?;
    let kept: Vec<Value> = elements.into_iter().filter(|e| keep(e)).collect();
    serde_json::to_vec(&kept).map_err(ClientError::Encode)
}
