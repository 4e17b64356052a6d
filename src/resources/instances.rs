use reqwest::Method;
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::InstanceEnableEndpoint;
use crate::{ClientError, Ctx, Exchange};

const INSTANCES: &str = "/instances";

pub fn get_all_instances(ctx: &Ctx) -> Result<Exchange, ClientError> {
    ctx.get(INSTANCES)
}

pub fn get_instance_info(ctx: &Ctx, instance_id: &str) -> Result<Exchange, ClientError> {
    ctx.get(&format!("{INSTANCES}/{instance_id}"))
}

pub fn delete_element_instance(ctx: &Ctx, instance_id: &str) -> Result<Exchange, ClientError> {
    ctx.delete(&format!("{INSTANCES}/{instance_id}"))
}

pub fn get_instance_oai(ctx: &Ctx, instance_id: &str) -> Result<Exchange, ClientError> {
    ctx.get(&format!("{INSTANCES}/{instance_id}/docs"))
}

pub fn get_instance_object_definitions(
    ctx: &Ctx,
    instance_id: &str,
) -> Result<Exchange, ClientError> {
    ctx.get(&format!("{INSTANCES}/{instance_id}/objects/definitions"))
}

/// Request and response model definitions of one operation.
pub fn get_instance_operation_definition(
    ctx: &Ctx,
    instance_id: &str,
    operation: &str,
) -> Result<Exchange, ClientError> {
    ctx.get(&format!(
        "{INSTANCES}/{instance_id}/docs/{operation}/definitions"
    ))
}

pub fn get_instance_transformations_by_id(
    ctx: &Ctx,
    instance_id: &str,
) -> Result<Exchange, ClientError> {
    ctx.get(&format!("{INSTANCES}/{instance_id}/transformations"))
}

/// Transformations visible to an instance, read with the instance token.
pub fn get_instance_transformations(ctx: &Ctx, instance_id: &str) -> Result<Exchange, ClientError> {
    let document = instance_document(ctx, instance_id)?;
    let auth = ctx.auth.with_element(instance_token(&document, instance_id)?);

    let url = ctx.url(&format!("{INSTANCES}/transformations"))?;
    crate::execute(ctx, Method::GET, url, &auth, None)
}

/// Enable (`PUT`) or disable (`DELETE`) an instance. The request carries the
/// instance token and goes to the endpoint selected by
/// [`Ctx::instance_enable_endpoint`].
pub fn enable_element_instance(
    ctx: &Ctx,
    instance_id: &str,
    enable: bool,
) -> Result<Exchange, ClientError> {
    let document = instance_document(ctx, instance_id)?;
    let auth = ctx.auth.with_element(instance_token(&document, instance_id)?);

    let path = match ctx.instance_enable_endpoint {
        InstanceEnableEndpoint::Instance => format!("{INSTANCES}/{instance_id}"),
        InstanceEnableEndpoint::Shared => format!("{INSTANCES}/enabled"),
    };
    let method = if enable { Method::PUT } else { Method::DELETE };
    debug!(instance_id, %method, %path, "toggling element instance");

    crate::execute(ctx, method, ctx.url(&path)?, &auth, None)
}

/// Flip `traceLoggingEnabled` and write the instance back. Every other field
/// of the fetched document is sent unchanged.
pub fn enable_element_instance_trace_logging(
    ctx: &Ctx,
    instance_id: &str,
    enable: bool,
) -> Result<Exchange, ClientError> {
    let mut document = instance_document(ctx, instance_id)?;
    document.insert("traceLoggingEnabled".to_string(), Value::Bool(enable));

    ctx.send_json(Method::PUT, &format!("{INSTANCES}/{instance_id}"), &document)
}

fn instance_document(ctx: &Ctx, instance_id: &str) -> Result<Map<String, Value>, ClientError> {
    get_instance_info(ctx, instance_id)?.json()
}

fn instance_token<'a>(
    document: &'a Map<String, Value>,
    instance_id: &str,
) -> Result<&'a str, ClientError> {
    document
        .get("token")
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ClientError::NotFound(format!("instance {instance_id} has no token")))
}
