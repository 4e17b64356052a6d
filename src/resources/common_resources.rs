use std::fs;
use std::path::Path;

use reqwest::Method;

use crate::{ClientError, Ctx, Exchange};

pub fn resources_list(ctx: &Ctx) -> Result<Exchange, ClientError> {
    ctx.get("/common-resources")
}

/// Definition of a common resource. `details` returns the common-resource
/// view including mapped instances; otherwise the bare object definition.
pub fn get_resource_definition(
    ctx: &Ctx,
    name: &str,
    details: bool,
) -> Result<Exchange, ClientError> {
    if details {
        ctx.get(&format!("/common-resources/{name}"))
    } else {
        ctx.get(&definitions_path(name))
    }
}

/// Create `name` from an already encoded definition.
pub fn create_resource(ctx: &Ctx, name: &str, definition: &[u8]) -> Result<Exchange, ClientError> {
    ctx.send(Method::POST, &definitions_path(name), Some(definition))
}

pub fn import_resource(ctx: &Ctx, name: &str, path: &Path) -> Result<Exchange, ClientError> {
    let definition = fs::read(path).map_err(|source| ClientError::io(path, source))?;
    create_resource(ctx, name, &definition)
}

/// Copy the definition of `source` to a new resource `target`. The returned
/// curl field holds both commands, one per line.
pub fn copy_resource(ctx: &Ctx, source: &str, target: &str) -> Result<Exchange, ClientError> {
    let original = get_resource_definition(ctx, source, false)?.error_for_status()?;
    let created = create_resource(ctx, target, &original.body)?;
    Ok(Exchange {
        curl: format!("{}\n{}", original.curl, created.curl),
        ..created
    })
}

pub fn delete_resource(ctx: &Ctx, name: &str) -> Result<Exchange, ClientError> {
    ctx.delete(&definitions_path(name))
}

fn definitions_path(name: &str) -> String {
    format!("/organizations/objects/{name}/definitions")
}
