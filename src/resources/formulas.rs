use std::fs;
use std::path::{Path, PathBuf};

use ce_api_types::{ExecutionStatusRequest, Formula, FormulaInstance, FormulaInstanceConfig};
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{ClientError, Ctx, Exchange};

const FORMULAS: &str = "/formulas";
const FORMULA_INSTANCES: &str = "/formulas/instances";
const EXECUTIONS: &str = "/formulas/instances/executions";

pub fn formulas_list(ctx: &Ctx) -> Result<Exchange, ClientError> {
    ctx.get(FORMULAS)
}

pub fn formula_details(ctx: &Ctx, formula_id: &str) -> Result<Exchange, ClientError> {
    ctx.get(&format!("{FORMULAS}/{formula_id}"))
}

pub fn import_formula(ctx: &Ctx, formula: &Formula) -> Result<Exchange, ClientError> {
    ctx.send_json(Method::POST, FORMULAS, formula)
}

pub fn formula_update(
    ctx: &Ctx,
    formula_id: &str,
    formula: &Formula,
) -> Result<Exchange, ClientError> {
    ctx.send_json(Method::PATCH, &format!("{FORMULAS}/{formula_id}"), formula)
}

pub fn delete_formula(ctx: &Ctx, formula_id: &str) -> Result<Exchange, ClientError> {
    ctx.delete(&format!("{FORMULAS}/{formula_id}"))
}

pub fn get_formula_instances(ctx: &Ctx, formula_id: &str) -> Result<Exchange, ClientError> {
    ctx.get(&format!("{FORMULAS}/{formula_id}/instances"))
}

/// Decoded form of [`get_formula_instances`].
pub fn get_instances_of_formula(
    ctx: &Ctx,
    formula_id: i64,
) -> Result<Vec<FormulaInstance>, ClientError> {
    get_formula_instances(ctx, &formula_id.to_string())?.json()
}

pub fn get_all_formula_instances(ctx: &Ctx) -> Result<Exchange, ClientError> {
    ctx.get(FORMULA_INSTANCES)
}

pub fn get_formula_instance(ctx: &Ctx, instance_id: &str) -> Result<Exchange, ClientError> {
    ctx.get(&format!("{FORMULA_INSTANCES}/{instance_id}"))
}

pub fn create_formula_instance(
    ctx: &Ctx,
    formula_id: &str,
    config: &FormulaInstanceConfig,
) -> Result<Exchange, ClientError> {
    ctx.send_json(
        Method::POST,
        &format!("{FORMULAS}/{formula_id}/instances"),
        config,
    )
}

/// Deleting an instance needs its parent formula id, so the instance is read
/// first.
pub fn delete_formula_instance(ctx: &Ctx, instance_id: &str) -> Result<Exchange, ClientError> {
    let instance: Value = get_formula_instance(ctx, instance_id)?.json()?;
    let formula_id = instance
        .pointer("/formula/id")
        .and_then(Value::as_i64)
        .ok_or_else(|| {
            ClientError::NotFound(format!("formula instance {instance_id} has no parent formula"))
        })?;
    debug!(instance_id, formula_id, "deleting formula instance");

    ctx.delete(&format!("{FORMULAS}/{formula_id}/instances/{instance_id}"))
}

/// Start a manual execution. `trigger` is posted verbatim.
pub fn trigger_formula_instance(
    ctx: &Ctx,
    instance_id: &str,
    trigger: &[u8],
) -> Result<Exchange, ClientError> {
    ctx.send(
        Method::POST,
        &format!("{FORMULA_INSTANCES}/{instance_id}/executions"),
        Some(trigger),
    )
}

pub fn get_formula_instance_executions(
    ctx: &Ctx,
    instance_id: &str,
) -> Result<Exchange, ClientError> {
    ctx.get(&format!("{FORMULA_INSTANCES}/{instance_id}/executions"))
}

pub fn get_formula_instance_execution(
    ctx: &Ctx,
    execution_id: &str,
) -> Result<Exchange, ClientError> {
    ctx.get(&format!("{EXECUTIONS}/{execution_id}"))
}

pub fn cancel_formula_execution(ctx: &Ctx, execution_id: &str) -> Result<Exchange, ClientError> {
    ctx.send_json(
        Method::PATCH,
        &format!("{EXECUTIONS}/{execution_id}"),
        &ExecutionStatusRequest::cancelled(),
    )
}

pub fn retry_formula_execution(ctx: &Ctx, execution_id: &str) -> Result<Exchange, ClientError> {
    ctx.send(
        Method::POST,
        &format!("{EXECUTIONS}/{execution_id}/retries"),
        None,
    )
}

/// Decode a formula listing and attach each formula's instances.
///
/// Formulas without triggers are malformed; they are logged and left out.
/// When the instance lookup for one formula fails, that formula keeps an
/// empty instance list and the rest are still processed.
pub fn combined_formula_and_instances(
    ctx: &Ctx,
    formulas: &[u8],
) -> Result<Vec<Formula>, ClientError> {
    let formulas: Vec<Formula> =
        serde_json::from_slice(formulas).map_err(|source| ClientError::Decode {
            body: formulas.to_vec(),
            source,
        })?;

    let mut combined = Vec::with_capacity(formulas.len());
    for mut formula in formulas {
        if formula.triggers.is_empty() {
            warn!(formula_id = formula.id, "formula is malformed, no trigger present");
            continue;
        }
        match get_instances_of_formula(ctx, formula.id) {
            Ok(instances) => formula.instances = instances,
            Err(err) => {
                warn!(formula_id = formula.id, error = %err, "unable to list formula instances");
            }
        }
        combined.push(formula);
    }
    Ok(combined)
}

/// Write every formula to `dir` as `<NameWithoutSpaces>.formula.json`,
/// creating the directory when needed. Returns the written paths.
pub fn export_all_formulas_to_dir(ctx: &Ctx, dir: &Path) -> Result<Vec<PathBuf>, ClientError> {
    let formulas: Vec<Value> = formulas_list(ctx)?.json()?;

    fs::create_dir_all(dir).map_err(|source| ClientError::io(dir, source))?;

    let mut written = Vec::with_capacity(formulas.len());
    for formula in &formulas {
        let name = formula.get("name").and_then(Value::as_str).unwrap_or_default();
        let path = dir.join(export_file_name(name));
        let bytes = serde_json::to_vec(formula).map_err(ClientError::Encode)?;
        fs::write(&path, bytes).map_err(|source| ClientError::io(&path, source))?;
        info!(formula = name, path = %path.display(), "exported formula");
        written.push(path);
    }
    Ok(written)
}

fn export_file_name(name: &str) -> String {
    let compact: String = name.chars().filter(|c| *c != ' ').collect();
    format!("{compact}.formula.json")
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;
    use crate::resources::test_support::ctx;

    #[test]
    fn delete_instance_resolves_parent_formula() {
        let server = MockServer::start();
        let read = server.mock(|when, then| {
            when.method("GET").path("/formulas/instances/42");
            then.status(200).body(r#"{"id":42,"formula":{"id":7}}"#);
        });
        let delete = server.mock(|when, then| {
            when.method("DELETE").path("/formulas/7/instances/42");
            then.status(200);
        });

        let exchange = delete_formula_instance(&ctx(&server), "42").expect("delete");
        read.assert();
        delete.assert();
        assert_eq!(exchange.status_code(), 200);
    }

    #[test]
    fn delete_instance_stops_when_lookup_fails() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET").path("/formulas/instances/42");
            then.status(500).body(r#"{"message":"boom"}"#);
        });
        let delete = server.mock(|when, then| {
            when.method("DELETE");
            then.status(200);
        });

        let err = delete_formula_instance(&ctx(&server), "42").expect_err("aborts");
        assert_eq!(err.status(), 500);
        delete.assert_calls(0);
    }

    #[test]
    fn cancel_patches_cancelled_status() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("PATCH")
                .path("/formulas/instances/executions/900")
                .json_body(json!({"status": "cancelled"}));
            then.status(200).body("{}");
        });

        cancel_formula_execution(&ctx(&server), "900").expect("cancel");
        mock.assert();
    }

    #[test]
    fn trigger_posts_raw_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("POST")
                .path("/formulas/instances/5/executions")
                .header("content-type", "application/json")
                .body(r#"{"event":"go"}"#);
            then.status(200).body(r#"{"id":901}"#);
        });

        trigger_formula_instance(&ctx(&server), "5", br#"{"event":"go"}"#).expect("trigger");
        mock.assert();
    }

    #[test]
    fn combined_skips_malformed_and_survives_lookup_failures() {
        let server = MockServer::start();
        let first = server.mock(|when, then| {
            when.method("GET").path("/formulas/1/instances");
            then.status(200).body(r#"[{"id":10,"name":"a"},{"id":11,"name":"b"}]"#);
        });
        let broken = server.mock(|when, then| {
            when.method("GET").path("/formulas/3/instances");
            then.status(500).body("oops");
        });
        let malformed = server.mock(|when, then| {
            when.method("GET").path("/formulas/2/instances");
            then.status(200).body("[]");
        });

        let listing = br#"[
            {"id":1,"name":"one","triggers":[{"type":"manual"}]},
            {"id":2,"name":"two"},
            {"id":3,"name":"three","triggers":[{"type":"event"}]}
        ]"#;
        let formulas = combined_formula_and_instances(&ctx(&server), listing).expect("combined");

        assert_eq!(formulas.iter().map(|f| f.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(formulas[0].instances.len(), 2);
        assert!(formulas[1].instances.is_empty());
        first.assert();
        broken.assert();
        malformed.assert_calls(0);
    }

    #[test]
    fn export_writes_one_file_per_formula() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET").path("/formulas");
            then.status(200)
                .body(r#"[{"id":1,"name":"Sync Contacts","extra":true},{"id":2,"name":"Backup"}]"#);
        });

        let dir = TempDir::new().expect("tmp dir");
        let target = dir.path().join("formulas");
        let written = export_all_formulas_to_dir(&ctx(&server), &target).expect("export");

        assert_eq!(
            written,
            vec![
                target.join("SyncContacts.formula.json"),
                target.join("Backup.formula.json")
            ]
        );
        let saved: Value =
            serde_json::from_slice(&fs::read(&written[0]).expect("read")).expect("json");
        assert_eq!(saved, json!({"id":1,"name":"Sync Contacts","extra":true}));
    }
}
