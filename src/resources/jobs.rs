use reqwest::Method;

use crate::{ClientError, Ctx, Exchange};

const JOBS: &str = "/jobs";

pub fn list_jobs(ctx: &Ctx) -> Result<Exchange, ClientError> {
    ctx.get(JOBS)
}

pub fn get_job(ctx: &Ctx, job_id: &str) -> Result<Exchange, ClientError> {
    ctx.get(&format!("{JOBS}/{job_id}"))
}

/// Schedule a job. `job` is an encoded [`ce_api_types::JobRequest`] or any
/// JSON document the platform accepts.
pub fn create_job(ctx: &Ctx, job: &[u8]) -> Result<Exchange, ClientError> {
    ctx.send(Method::POST, JOBS, Some(job))
}

pub fn delete_job(ctx: &Ctx, job_id: &str) -> Result<Exchange, ClientError> {
    ctx.delete(&format!("{JOBS}/{job_id}"))
}

#[cfg(test)]
mod tests {
    use ce_api_types::JobRequest;
    use httpmock::MockServer;
    use serde_json::json;

    use super::*;
    use crate::resources::test_support::ctx;

    #[test]
    fn create_then_delete_by_returned_id() {
        let server = MockServer::start();
        let create = server.mock(|when, then| {
            when.method("POST").path("/jobs").json_body_includes(
                r#"{"trigger":{"cron":"0 0/15 * 1/1 * ? *"},"method":"GET","uri":"/hubs/crm/ping"}"#,
            );
            then.status(200).body(r#"{"id":"job-1"}"#);
        });
        let delete = server.mock(|when, then| {
            when.method("DELETE").path("/jobs/job-1");
            then.status(200);
        });

        let ctx = ctx(&server);
        let request = JobRequest::cron("0 0/15 * 1/1 * ? *", "ping crm", "GET", "/hubs/crm/ping");
        let body = serde_json::to_vec(&request).expect("encode");
        let created: serde_json::Value = create_job(&ctx, &body)
            .expect("create")
            .json()
            .expect("json");
        assert_eq!(created, json!({"id": "job-1"}));

        let id = created["id"].as_str().expect("id");
        delete_job(&ctx, id).expect("delete");

        create.assert();
        delete.assert();
    }

    #[test]
    fn get_job_reports_missing_job_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET").path("/jobs/missing");
            then.status(404).body(r#"{"message":"Job not found"}"#);
        });

        let exchange = get_job(&ctx(&server), "missing").expect("response");
        assert_eq!(exchange.status_code(), 404);
    }
}
