use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A scheduled job on the platform.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub disallow_concurrent: bool,
    pub data: JobData,
    pub name: String,
    pub description: String,
    pub trigger: JobTrigger,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobData {
    pub id: i64,
    pub element_key: String,
    pub topic: String,
    pub notifications: Value,
}

/// Trigger state reported for an existing job.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobTrigger {
    #[serde(alias = "ID")]
    pub id: String,
    pub calendar_name: String,
    pub may_fire_again: bool,
    pub next_fire_time: i64,
    #[serde(alias = "Description")]
    pub description: String,
    pub start_time: i64,
    pub end_time: i64,
    pub priority: i64,
    pub state: String,
}

/// Body for `POST /jobs`: a cron trigger bound to an HTTP call.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct JobRequest {
    pub trigger: JobRequestTrigger,
    pub name: String,
    pub description: String,
    pub method: String,
    pub uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct JobRequestTrigger {
    pub cron: String,
}

impl JobRequest {
    pub fn cron(
        cron: impl Into<String>,
        name: impl Into<String>,
        method: impl Into<String>,
        uri: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            trigger: JobRequestTrigger { cron: cron.into() },
            description: name.clone(),
            name,
            method: method.into(),
            uri: uri.into(),
        }
    }
}
