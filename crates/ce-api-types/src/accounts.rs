use serde::{Deserialize, Serialize};

/// A platform account as listed by `GET /accounts`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub external_id: String,
    pub active: bool,
    pub default_account: bool,
    pub environment: String,
    pub status: String,
}

/// Body for `POST /signup`; the platform emails a verification link.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Body for `PATCH /accounts/{id}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AccountStatusRequest {
    pub active: bool,
}
