//! The one place that talks to the network.
//!
//! Every binding ends up in [`execute`]: one blocking request, full body read,
//! and a curl rendering of what was sent. A received response is always
//! `Ok`, whatever its status; callers opt into treating non-2xx as failure
//! with [`Exchange::error_for_status`].

use reqwest::{
    Method, StatusCode,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;
use url::Url;

use crate::client::{Auth, Ctx};
use crate::error::ClientError;
use crate::telemetry::HTTP_REQUESTS_TOTAL;

const JSON: &str = "application/json";

/// A completed HTTP round trip.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub body: Vec<u8>,
    pub status: StatusCode,
    pub curl: String,
}

impl Exchange {
    pub fn status_code(&self) -> i32 {
        i32::from(self.status.as_u16())
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Promote a non-2xx response to [`ClientError::Status`].
    pub fn error_for_status(self) -> Result<Self, ClientError> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(ClientError::Status {
                status: self.status,
                body: self.body,
                curl: self.curl,
            })
        }
    }

    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_slice(&self.body).map_err(|source| ClientError::Decode {
            body: self.body.clone(),
            source,
        })
    }

    /// `error_for_status` followed by `decode`.
    pub fn json<T: DeserializeOwned>(self) -> Result<T, ClientError> {
        self.error_for_status()?.decode()
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Issue one request and read the whole response.
pub fn execute(
    ctx: &Ctx,
    method: Method,
    url: Url,
    auth: &Auth,
    body: Option<&[u8]>,
) -> Result<Exchange, ClientError> {
    let auth_value = auth.header_value()?;
    let curl = curl_command(&method, &url, auth, body);

    let mut request = ctx
        .client
        .request(method.clone(), url.clone())
        .header(ACCEPT, HeaderValue::from_static(JSON))
        .header(AUTHORIZATION, auth_value);
    if let Some(body) = body {
        request = request
            .header(CONTENT_TYPE, HeaderValue::from_static(JSON))
            .body(body.to_vec());
    }

    let outcome = request.send().and_then(|response| {
        let status = response.status();
        response.bytes().map(|bytes| (status, bytes.to_vec()))
    });

    match outcome {
        Ok((status, body)) => {
            record(&method, status_class(status));
            debug!(%method, %url, status = status.as_u16(), "platform exchange");
            Ok(Exchange { body, status, curl })
        }
        Err(source) => {
            record(&method, "transport");
            debug!(%method, %url, error = %source, "platform unreachable");
            Err(ClientError::Transport { curl, source })
        }
    }
}

impl Ctx {
    pub fn get(&self, path: &str) -> Result<Exchange, ClientError> {
        self.send(Method::GET, path, None)
    }

    pub fn delete(&self, path: &str) -> Result<Exchange, ClientError> {
        self.send(Method::DELETE, path, None)
    }

    /// Request against `base + path` with the context's credentials.
    pub fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&[u8]>,
    ) -> Result<Exchange, ClientError> {
        let url = self.url(path)?;
        execute(self, method, url, &self.auth, body)
    }

    /// JSON-encode `body` and send it.
    pub fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Exchange, ClientError> {
        let encoded = serde_json::to_vec(body).map_err(ClientError::Encode)?;
        self.send(method, path, Some(&encoded))
    }
}

fn status_class(status: StatusCode) -> &'static str {
    match status.as_u16() {
        100..=199 => "1xx",
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        _ => "5xx",
    }
}

fn record(method: &Method, class: &'static str) {
    metrics::counter!(
        HTTP_REQUESTS_TOTAL,
        "method" => method.as_str().to_string(),
        "class" => class
    )
    .increment(1);
}

/// Render the request as a copy-pasteable curl command.
pub fn curl_command(method: &Method, url: &Url, auth: &Auth, body: Option<&[u8]>) -> String {
    let mut parts = vec![
        "curl".to_string(),
        "-X".to_string(),
        shell_quote(method.as_str()),
    ];
    if let Some(body) = body {
        parts.push("-d".to_string());
        parts.push(shell_quote(&String::from_utf8_lossy(body)));
    }
    // header names in sorted order
    let mut headers = vec![
        format!("Accept: {JSON}"),
        format!("Authorization: {}", auth.header()),
    ];
    if body.is_some() {
        headers.push(format!("Content-Type: {JSON}"));
    }
    for header in headers {
        parts.push("-H".to_string());
        parts.push(shell_quote(&header));
    }
    parts.push(shell_quote(url.as_str()));
    parts.join(" ")
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;

    use super::*;
    use crate::error::NO_STATUS;

    fn ctx(server: &MockServer) -> Ctx {
        Ctx::from_parts(&server.base_url(), Auth::organization_user("o", "u")).expect("ctx")
    }

    #[test]
    fn unreachable_host_reports_no_status_and_curl() {
        let ctx = Ctx::from_parts("http://127.0.0.1:1", Auth::from_header("x")).expect("ctx");
        let err = ctx.get("/elements").expect_err("nothing listens on port 1");

        assert_eq!(err.status(), NO_STATUS);
        let curl = err.curl().expect("curl kept");
        assert!(curl.starts_with("curl -X 'GET'"));
        assert!(curl.ends_with("'http://127.0.0.1:1/elements'"));
    }

    #[test]
    fn non_success_is_not_an_error_until_promoted() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET").path("/jobs/9");
            then.status(404).body(r#"{"message":"no such job"}"#);
        });

        let exchange = ctx(&server).get("/jobs/9").expect("response received");
        mock.assert();
        assert_eq!(exchange.status_code(), 404);

        let err = exchange.error_for_status().expect_err("promoted");
        assert_eq!(err.status(), 404);
        assert_eq!(err.body(), Some(br#"{"message":"no such job"}"#.as_slice()));
    }

    #[test]
    fn content_type_only_sent_with_body() {
        let server = MockServer::start();
        let without = server.mock(|when, then| {
            when.method("GET")
                .path("/elements")
                .header("accept", "application/json")
                .header("authorization", "Organization o, User u")
                .header_missing("content-type");
            then.status(200).body("[]");
        });
        let with = server.mock(|when, then| {
            when.method("POST")
                .path("/jobs")
                .header("content-type", "application/json")
                .body(r#"{"name":"nightly"}"#);
            then.status(200).body("{}");
        });

        let ctx = ctx(&server);
        ctx.get("/elements").expect("get");
        ctx.send_json(Method::POST, "/jobs", &serde_json::json!({"name": "nightly"}))
            .expect("post");

        without.assert();
        with.assert();
    }

    #[test]
    fn curl_quotes_values_and_orders_headers() {
        let url = Url::parse("https://api.example.com/formulas").expect("url");
        let auth = Auth::from_header("Organization o, User u");
        let curl = curl_command(&Method::POST, &url, &auth, Some(br#"{"name":"it's"}"#));

        assert_eq!(
            curl,
            r#"curl -X 'POST' -d '{"name":"it'\''s"}' -H 'Accept: application/json' -H 'Authorization: Organization o, User u' -H 'Content-Type: application/json' 'https://api.example.com/formulas'"#
        );
    }

    #[test]
    fn decode_failure_keeps_raw_bytes() {
        let exchange = Exchange {
            body: b"<html>".to_vec(),
            status: StatusCode::OK,
            curl: String::new(),
        };
        let err = exchange
            .decode::<Vec<serde_json::Value>>()
            .expect_err("not json");
        assert_eq!(err.body(), Some(b"<html>".as_slice()));
        assert_eq!(err.status(), NO_STATUS);
    }
}
