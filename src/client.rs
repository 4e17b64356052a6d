use std::fmt;

use reqwest::blocking::Client;
use reqwest::header::HeaderValue;
use url::Url;

use crate::config::{ClientSettings, InstanceEnableEndpoint};
use crate::error::ClientError;

/// Value of the platform's custom `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub struct Auth(String);

impl Auth {
    pub fn organization_user(org: &str, user: &str) -> Self {
        Self(format!("Organization {org}, User {user}"))
    }

    /// Use a fully formed header value as-is (`CE_AUTH`).
    pub fn from_header(header: impl Into<String>) -> Self {
        Self(header.into())
    }

    /// Extend with an element instance token for instance-scoped calls.
    #[must_use]
    pub fn with_element(&self, token: &str) -> Self {
        Self(format!("{}, Element {token}", self.0))
    }

    pub fn header(&self) -> &str {
        &self.0
    }

    pub fn header_value(&self) -> Result<HeaderValue, ClientError> {
        HeaderValue::from_str(&self.0)
            .map_err(|e| ClientError::invalid_request(format!("authorization header: {e}")))
    }
}

// Credentials never end up in logs through `{:?}`.
impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Auth(..)")
    }
}

/// Per-process call context: the HTTP client plus the base URL and
/// credentials every binding needs.
#[derive(Clone, Debug)]
pub struct Ctx {
    pub client: Client,
    pub base: Url,
    pub auth: Auth,
    pub instance_enable_endpoint: InstanceEnableEndpoint,
}

impl Ctx {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        let client = Client::builder()
            .user_agent(Self::user_agent())
            .connect_timeout(settings.connect_timeout)
            .build()
            .map_err(|e| ClientError::invalid_request(format!("http client: {e}")))?;
        Ok(Self {
            client,
            base: settings.base,
            auth: settings.auth,
            instance_enable_endpoint: settings.instance_enable_endpoint,
        })
    }

    /// Shorthand for tests and scripts: parse `base` and use the default
    /// settings otherwise.
    pub fn from_parts(base: &str, auth: Auth) -> Result<Self, ClientError> {
        let base = Url::parse(base.trim_end_matches('/'))
            .map_err(|e| ClientError::invalid_request(format!("base url `{base}`: {e}")))?;
        Self::new(ClientSettings::new(base, auth))
    }

    #[must_use]
    pub fn with_instance_enable_endpoint(mut self, endpoint: InstanceEnableEndpoint) -> Self {
        self.instance_enable_endpoint = endpoint;
        self
    }

    pub fn user_agent() -> &'static str {
        concat!("ce/", env!("CARGO_PKG_VERSION"))
    }

    /// `base + path`. The base keeps its own path prefix (for example
    /// `/elements/api-v2`), so this is concatenation rather than URL joining.
    pub fn url(&self, path: &str) -> Result<Url, ClientError> {
        let raw = format!("{}{path}", self.base.as_str().trim_end_matches('/'));
        Url::parse(&raw).map_err(|e| ClientError::invalid_request(format!("url `{raw}`: {e}")))
    }

    /// Like [`Ctx::url`] with query parameters appended.
    pub fn url_with_query(&self, path: &str, query: &[(&str, String)]) -> Result<Url, ClientError> {
        let mut url = self.url(path)?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_token_is_appended_as_third_segment() {
        let auth = Auth::organization_user("o", "u").with_element("tok=");
        assert_eq!(auth.header(), "Organization o, User u, Element tok=");
    }

    #[test]
    fn debug_hides_credentials() {
        let auth = Auth::from_header("Organization secret, User secret");
        assert_eq!(format!("{auth:?}"), "Auth(..)");
    }

    #[test]
    fn url_keeps_base_path_prefix() {
        let ctx = Ctx::from_parts(
            "https://api.example.com/elements/api-v2/",
            Auth::from_header("x"),
        )
        .expect("ctx");
        let url = ctx.url("/elements/42/metadata").expect("url");
        assert_eq!(
            url.as_str(),
            "https://api.example.com/elements/api-v2/elements/42/metadata"
        );
    }

    #[test]
    fn query_pairs_are_encoded() {
        let ctx = Ctx::from_parts("https://api.example.com", Auth::from_header("x")).expect("ctx");
        let url = ctx
            .url_with_query("/elements/sfdc/lbdocs", &[("version", "v 2".to_string())])
            .expect("url");
        assert_eq!(
            url.as_str(),
            "https://api.example.com/elements/sfdc/lbdocs?version=v+2"
        );
    }

    #[test]
    fn malformed_base_is_a_recoverable_error() {
        let err = Ctx::from_parts("not a url", Auth::from_header("x")).expect_err("invalid");
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }
}
