use ce_api_types::BrandingConfig;
use reqwest::Method;
use serde_json::json;

use crate::{ClientError, Ctx, Exchange};

const BRANDING: &str = "/organizations/branding";

pub fn get_branding(ctx: &Ctx) -> Result<Exchange, ClientError> {
    ctx.get(BRANDING)
}

pub fn set_branding(ctx: &Ctx, branding: &BrandingConfig) -> Result<Exchange, ClientError> {
    ctx.send_json(Method::PUT, BRANDING, branding)
}

/// Drop organization branding and fall back to the platform look.
pub fn reset_branding(ctx: &Ctx) -> Result<Exchange, ClientError> {
    ctx.delete(BRANDING)
}

/// `logo` is a URL or data URI, as stored in [`BrandingConfig::logo`].
pub fn set_branding_logo(ctx: &Ctx, logo: &str) -> Result<Exchange, ClientError> {
    ctx.send_json(
        Method::PATCH,
        &format!("{BRANDING}/logo"),
        &json!({ "logo": logo }),
    )
}

pub fn set_branding_favicon(ctx: &Ctx, favicon: &str) -> Result<Exchange, ClientError> {
    ctx.send_json(
        Method::PATCH,
        &format!("{BRANDING}/favicon"),
        &json!({ "favicon": favicon }),
    )
}
