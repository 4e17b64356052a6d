use ce_api_types::{AccountStatusRequest, SignupRequest};
use reqwest::Method;

use crate::{ClientError, Ctx, Exchange};

pub fn get_accounts(ctx: &Ctx) -> Result<Exchange, ClientError> {
    ctx.get("/accounts")
}

/// Sign up a new user; the platform creates the account alongside.
pub fn create_account(
    ctx: &Ctx,
    first_name: &str,
    last_name: &str,
    email: &str,
) -> Result<Exchange, ClientError> {
    let request = SignupRequest {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
    };
    ctx.send_json(Method::POST, "/signup", &request)
}

pub fn disable_account(ctx: &Ctx, account_id: &str) -> Result<Exchange, ClientError> {
    ctx.send_json(
        Method::PATCH,
        &format!("/accounts/{account_id}"),
        &AccountStatusRequest { active: false },
    )
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;

    use super::*;
    use crate::resources::test_support::ctx;

    #[test]
    fn signup_posts_names_and_email() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("POST")
                .path("/signup")
                .json_body(serde_json::json!({
                    "firstName": "Ada",
                    "lastName": "Lovelace",
                    "email": "ada@example.com"
                }));
            then.status(200).body("{}");
        });

        create_account(&ctx(&server), "Ada", "Lovelace", "ada@example.com").expect("signup");
        mock.assert();
    }

    #[test]
    fn disable_patches_active_flag() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("PATCH")
                .path("/accounts/77")
                .json_body(serde_json::json!({"active": false}));
            then.status(200).body(r#"{"id":77,"active":false}"#);
        });

        let exchange = disable_account(&ctx(&server), "77").expect("patch");
        mock.assert();
        assert!(exchange.is_success());
    }
}
