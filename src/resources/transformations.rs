use ce_api_types::Transformation;
use reqwest::Method;

use crate::{ClientError, Ctx, Exchange};

pub fn get_transformations(ctx: &Ctx) -> Result<Exchange, ClientError> {
    ctx.get("/organizations/objects/definitions")
}

pub fn get_transformations_per_element(
    ctx: &Ctx,
    element_key: &str,
) -> Result<Exchange, ClientError> {
    ctx.get(&format!("/organizations/elements/{element_key}/transformations"))
}

/// Elements associated with a transformation; the body is a list of
/// [`ce_api_types::AccountElement`].
pub fn get_transformation_association(ctx: &Ctx, name: &str) -> Result<Exchange, ClientError> {
    ctx.get(&format!("/organizations/objects/{name}/transformations"))
}

/// Map `transformation.object_name` onto an element.
pub fn associate_transformation_with_element(
    ctx: &Ctx,
    element_key: &str,
    transformation: &Transformation,
) -> Result<Exchange, ClientError> {
    ctx.send_json(
        Method::POST,
        &association_path(element_key, &transformation.object_name),
        transformation,
    )
}

pub fn delete_transformation_association(
    ctx: &Ctx,
    element_key: &str,
    object_name: &str,
) -> Result<Exchange, ClientError> {
    ctx.delete(&association_path(element_key, object_name))
}

fn association_path(element_key: &str, object_name: &str) -> String {
    format!("/organizations/elements/{element_key}/transformations/{object_name}")
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;

    use super::*;
    use crate::resources::test_support::ctx;

    #[test]
    fn associate_posts_to_object_path() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("POST")
                .path("/organizations/elements/sfdc/transformations/myContact")
                .json_body_includes(r#"{"objectName":"myContact","vendorName":"Contact"}"#);
            then.status(200).body("{}");
        });

        let transformation = Transformation {
            object_name: "myContact".into(),
            vendor_name: "Contact".into(),
            ..Transformation::default()
        };
        associate_transformation_with_element(&ctx(&server), "sfdc", &transformation)
            .expect("associate");
        mock.assert();
    }

    #[test]
    fn delete_association_uses_same_path() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("DELETE")
                .path("/organizations/elements/sfdc/transformations/myContact");
            then.status(200);
        });

        delete_transformation_association(&ctx(&server), "sfdc", "myContact").expect("delete");
        mock.assert();
    }
}
