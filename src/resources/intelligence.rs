use crate::{ClientError, Ctx, Exchange};

/// Catalog-wide element metadata (API type, usage, capabilities); decode as
/// a list of [`ce_api_types::Metadata`].
pub fn get_intelligence(ctx: &Ctx) -> Result<Exchange, ClientError> {
    ctx.get("/elements/metadata")
}

#[cfg(test)]
mod tests {
    use ce_api_types::Metadata;
    use httpmock::MockServer;

    use super::*;
    use crate::resources::test_support::ctx;

    #[test]
    fn metadata_listing_decodes() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET").path("/elements/metadata");
            then.status(200).body(
                r#"[{"id":5,"key":"box","name":"Box","hub":"documents",
                    "usage":{"instanceCount":3,"customerCount":2,"traffic":900},
                    "api":{"type":"REST","contentType":"application/json"}}]"#,
            );
        });

        let metadata: Vec<Metadata> = get_intelligence(&ctx(&server))
            .expect("call")
            .json()
            .expect("decode");
        assert_eq!(metadata[0].usage.traffic, 900);
        assert_eq!(metadata[0].api.kind, "REST");
    }
}
