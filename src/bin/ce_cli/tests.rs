#![deny(clippy::all, clippy::pedantic)]

use ce::resources::metrics::MetricsKind;
use ce::{Auth, ClientError, Ctx};
use clap::Parser;
use httpmock::MockServer;

use crate::args::{Cli, Commands, ElementsArgs, MetadataArgs};
use crate::client::CliError;
use crate::handlers::{catalog, elements, formulas, instances, platform};

const ELEMENTS: &str = r#"[
    {"id":2,"key":"sfdc","name":"salesforce","hub":"crm"},
    {"id":1,"key":"dropbox","name":"Dropbox","hub":"documents"},
    {"id":3,"key":"mycrm","name":"Acme CRM","hub":"crm","private":true}
]"#;

fn ctx(server: &MockServer) -> Ctx {
    Ctx::from_parts(&server.base_url(), Auth::organization_user("org", "user")).expect("ctx")
}

fn output(run: impl FnOnce(&mut Vec<u8>) -> Result<(), CliError>) -> String {
    let mut out = Vec::new();
    run(&mut out).expect("command");
    String::from_utf8(out).expect("utf8")
}

#[test]
fn parses_subcommands_and_flags() {
    let cli = Cli::try_parse_from([
        "ce-cli", "elements", "--order-by", "hub", "--filter", "custom", "--csv",
    ])
    .expect("parse");
    let Some(Commands::Elements(args)) = cli.command else {
        panic!("expected elements");
    };
    assert_eq!(args.order_by, "hub");
    assert_eq!(args.filter, "custom");
    assert!(args.csv);

    let cli = Cli::try_parse_from(["ce-cli", "metrics", "formula-executions"]).expect("parse");
    assert!(matches!(
        cli.command,
        Some(Commands::Metrics {
            kind: MetricsKind::FormulaExecutions
        })
    ));

    let cli = Cli::try_parse_from(["ce-cli"]).expect("parse");
    assert!(cli.command.is_none());
}

#[test]
fn default_view_lists_names_in_name_order() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET")
            .path("/elements")
            .header("authorization", "Organization org, User user");
        then.status(200).body(ELEMENTS);
    });

    let text = output(|out| elements::names(&ctx(&server), out));
    mock.assert();
    assert_eq!(text, "Acme CRM\nDropbox\nsalesforce\n");
}

#[test]
fn elements_csv_honours_filter() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/elements");
        then.status(200).body(ELEMENTS);
    });

    let args = ElementsArgs {
        filter: "custom".into(),
        csv: true,
        ..ElementsArgs::default()
    };
    let text = output(|out| elements::handle(&ctx(&server), &args, out));
    assert_eq!(text, "3,mycrm,Acme CRM,crm,,0,true,false,false\n");
}

#[test]
fn non_success_listing_is_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/elements");
        then.status(401).body(r#"{"message":"unauthorized"}"#);
    });

    let err = elements::names(&ctx(&server), &mut Vec::new()).expect_err("unauthorized");
    assert!(matches!(err, CliError::Client(ClientError::Status { .. })));
    assert!(err.curl().is_some_and(|c| c.ends_with("/elements'")));
    assert!(err.to_string().contains("unauthorized"));
}

#[test]
fn instance_by_id_renders_single_row() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET").path("/instances/42");
        then.status(200)
            .body(r#"{"id":42,"name":"prod","element":{"key":"sfdc"},"token":"tok"}"#);
    });

    let text = output(|out| instances::handle(&ctx(&server), Some("42"), out));
    mock.assert();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[2].starts_with("42 | sfdc | prod"));
    assert!(lines[2].ends_with("tok"));
}

#[test]
fn formulas_listing_counts_instances_per_formula() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/formulas");
        then.status(200).body(
            r#"[{"id":1,"name":"sync","triggers":[{"id":5,"type":"event"}]},
                {"id":2,"name":"poll","triggers":[{"id":6,"type":"scheduled"}]}]"#,
        );
    });
    let counted = server.mock(|when, then| {
        when.method("GET").path("/formulas/1/instances");
        then.status(200).body(r#"[{"id":10},{"id":11}]"#);
    });
    server.mock(|when, then| {
        when.method("GET").path("/formulas/2/instances");
        then.status(500).body("boom");
    });

    let text = output(|out| formulas::handle(&ctx(&server), None, out));
    counted.assert();
    let rows: Vec<Vec<&str>> = text
        .lines()
        .skip(2)
        .map(|l| l.split('|').map(str::trim).collect())
        .collect();
    assert_eq!(rows[0][4], "2");
    assert_eq!(rows[1][4], "N/A");
}

#[test]
fn metadata_csv_orders_by_name() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/elements/metadata");
        then.status(200).body(
            r#"[{"id":1,"key":"zoho","name":"Zoho"},{"id":2,"key":"box","name":"box"}]"#,
        );
    });

    let args = MetadataArgs {
        order_by: "name".into(),
        csv: true,
    };
    let text = output(|out| catalog::metadata(&ctx(&server), &args, out));
    let keys: Vec<&str> = text
        .lines()
        .map(|l| l.split(',').nth(1).unwrap_or_default())
        .collect();
    assert_eq!(keys, vec!["box", "zoho"]);
}

#[test]
fn jobs_are_pretty_printed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/jobs");
        then.status(200).body(r#"[{"id":"j1","name":"nightly"}]"#);
    });

    let text = output(|out| platform::jobs(&ctx(&server), out));
    let parsed: serde_json::Value = serde_json::from_str(&text).expect("json");
    assert_eq!(parsed[0]["name"], "nightly");
    assert!(text.contains("\n  {"));
}

#[test]
fn non_json_body_is_printed_verbatim() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/organizations/branding");
        then.status(200).body("plain text");
    });

    let text = output(|out| platform::branding(&ctx(&server), out));
    assert_eq!(text, "plain text\n");
}

#[test]
fn metrics_failure_is_promoted_by_the_command() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/metrics/api");
        then.status(500).body(r#"{"message":"boom"}"#);
    });

    let err = platform::metrics(&ctx(&server), MetricsKind::Api, &mut Vec::new())
        .expect_err("500");
    assert!(matches!(
        err,
        CliError::Client(ClientError::Status { status, .. }) if status.as_u16() == 500
    ));
}
