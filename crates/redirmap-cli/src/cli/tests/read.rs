//! Parse tests for list, export, resolve, check and the global --rules flag.

use super::parse;
use crate::cli::CliCommand;
use std::path::Path;

#[test]
fn cli_parse_list() {
    let cli = parse(&["redirmap", "list"]);
    assert!(matches!(cli.command, CliCommand::List));
    assert!(cli.rules.is_none());
}

#[test]
fn cli_parse_export_stdout() {
    match parse(&["redirmap", "export"]).command {
        CliCommand::Export { output } => assert!(output.is_none()),
        _ => panic!("expected Export"),
    }
}

#[test]
fn cli_parse_export_output() {
    match parse(&["redirmap", "export", "-o", "/tmp/out"]).command {
        CliCommand::Export { output } => assert_eq!(output.as_deref(), Some(Path::new("/tmp/out"))),
        _ => panic!("expected Export with -o"),
    }
}

#[test]
fn cli_parse_resolve() {
    match parse(&["redirmap", "resolve", "Example.COM"]).command {
        CliCommand::Resolve { host } => assert_eq!(host, "Example.COM"),
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_check() {
    assert!(matches!(parse(&["redirmap", "check"]).command, CliCommand::Check));
}

#[test]
fn cli_parse_global_rules_after_subcommand() {
    let cli = parse(&["redirmap", "list", "--rules", "/srv/domains.json"]);
    assert_eq!(cli.rules.as_deref(), Some(Path::new("/srv/domains.json")));
}

#[test]
fn cli_parse_global_rules_before_subcommand() {
    let cli = parse(&["redirmap", "--rules", "/srv/domains.json", "check"]);
    assert_eq!(cli.rules.as_deref(), Some(Path::new("/srv/domains.json")));
    assert!(matches!(cli.command, CliCommand::Check));
}
