//! Parse tests for add, batch-add, remove and remove-many.

use super::parse;
use crate::cli::CliCommand;
use clap::Parser;

#[test]
fn cli_parse_add() {
    match parse(&["redirmap", "add", "Old.Example.com", "https://new.example.com"]).command {
        CliCommand::Add { host, target } => {
            assert_eq!(host, "Old.Example.com");
            assert_eq!(target, "https://new.example.com");
        }
        _ => panic!("expected Add"),
    }
}

#[test]
fn cli_parse_add_requires_target() {
    assert!(super::Cli::try_parse_from(["redirmap", "add", "a.com"]).is_err());
}

#[test]
fn cli_parse_batch_add_stdin() {
    match parse(&["redirmap", "batch-add"]).command {
        CliCommand::BatchAdd { file } => assert!(file.is_none()),
        _ => panic!("expected BatchAdd"),
    }
}

#[test]
fn cli_parse_batch_add_file() {
    match parse(&["redirmap", "batch-add", "--file", "/tmp/rules.txt"]).command {
        CliCommand::BatchAdd { file } => {
            assert_eq!(file.as_deref(), Some(std::path::Path::new("/tmp/rules.txt")))
        }
        _ => panic!("expected BatchAdd with --file"),
    }
}

#[test]
fn cli_parse_remove() {
    match parse(&["redirmap", "remove", "old.example.com"]).command {
        CliCommand::Remove { host } => assert_eq!(host, "old.example.com"),
        _ => panic!("expected Remove"),
    }
}

#[test]
fn cli_parse_remove_many() {
    match parse(&["redirmap", "remove-many", "a.com", "b.com"]).command {
        CliCommand::RemoveMany { hosts } => assert_eq!(hosts, ["a.com", "b.com"]),
        _ => panic!("expected RemoveMany"),
    }
}

#[test]
fn cli_parse_remove_many_requires_hosts() {
    assert!(super::Cli::try_parse_from(["redirmap", "remove-many"]).is_err());
}
