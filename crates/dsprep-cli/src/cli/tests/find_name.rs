//! Tests for find and name subcommands.

use super::{parse, Cli};
use crate::cli::CliCommand;
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_find() {
    match parse(&["dsprep", "find", "/data/foo", "*.csv"]).command {
        CliCommand::Find { r#where, pattern } => {
            assert_eq!(r#where, Path::new("/data/foo"));
            assert_eq!(pattern, "*.csv");
        }
        _ => panic!("expected Find"),
    }
}

#[test]
fn cli_find_requires_pattern() {
    assert!(Cli::try_parse_from(["dsprep", "find", "/data/foo"]).is_err());
}

#[test]
fn cli_parse_name() {
    let cli = parse(&["dsprep", "--log-stderr", "name", "https://example.com/foo.tar.gz"]);
    assert!(cli.log_stderr);
    match cli.command {
        CliCommand::Name { url } => assert_eq!(url, "https://example.com/foo.tar.gz"),
        _ => panic!("expected Name"),
    }
}
