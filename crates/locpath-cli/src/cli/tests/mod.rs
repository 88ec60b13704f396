//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}


#[test]
fn cli_parse_global_location() {
    let cli = Cli::try_parse_from(["locpath", "cwd", "--location", "http://localhost/a/b"]).unwrap();
    assert_eq!(cli.location.as_deref(), Some("http://localhost/a/b"));
    assert!(matches!(cli.command, CliCommand::Cwd { climb: 0 }));
}

#[test]
fn cli_parse_location_defaults_to_none() {
    let cli = Cli::try_parse_from(["locpath", "normalize", "/a"]).unwrap();
    assert!(cli.location.is_none());
}

#[test]
fn cli_rejects_unknown_command() {
    assert!(Cli::try_parse_from(["locpath", "frobnicate"]).is_err());
}
