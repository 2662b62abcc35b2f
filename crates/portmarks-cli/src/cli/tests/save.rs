//! Tests for the save subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_save() {
    match parse(&["portmarks", "save", "https://example.com/page"]) {
        CliCommand::Save { url, dir, force } => {
            assert_eq!(url, "https://example.com/page");
            assert!(dir.is_none());
            assert!(!force);
        }
        _ => panic!("expected Save"),
    }
}

#[test]
fn cli_parse_save_dir_and_force() {
    match parse(&[
        "portmarks",
        "save",
        "https://example.com/x",
        "--dir",
        "/tmp",
        "--force",
    ]) {
        CliCommand::Save { url, dir, force } => {
            assert_eq!(url, "https://example.com/x");
            assert_eq!(dir.as_deref(), Some(std::path::Path::new("/tmp")));
            assert!(force);
        }
        _ => panic!("expected Save with --dir and --force"),
    }
}

#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from([
        "portmarks",
        "save",
        "https://example.com/",
        "--config",
        "/etc/portmarks.toml",
    ])
    .unwrap();
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/etc/portmarks.toml"))
    );
}

#[test]
fn cli_parse_save_requires_url() {
    assert!(Cli::try_parse_from(["portmarks", "save"]).is_err());
}
