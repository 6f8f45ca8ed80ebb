// tests/cli_test.rs
use clap::Parser;
use git_release::cli::{Cli, Command};
use git_release::domain::ReleaseClass;
use git_release::ReleaseError;
use std::path::PathBuf;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("git-release").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_changelog_command() {
    let cli = parse(&["changelog"]);
    assert!(matches!(cli.command, Command::Changelog));
    assert_eq!(cli.command.release_class().unwrap(), None);
}

#[test]
fn test_direct_release_commands() {
    for (arg, class) in [
        ("patch", ReleaseClass::Patch),
        ("minor", ReleaseClass::Minor),
        ("major", ReleaseClass::Major),
    ] {
        assert_eq!(parse(&[arg]).command.release_class().unwrap(), Some(class));
    }
}

#[test]
fn test_release_with_flag() {
    let cli = parse(&["release", "--major"]);
    assert_eq!(cli.command.release_class().unwrap(), Some(ReleaseClass::Major));
}

#[test]
fn test_release_without_flag_is_configuration_error() {
    let cli = parse(&["release"]);
    let err = cli.command.release_class().unwrap_err();
    assert!(matches!(err, ReleaseError::Config(_)));
    assert!(err.to_string().contains("--patch|--minor|--major"));
}

#[test]
fn test_release_flags_are_exclusive() {
    assert!(Cli::try_parse_from(["git-release", "release", "--patch", "--minor"]).is_err());
}

#[test]
fn test_global_options() {
    let cli = parse(&[
        "minor",
        "--yes",
        "--message",
        "release %s",
        "--manifest",
        "app/Cargo.toml",
    ]);
    assert!(cli.yes);
    assert_eq!(cli.message.as_deref(), Some("release %s"));
    assert_eq!(cli.manifest, Some(PathBuf::from("app/Cargo.toml")));
}

#[test]
fn test_unknown_command_rejected() {
    assert!(Cli::try_parse_from(["git-release", "prerelease"]).is_err());
}
