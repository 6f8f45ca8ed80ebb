//! Command-line surface
//!
//! Parsing lives in the library so the commands can be checked without
//! spawning the binary; `main.rs` only wires collaborators and reports.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::ReleaseClass;
use crate::error::{ReleaseError, Result};

#[derive(Debug, Parser)]
#[command(
    name = "git-release",
    version,
    about = "Bump the version, push the release tag and link to the release page"
)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Skip the confirmation prompt")]
    pub yes: bool,

    #[arg(short, long, global = true, help = "Commit message template (%s is the new version)")]
    pub message: Option<String>,

    #[arg(long, global = true, help = "Manifest holding the project version")]
    pub manifest: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show pull requests merged since the latest tag
    Changelog,
    /// Create a patch release
    Patch,
    /// Create a minor release
    Minor,
    /// Create a major release
    Major,
    /// Create a release whose type is given by a flag
    Release(ReleaseFlags),
}

#[derive(Debug, Args, Default, Clone, Copy)]
#[group(multiple = false)]
pub struct ReleaseFlags {
    #[arg(long)]
    pub patch: bool,
    #[arg(long)]
    pub minor: bool,
    #[arg(long)]
    pub major: bool,
}

impl ReleaseFlags {
    /// The release class selected by the flags
    pub fn class(&self) -> Result<ReleaseClass> {
        [
            (self.patch, ReleaseClass::Patch),
            (self.minor, ReleaseClass::Minor),
            (self.major, ReleaseClass::Major),
        ]
        .into_iter()
        .find_map(|(set, class)| set.then_some(class))
        .ok_or_else(|| {
            ReleaseError::config("You must specify a release type (--patch|--minor|--major)")
        })
    }
}

impl Command {
    /// Release class for release commands, `None` for `changelog`
    pub fn release_class(&self) -> Result<Option<ReleaseClass>> {
        match self {
            Command::Changelog => Ok(None),
            Command::Patch => Ok(Some(ReleaseClass::Patch)),
            Command::Minor => Ok(Some(ReleaseClass::Minor)),
            Command::Major => Ok(Some(ReleaseClass::Major)),
            Command::Release(flags) => flags.class().map(Some),
        }
    }
}
