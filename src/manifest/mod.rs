//! Persistent record of the project's current version
//!
//! - [cargo::CargoManifest]: `Cargo.toml`, committed and tagged with git2
//! - [memory::MemoryManifest]: in-memory double for tests

pub mod cargo;
pub mod memory;

pub use cargo::CargoManifest;
pub use memory::MemoryManifest;

use crate::error::Result;
use semver::Version;

/// Reads and bumps the project version
pub trait VersionManifest: Send + Sync {
    /// Current version string as written in the manifest
    fn read(&self) -> Result<String>;

    /// Rewrite the version, commit the change with `commit_message` and tag
    /// the commit for the new version. One logical step: either all of it
    /// happens or an error is returned.
    fn update(&self, version: &Version, commit_message: &str) -> Result<()>;
}

/// Render a commit message template for `version`.
///
/// Both `%s` and `{version}` are replaced.
pub fn render_commit_message(template: &str, version: &Version) -> String {
    let version = version.to_string();
    template.replace("%s", &version).replace("{version}", &version)
}
