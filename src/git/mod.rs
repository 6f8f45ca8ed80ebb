//! Version-control abstraction layer
//!
//! The release pipeline talks to git through the [GitExecutor] trait, which
//! runs one git subcommand and returns its standard output. The concrete
//! implementations are:
//!
//! - [system::SystemGit]: runs the `git` binary found on `PATH`
//! - [mock::MockGit]: scripted responses for testing
//!
//! The provided methods on the trait build the handful of subcommands a
//! release needs, so implementors only supply [GitExecutor::exec].
//!
//! ```rust
//! # use git_release::git::GitExecutor;
//! # fn example<G: GitExecutor>(git: &G) -> git_release::Result<()> {
//! let tag = git.latest_tag()?;
//! let log = git.merges_since(tag.as_deref())?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod system;

pub use mock::MockGit;
pub use system::SystemGit;

use crate::domain::changelog::{FIELD_SEPARATOR, RECORD_SEPARATOR};
use crate::error::{ReleaseError, Result};

/// stderr fragments git prints when `describe` finds no tag to report
const NO_TAG_MARKERS: [&str; 3] = [
    "No names found",
    "No tags can describe",
    "cannot describe anything",
];

/// Runs git subcommands
///
/// ## Error Handling
///
/// A non-zero exit status must be reported as [ReleaseError::Vcs] carrying
/// the subcommand and git's stderr, so callers can tell failures apart.
pub trait GitExecutor: Send + Sync {
    /// Run `git <args>` and return its standard output
    fn exec(&self, args: &[&str]) -> Result<String>;

    /// Most recent tag reachable from HEAD.
    ///
    /// # Returns
    /// * `Ok(Some(tag))` - The latest tag
    /// * `Ok(None)` - The repository has no tag yet
    /// * `Err` - Any other git failure
    fn latest_tag(&self) -> Result<Option<String>> {
        match self.exec(&["describe", "--abbrev=0", "--tags"]) {
            Ok(output) => {
                let tag = output.trim();
                Ok((!tag.is_empty()).then(|| tag.to_string()))
            }
            Err(ReleaseError::Vcs { message, .. }) if is_missing_tag(&message) => {
                log::warn!("No tag found, using the whole history: {}", message.trim());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Merge commits after `since` (exclusive) up to HEAD, newest first.
    ///
    /// Records are `<body>\x1f<summary>\x1e`; see
    /// [Changelog::parse_log](crate::domain::Changelog::parse_log).
    fn merges_since(&self, since: Option<&str>) -> Result<String> {
        let range = match since {
            Some(tag) => format!("{}..HEAD", tag),
            None => "HEAD".to_string(),
        };
        let pretty = merge_log_format();

        self.exec(&["log", "--merges", &pretty, &range])
    }

    /// Push the current branch to its upstream
    fn push_branch(&self) -> Result<()> {
        self.exec(&["push"]).map(|_| ())
    }

    /// Push all tags
    fn push_tags(&self) -> Result<()> {
        self.exec(&["push", "--tags"]).map(|_| ())
    }

    /// URL of the `origin` remote
    fn remote_origin_url(&self) -> Result<String> {
        Ok(self
            .exec(&["config", "--get", "remote.origin.url"])?
            .trim()
            .to_string())
    }
}

/// `--pretty` argument producing one delimited record per merge commit
pub fn merge_log_format() -> String {
    format!(
        "--pretty=format:%b{}%s{}",
        escape(FIELD_SEPARATOR),
        escape(RECORD_SEPARATOR)
    )
}

fn escape(c: char) -> String {
    format!("%x{:02x}", c as u32)
}

fn is_missing_tag(stderr: &str) -> bool {
    NO_TAG_MARKERS.iter().any(|marker| stderr.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_log_format() {
        assert_eq!(merge_log_format(), "--pretty=format:%b%x1f%s%x1e");
    }

    #[test]
    fn test_is_missing_tag() {
        assert!(is_missing_tag("fatal: No names found, cannot describe anything."));
        assert!(is_missing_tag(
            "fatal: No tags can describe '3f1c0e4a0b'.\nTry --always, or create some tags."
        ));
        assert!(!is_missing_tag("fatal: not a git repository"));
    }
}
