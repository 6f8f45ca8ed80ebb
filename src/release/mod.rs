//! Release workflow: changelog extraction and the staged release pipeline

pub mod changelog;
pub mod orchestrator;

pub use changelog::ChangelogExtractor;
pub use orchestrator::ReleaseOrchestrator;

use crate::domain::{Changelog, ReleaseClass};
use semver::Version;
use std::fmt;

/// Default commit message; `%s` is replaced by the new version
pub const DEFAULT_COMMIT_MESSAGE: &str = "Bumps to version %s";

/// What to release and how to record it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseOptions {
    class: ReleaseClass,
    commit_message: String,
}

impl ReleaseOptions {
    pub fn new(class: ReleaseClass) -> Self {
        ReleaseOptions {
            class,
            commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
        }
    }

    /// Use `template` for the bump commit instead of the default
    pub fn with_commit_message(mut self, template: impl Into<String>) -> Self {
        self.commit_message = template.into();
        self
    }

    pub fn class(&self) -> ReleaseClass {
        self.class
    }

    pub fn commit_message(&self) -> &str {
        &self.commit_message
    }
}

/// Versions and changes of one release, computed fresh for every run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePlan {
    pub current_version: Version,
    pub next_version: Version,
    pub changelog: Changelog,
}

/// How a release run ended when no stage failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Everything was pushed; `release_url` is where to finish the release
    Published {
        version: Version,
        release_url: String,
    },
    /// The operator declined the confirmation; nothing was changed
    Aborted,
}

/// Steps of a release, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Disclaimer,
    Confirmation,
    Bump,
    Push,
    PushTags,
    Completion,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Disclaimer,
        Stage::Confirmation,
        Stage::Bump,
        Stage::Push,
        Stage::PushTags,
        Stage::Completion,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Stage::Disclaimer => "disclaimer",
            Stage::Confirmation => "confirmation",
            Stage::Bump => "bump",
            Stage::Push => "push",
            Stage::PushTags => "push tags",
            Stage::Completion => "completion",
        }
    }

    /// Whether the stage changes the repository or the manifest
    pub fn mutates(&self) -> bool {
        matches!(self, Stage::Bump | Stage::Push | Stage::PushTags)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
