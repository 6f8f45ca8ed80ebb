use crate::error::{ReleaseError, Result};
use semver::{BuildMetadata, Prerelease, Version};
use std::fmt;
use std::str::FromStr;

/// Which version component a release increments
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReleaseClass {
    Patch,
    Minor,
    Major,
}

impl ReleaseClass {
    pub const ALL: [ReleaseClass; 3] = [ReleaseClass::Patch, ReleaseClass::Minor, ReleaseClass::Major];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseClass::Patch => "patch",
            ReleaseClass::Minor => "minor",
            ReleaseClass::Major => "major",
        }
    }
}

impl fmt::Display for ReleaseClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleaseClass {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        ReleaseClass::ALL
            .into_iter()
            .find(|class| class.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ReleaseError::config(format!(
                    "Unknown release type '{}' - expected patch, minor or major",
                    s
                ))
            })
    }
}

/// Parse a `major.minor.patch` version, tolerating a leading `v`
pub fn parse_version(raw: &str) -> Result<Version> {
    let trimmed = raw.trim();
    let clean = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed);

    Version::parse(clean).map_err(|e| {
        ReleaseError::version(format!(
            "Invalid version format: '{}' - expected X.Y.Z ({})",
            raw, e
        ))
    })
}

/// Bump a version according to the release class.
///
/// - **Major**: major += 1, minor = 0, patch = 0
/// - **Minor**: minor += 1, patch = 0
/// - **Patch**: patch += 1
///
/// A prerelease of the version the bump would produce is finalized instead
/// of skipped over, so `1.1.0-rc.1` bumped by minor gives `1.1.0`. Build
/// metadata never survives a bump. Fails if the incremented component
/// would overflow.
pub fn bump(current: &Version, class: ReleaseClass) -> Result<Version> {
    let is_pre = !current.pre.is_empty();
    let mut next = Version::new(current.major, current.minor, current.patch);

    match class {
        ReleaseClass::Major => {
            if !(is_pre && current.minor == 0 && current.patch == 0) {
                next.major = increment_component(next.major, current, class)?;
            }
            next.minor = 0;
            next.patch = 0;
        }
        ReleaseClass::Minor => {
            if !(is_pre && current.patch == 0) {
                next.minor = increment_component(next.minor, current, class)?;
            }
            next.patch = 0;
        }
        ReleaseClass::Patch => {
            if !is_pre {
                next.patch = increment_component(next.patch, current, class)?;
            }
        }
    }

    next.pre = Prerelease::EMPTY;
    next.build = BuildMetadata::EMPTY;
    Ok(next)
}

fn increment_component(value: u64, current: &Version, class: ReleaseClass) -> Result<u64> {
    value.checked_add(1).ok_or_else(|| {
        ReleaseError::version(format!(
            "Cannot make a {} release of {}: {} version overflows",
            class, current, class
        ))
    })
}

/// Compute the next version string from the current one
pub fn increment(current: &str, class: ReleaseClass) -> Result<String> {
    Ok(bump(&parse_version(current)?, class)?.to_string())
}
