use semver::Version;
use std::fmt;

/// Prefix put in front of the version when naming release tags
pub const TAG_PREFIX: &str = "v";

/// A release tag as created by the bump stage (e.g. "v1.2.3")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a new tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// The tag a release of `version` is published under
    pub fn for_version(version: &Version) -> Self {
        Tag::new(format!("{}{}", TAG_PREFIX, version))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
