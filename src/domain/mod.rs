//! Domain logic - pure release rules independent of git and the filesystem

pub mod changelog;
pub mod remote;
pub mod tag;
pub mod version;

pub use changelog::{Changelog, ChangelogEntry};
pub use tag::Tag;
pub use version::{bump, increment, parse_version, ReleaseClass};
