//! Pure formatting functions for messages shown during a release.

use crate::domain::{ReleaseClass, Tag};

/// Heading used when the changelog is shown on its own
pub const DEFAULT_CHANGELOG_PREFIX: &str = "Changelog:";

/// Heading of the changelog shown before asking for confirmation
pub fn disclaimer_prefix(class: ReleaseClass) -> String {
    format!(
        "You are about to publish a {} release with the following changelog:",
        class
    )
}

/// Question asked before anything is changed
pub fn confirmation_message(tag: &Tag) -> String {
    format!("Are you sure you want to publish the {} release?", tag)
}

/// Final message pointing at the release page
pub fn completion_message(release_url: &str) -> String {
    format!(
        "New tag has been pushed, you can now copy changelog and create the release: {}",
        release_url
    )
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", console::style("ERROR:").red(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use semver::Version;

    #[test]
    fn test_disclaimer_prefix() {
        assert_eq!(
            disclaimer_prefix(ReleaseClass::Minor),
            "You are about to publish a minor release with the following changelog:"
        );
    }

    #[test]
    fn test_confirmation_message_names_tag() {
        let tag = Tag::for_version(&Version::new(1, 1, 0));
        assert!(confirmation_message(&tag).contains("v1.1.0"));
    }

    #[test]
    fn test_completion_message() {
        let msg = completion_message("https://github.com/org/repo/releases/new?tag=v1.1.0");
        assert!(msg.ends_with("https://github.com/org/repo/releases/new?tag=v1.1.0"));
    }
}
