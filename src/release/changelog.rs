use crate::domain::Changelog;
use crate::error::Result;
use crate::git::GitExecutor;
use crate::ui::Logger;

/// Lists the pull requests merged since the latest tag
pub struct ChangelogExtractor<'a> {
    git: &'a dyn GitExecutor,
    logger: &'a dyn Logger,
}

impl<'a> ChangelogExtractor<'a> {
    pub fn new(git: &'a dyn GitExecutor, logger: &'a dyn Logger) -> Self {
        ChangelogExtractor { git, logger }
    }

    /// Merge commits between the latest tag and HEAD.
    ///
    /// Without any tag the whole history up to HEAD is used. The entries
    /// keep the order of `git log`.
    pub fn changelog(&self) -> Result<Changelog> {
        let latest_tag = self.git.latest_tag()?;
        log::debug!(
            "Collecting merges since {}",
            latest_tag.as_deref().unwrap_or("the first commit")
        );

        let raw = self.git.merges_since(latest_tag.as_deref())?;
        Ok(Changelog::parse_log(&raw))
    }

    /// Log the changelog as one block headed by `prefix`
    pub fn show_changelog(&self, prefix: &str) -> Result<Changelog> {
        let changelog = self.changelog()?;
        self.logger.log(&changelog.render(prefix));
        Ok(changelog)
    }
}
