//! Staged release pipeline
//!
//! A release runs [Stage::ALL] in order over one [ReleaseContext]. Each
//! stage either lets the run continue, stops it because the operator
//! declined, or fails. The first failure ends the run; stages that already
//! ran are not undone, so a failed push leaves the bump commit and tag in
//! the local repository.

use crate::domain::{bump, parse_version, remote, Changelog, Tag};
use crate::error::{ReleaseError, Result};
use crate::git::GitExecutor;
use crate::manifest::{render_commit_message, VersionManifest};
use crate::release::{ChangelogExtractor, ReleaseOptions, ReleaseOutcome, ReleasePlan, Stage};
use crate::ui::{completion_message, confirmation_message, disclaimer_prefix, ConfirmationPrompt, Logger};

/// What a stage tells the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Abort,
}

/// State handed from one stage to the next
struct ReleaseContext<'o> {
    options: &'o ReleaseOptions,
    changelog: Option<Changelog>,
    plan: Option<ReleasePlan>,
    release_url: Option<String>,
}

impl<'o> ReleaseContext<'o> {
    fn new(options: &'o ReleaseOptions) -> Self {
        ReleaseContext {
            options,
            changelog: None,
            plan: None,
            release_url: None,
        }
    }

    fn plan(&self) -> Result<&ReleasePlan> {
        self.plan
            .as_ref()
            .ok_or_else(|| ReleaseError::version("next version has not been computed"))
    }

    fn into_outcome(self) -> Result<ReleaseOutcome> {
        let plan = self
            .plan
            .ok_or_else(|| ReleaseError::version("next version has not been computed"))?;
        let release_url = self
            .release_url
            .ok_or_else(|| ReleaseError::version("release link has not been built"))?;

        Ok(ReleaseOutcome::Published {
            version: plan.next_version,
            release_url,
        })
    }
}

/// Drives a release from changelog to release link
pub struct ReleaseOrchestrator<'a> {
    git: &'a dyn GitExecutor,
    manifest: &'a dyn VersionManifest,
    prompt: &'a dyn ConfirmationPrompt,
    logger: &'a dyn Logger,
}

impl<'a> ReleaseOrchestrator<'a> {
    pub fn new(
        git: &'a dyn GitExecutor,
        manifest: &'a dyn VersionManifest,
        prompt: &'a dyn ConfirmationPrompt,
        logger: &'a dyn Logger,
    ) -> Self {
        ReleaseOrchestrator {
            git,
            manifest,
            prompt,
            logger,
        }
    }

    /// Changelog access sharing this orchestrator's git and logger
    pub fn changelog(&self) -> ChangelogExtractor<'a> {
        ChangelogExtractor::new(self.git, self.logger)
    }

    /// Run every stage of a release.
    ///
    /// # Returns
    /// * `Ok(ReleaseOutcome::Published)` - Bumped, pushed and linked
    /// * `Ok(ReleaseOutcome::Aborted)` - The operator declined; nothing changed
    /// * `Err(ReleaseError::Stage)` - The named stage failed; later stages did not run
    pub fn create_release(&self, options: &ReleaseOptions) -> Result<ReleaseOutcome> {
        let mut ctx = ReleaseContext::new(options);

        for stage in Stage::ALL {
            log::info!("Running {} stage", stage);
            let flow = self
                .run_stage(stage, &mut ctx)
                .map_err(|e| e.in_stage(stage))?;

            if flow == Flow::Abort {
                log::info!("Release aborted at {} stage", stage);
                return Ok(ReleaseOutcome::Aborted);
            }
        }

        ctx.into_outcome()
    }

    fn run_stage(&self, stage: Stage, ctx: &mut ReleaseContext<'_>) -> Result<Flow> {
        match stage {
            Stage::Disclaimer => self.disclaimer(ctx),
            Stage::Confirmation => self.confirmation(ctx),
            Stage::Bump => self.bump(ctx),
            Stage::Push => self.push(),
            Stage::PushTags => self.push_tags(),
            Stage::Completion => self.completion(ctx),
        }
    }

    fn disclaimer(&self, ctx: &mut ReleaseContext<'_>) -> Result<Flow> {
        let prefix = disclaimer_prefix(ctx.options.class());
        ctx.changelog = Some(self.changelog().show_changelog(&prefix)?);
        Ok(Flow::Continue)
    }

    fn confirmation(&self, ctx: &mut ReleaseContext<'_>) -> Result<Flow> {
        // The manifest, not the latest tag, decides the next version
        let current_version = parse_version(&self.manifest.read()?)?;
        let next_version = bump(&current_version, ctx.options.class())?;
        log::debug!("Next version: {} -> {}", current_version, next_version);

        let question = confirmation_message(&Tag::for_version(&next_version));
        let accepted = self.prompt.ask(&question, true)?;

        ctx.plan = Some(ReleasePlan {
            current_version,
            next_version,
            changelog: ctx.changelog.take().unwrap_or_default(),
        });

        Ok(if accepted { Flow::Continue } else { Flow::Abort })
    }

    fn bump(&self, ctx: &mut ReleaseContext<'_>) -> Result<Flow> {
        let plan = ctx.plan()?;
        let message = render_commit_message(ctx.options.commit_message(), &plan.next_version);
        self.manifest.update(&plan.next_version, &message)?;
        Ok(Flow::Continue)
    }

    fn push(&self) -> Result<Flow> {
        self.git.push_branch()?;
        Ok(Flow::Continue)
    }

    fn push_tags(&self) -> Result<Flow> {
        self.git.push_tags()?;
        Ok(Flow::Continue)
    }

    fn completion(&self, ctx: &mut ReleaseContext<'_>) -> Result<Flow> {
        let origin = self.git.remote_origin_url()?;
        let tag = Tag::for_version(&ctx.plan()?.next_version);
        let url = remote::release_page_url(&origin, &tag);

        self.logger.log(&completion_message(&url));
        ctx.release_url = Some(url);
        Ok(Flow::Continue)
    }
}
