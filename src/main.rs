use anyhow::Result;
use clap::Parser;

use git_release::cli::Cli;
use git_release::config;
use git_release::git::SystemGit;
use git_release::manifest::CargoManifest;
use git_release::release::{ReleaseOptions, ReleaseOrchestrator, ReleaseOutcome};
use git_release::ui::{
    self, AutoConfirm, ConfirmationPrompt, ConsoleLogger, TerminalPrompt, DEFAULT_CHANGELOG_PREFIX,
};

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Cli) -> Result<()> {
    let config = config::load_config(args.config.as_deref())?;
    let class = args.command.release_class()?;

    let git = SystemGit::open(".");
    let manifest = CargoManifest::new(args.manifest.unwrap_or(config.manifest));
    let prompt: &dyn ConfirmationPrompt = if args.yes { &AutoConfirm } else { &TerminalPrompt };
    let orchestrator = ReleaseOrchestrator::new(&git, &manifest, prompt, &ConsoleLogger);

    let Some(class) = class else {
        orchestrator.changelog().show_changelog(DEFAULT_CHANGELOG_PREFIX)?;
        return Ok(());
    };

    let options = ReleaseOptions::new(class)
        .with_commit_message(args.message.unwrap_or(config.commit_message));

    match orchestrator.create_release(&options)? {
        ReleaseOutcome::Published { version, .. } => {
            log::info!("Released {}", version);
        }
        ReleaseOutcome::Aborted => {
            println!("Release cancelled by user.");
        }
    }

    Ok(())
}
