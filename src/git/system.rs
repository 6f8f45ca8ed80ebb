use crate::error::{ReleaseError, Result};
use crate::git::GitExecutor;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Git backend running the system `git` binary
pub struct SystemGit {
    /// Directory git is run from
    repo_path: PathBuf,
}

impl SystemGit {
    /// Use the repository containing `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        SystemGit {
            repo_path: path.as_ref().to_path_buf(),
        }
    }
}

impl GitExecutor for SystemGit {
    fn exec(&self, args: &[&str]) -> Result<String> {
        let command = args.join(" ");
        log::debug!("git {}", command);

        // is_missing_tag matches git's untranslated messages
        let output = Command::new("git")
            .env("LC_ALL", "C")
            .env_remove("LANGUAGE")
            .arg("-C")
            .arg(&self.repo_path)
            .args(args)
            .output()
            .map_err(|e| ReleaseError::vcs(&command, format!("could not run git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            log::debug!("git {} exited with {}: {}", command, output.status, stderr);
            let message = if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                stderr
            };
            return Err(ReleaseError::vcs(command, message));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
