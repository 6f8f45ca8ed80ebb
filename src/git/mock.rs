use crate::error::{ReleaseError, Result};
use crate::git::GitExecutor;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock git executor for testing without a repository
///
/// Responses are keyed by the space-joined arguments. Every call is
/// recorded, including calls that fail.
pub struct MockGit {
    responses: HashMap<String, std::result::Result<String, String>>,
    calls: Mutex<Vec<String>>,
}

impl MockGit {
    /// Create a mock that knows no commands
    pub fn new() -> Self {
        MockGit {
            responses: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Answer `git <args>` with `output`
    pub fn respond(mut self, args: &str, output: impl Into<String>) -> Self {
        self.responses.insert(args.to_string(), Ok(output.into()));
        self
    }

    /// Make `git <args>` fail with `stderr`
    pub fn fail(mut self, args: &str, stderr: impl Into<String>) -> Self {
        self.responses.insert(args.to_string(), Err(stderr.into()));
        self
    }

    /// Commands run so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Whether `git <args>` was run
    pub fn was_called(&self, args: &str) -> bool {
        self.calls().iter().any(|c| c == args)
    }
}

impl Default for MockGit {
    fn default() -> Self {
        Self::new()
    }
}

impl GitExecutor for MockGit {
    fn exec(&self, args: &[&str]) -> Result<String> {
        let command = args.join(" ");
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(command.clone());
        }

        match self.responses.get(&command) {
            Some(Ok(output)) => Ok(output.clone()),
            Some(Err(stderr)) => Err(ReleaseError::vcs(command, stderr.clone())),
            None => Err(ReleaseError::vcs(
                command.clone(),
                format!("Unknown git command: {}", command),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_git_responses() {
        let git = MockGit::new()
            .respond("describe --abbrev=0 --tags", "1.0.0\n")
            .respond("push", "");

        assert_eq!(git.latest_tag().unwrap(), Some("1.0.0".to_string()));
        assert!(git.push_branch().is_ok());
        assert_eq!(git.calls(), vec!["describe --abbrev=0 --tags", "push"]);
    }

    #[test]
    fn test_mock_git_unknown_command_fails() {
        let git = MockGit::new();
        let err = git.exec(&["status"]).unwrap_err();
        assert!(err.to_string().contains("Unknown git command: status"));
        assert!(git.was_called("status"));
    }

    #[test]
    fn test_latest_tag_missing_is_none() {
        let git = MockGit::new().fail(
            "describe --abbrev=0 --tags",
            "fatal: No names found, cannot describe anything.",
        );
        assert_eq!(git.latest_tag().unwrap(), None);
    }

    #[test]
    fn test_latest_tag_other_failure_propagates() {
        let git = MockGit::new().fail(
            "describe --abbrev=0 --tags",
            "fatal: not a git repository (or any of the parent directories): .git",
        );
        assert!(matches!(git.latest_tag(), Err(ReleaseError::Vcs { .. })));
    }

    #[test]
    fn test_merges_since_range() {
        let git = MockGit::new()
            .respond("log --merges --pretty=format:%b%x1f%s%x1e 1.0.0..HEAD", "")
            .respond("log --merges --pretty=format:%b%x1f%s%x1e HEAD", "");

        git.merges_since(Some("1.0.0")).unwrap();
        git.merges_since(None).unwrap();
        assert_eq!(git.calls().len(), 2);
    }

    #[test]
    fn test_remote_origin_url_is_trimmed() {
        let git = MockGit::new().respond(
            "config --get remote.origin.url",
            "git@github.com:org/repo.git\n",
        );
        assert_eq!(git.remote_origin_url().unwrap(), "git@github.com:org/repo.git");
    }
}
