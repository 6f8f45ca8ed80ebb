use thiserror::Error;

use crate::release::Stage;

/// Unified error type for git-release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("git {command} failed: {message}")]
    Vcs { command: String, message: String },

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Version error: {0}")]
    Version(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{stage} stage failed: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: Box<ReleaseError>,
    },
}

/// Convenience type alias for Results in git-release
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a version-control error for a failed subcommand
    pub fn vcs(command: impl Into<String>, message: impl Into<String>) -> Self {
        ReleaseError::Vcs {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        ReleaseError::Manifest(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseError::Version(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Attach the pipeline stage that produced this error
    pub fn in_stage(self, stage: Stage) -> Self {
        ReleaseError::Stage {
            stage,
            source: Box::new(self),
        }
    }

    /// The underlying collaborator error, with any stage annotation removed
    pub fn root(&self) -> &ReleaseError {
        match self {
            ReleaseError::Stage { source, .. } => source.root(),
            other => other,
        }
    }

    /// The stage this error was raised in, if it came out of the pipeline
    pub fn stage(&self) -> Option<Stage> {
        match self {
            ReleaseError::Stage { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReleaseError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_vcs_error_display() {
        let err = ReleaseError::vcs("push --tags", "remote rejected");
        assert_eq!(err.to_string(), "git push --tags failed: remote rejected");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReleaseError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_stage_annotation_keeps_message() {
        let err = ReleaseError::vcs("push", "connection refused").in_stage(Stage::Push);
        let msg = err.to_string();
        assert!(msg.starts_with("push stage failed"), "got: {}", msg);
        assert!(msg.contains("connection refused"));
        assert_eq!(err.stage(), Some(Stage::Push));
        assert!(matches!(err.root(), ReleaseError::Vcs { .. }));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ReleaseError::config("x"), "Configuration error"),
            (ReleaseError::version("x"), "Version error"),
            (ReleaseError::manifest("x"), "Manifest error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
