use crate::error::{ReleaseError, Result};
use crate::manifest::VersionManifest;
use semver::Version;
use std::sync::Mutex;

/// In-memory manifest for testing
pub struct MemoryManifest {
    version: Mutex<String>,
    updates: Mutex<Vec<(String, String)>>,
    update_error: Option<String>,
}

impl MemoryManifest {
    pub fn new(version: impl Into<String>) -> Self {
        MemoryManifest {
            version: Mutex::new(version.into()),
            updates: Mutex::new(Vec::new()),
            update_error: None,
        }
    }

    /// Make every update fail with `message`
    pub fn failing_update(mut self, message: impl Into<String>) -> Self {
        self.update_error = Some(message.into());
        self
    }

    /// `(version, commit message)` pairs applied so far
    pub fn updates(&self) -> Vec<(String, String)> {
        self.updates.lock().map(|u| u.clone()).unwrap_or_default()
    }
}

impl VersionManifest for MemoryManifest {
    fn read(&self) -> Result<String> {
        self.version
            .lock()
            .map(|v| v.clone())
            .map_err(|_| ReleaseError::manifest("manifest lock poisoned"))
    }

    fn update(&self, version: &Version, commit_message: &str) -> Result<()> {
        if let Some(message) = &self.update_error {
            return Err(ReleaseError::manifest(message.clone()));
        }

        let mut current = self
            .version
            .lock()
            .map_err(|_| ReleaseError::manifest("manifest lock poisoned"))?;
        *current = version.to_string();

        if let Ok(mut updates) = self.updates.lock() {
            updates.push((version.to_string(), commit_message.to_string()));
        }
        Ok(())
    }
}
