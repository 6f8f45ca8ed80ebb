use crate::domain::Tag;
use crate::error::{ReleaseError, Result};
use crate::manifest::VersionManifest;
use git2::{Repository, StatusOptions};
use semver::Version;
use std::fs;
use std::path::{Path, PathBuf};
use toml_edit::DocumentMut;

/// Where the version lives in a Cargo.toml
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VersionField {
    /// `[package] version`
    Package,
    /// `[workspace.package] version`, inherited by members
    Workspace,
}

/// A Cargo.toml whose version is bumped, committed and tagged
pub struct CargoManifest {
    path: PathBuf,
}

impl CargoManifest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CargoManifest { path: path.into() }
    }

    fn load(&self) -> Result<DocumentMut> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            ReleaseError::manifest(format!("Cannot read {}: {}", self.path.display(), e))
        })?;

        content.parse::<DocumentMut>().map_err(|e| {
            ReleaseError::manifest(format!("Cannot parse {}: {}", self.path.display(), e))
        })
    }

    fn locate(&self, doc: &DocumentMut) -> Result<(VersionField, String)> {
        if let Some(version) = doc
            .get("package")
            .and_then(|p| p.get("version"))
            .and_then(|v| v.as_str())
        {
            return Ok((VersionField::Package, version.to_string()));
        }

        if let Some(version) = doc
            .get("workspace")
            .and_then(|w| w.get("package"))
            .and_then(|p| p.get("version"))
            .and_then(|v| v.as_str())
        {
            return Ok((VersionField::Workspace, version.to_string()));
        }

        Err(ReleaseError::manifest(format!(
            "No package or workspace version in {}",
            self.path.display()
        )))
    }

    fn ensure_clean(repo: &Repository) -> Result<()> {
        let mut options = StatusOptions::new();
        options.include_untracked(false).include_ignored(false);

        let statuses = repo.statuses(Some(&mut options))?;
        if !statuses.is_empty() {
            let dirty: Vec<String> = statuses
                .iter()
                .filter_map(|s| s.path().map(str::to_string))
                .collect();
            return Err(ReleaseError::manifest(format!(
                "Git working directory not clean: {}",
                dirty.join(", ")
            )));
        }
        Ok(())
    }

    fn ensure_tag_free(repo: &Repository, tag: &Tag) -> Result<()> {
        match repo.find_reference(&format!("refs/tags/{}", tag)) {
            Ok(_) => Err(ReleaseError::manifest(format!("Tag {} already exists", tag))),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn commit_and_tag(&self, repo: &Repository, version: &Version, message: &str) -> Result<()> {
        let workdir = repo
            .workdir()
            .ok_or_else(|| ReleaseError::manifest("Cannot commit in a bare repository"))?;
        let workdir = fs::canonicalize(workdir)?;
        let manifest = fs::canonicalize(&self.path)?;
        let relative = manifest.strip_prefix(&workdir).map_err(|_| {
            ReleaseError::manifest(format!(
                "{} is outside the repository at {}",
                manifest.display(),
                workdir.display()
            ))
        })?;

        let mut index = repo.index()?;
        index.add_path(relative)?;
        index.write()?;
        let tree = repo.find_tree(index.write_tree()?)?;

        let signature = repo.signature()?;
        let parent = repo.head()?.peel_to_commit()?;
        let commit_id = repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &[&parent],
        )?;

        let tag = Tag::for_version(version);
        let target = repo.find_object(commit_id, None)?;
        repo.tag(&tag.name, &target, &signature, message, false)
            .map_err(|e| ReleaseError::manifest(format!("Cannot create tag {}: {}", tag, e)))?;

        log::info!("Committed {} and tagged {}", relative.display(), tag);
        Ok(())
    }
}

impl VersionManifest for CargoManifest {
    fn read(&self) -> Result<String> {
        let doc = self.load()?;
        let (_, version) = self.locate(&doc)?;
        Ok(version)
    }

    fn update(&self, version: &Version, commit_message: &str) -> Result<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let repo = Repository::discover(dir)?;
        Self::ensure_clean(&repo)?;
        Self::ensure_tag_free(&repo, &Tag::for_version(version))?;

        let mut doc = self.load()?;
        let (field, _) = self.locate(&doc)?;
        let item = match field {
            VersionField::Package => doc.get_mut("package").and_then(|p| p.get_mut("version")),
            VersionField::Workspace => doc
                .get_mut("workspace")
                .and_then(|w| w.get_mut("package"))
                .and_then(|p| p.get_mut("version")),
        };
        let value = item.and_then(|i| i.as_value_mut()).ok_or_else(|| {
            ReleaseError::manifest(format!("No version in {}", self.path.display()))
        })?;

        let decor = value.decor().clone();
        *value = toml_edit::Value::from(version.to_string());
        *value.decor_mut() = decor;

        fs::write(&self.path, doc.to_string()).map_err(|e| {
            ReleaseError::manifest(format!("Cannot write {}: {}", self.path.display(), e))
        })?;

        self.commit_and_tag(&repo, version, commit_message)
    }
}
