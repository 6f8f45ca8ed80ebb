// tests/system_git_test.rs
use git2::{Commit, Oid, Repository, Signature, Time};
use git_release::git::{GitExecutor, SystemGit};
use git_release::release::ChangelogExtractor;
use git_release::ui::RecordingLogger;
use serial_test::serial;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

struct TestRepo {
    dir: TempDir,
    repo: Repository,
    clock: i64,
}

impl TestRepo {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        TestRepo {
            dir,
            repo,
            clock: 1_700_000_000,
        }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Commit `content` as README on top of `parents` without moving HEAD
    fn commit(&mut self, parents: &[Oid], content: &str, message: &str) -> Oid {
        fs::write(self.dir.path().join("README"), content).unwrap();
        let mut index = self.repo.index().unwrap();
        index.add_path(Path::new("README")).unwrap();
        index.write().unwrap();
        let tree = self.repo.find_tree(index.write_tree().unwrap()).unwrap();

        self.clock += 60;
        let sig = Signature::new("Dev", "dev@example.com", &Time::new(self.clock, 0)).unwrap();
        let parents: Vec<Commit> = parents
            .iter()
            .map(|id| self.repo.find_commit(*id).unwrap())
            .collect();
        let parent_refs: Vec<&Commit> = parents.iter().collect();

        self.repo
            .commit(None, &sig, &sig, message, &tree, &parent_refs)
            .unwrap()
    }

    /// Merge a one-commit feature branch into `base`, as a pull request would
    fn merge_pull_request(&mut self, base: Oid, number: u32, title: &str) -> Oid {
        let feature = self.commit(&[base], title, title);
        self.commit(
            &[base, feature],
            title,
            &format!(
                "Merge pull request #{} from dev/feature-{}\n\n{}\n",
                number, number, title
            ),
        )
    }

    fn set_head(&self, id: Oid) {
        self.repo
            .reference("refs/heads/main", id, true, "test")
            .unwrap();
        self.repo.set_head("refs/heads/main").unwrap();
    }

    fn tag(&self, name: &str, id: Oid) {
        let target = self.repo.find_object(id, None).unwrap();
        self.repo.tag_lightweight(name, &target, false).unwrap();
    }
}

#[test]
fn test_changelog_from_real_merges_since_tag() {
    let mut repo = TestRepo::new();
    let root = repo.commit(&[], "init", "Initial commit");
    let released = repo.merge_pull_request(root, 11, "feat: before the release");
    repo.tag("1.0.0", released);
    let first = repo.merge_pull_request(released, 12, "fix(stuff): A");
    let second = repo.merge_pull_request(first, 13, "fix(stuff): B");
    repo.set_head(second);

    let git = SystemGit::open(repo.path());
    let logger = RecordingLogger::new();

    assert_eq!(git.latest_tag().unwrap(), Some("1.0.0".to_string()));

    let changelog = ChangelogExtractor::new(&git, &logger).changelog().unwrap();
    let texts: Vec<&str> = changelog.entries().iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["* fix(stuff): B (#13)", "* fix(stuff): A (#12)"]);
}

#[test]
fn test_changelog_empty_right_after_tag() {
    let mut repo = TestRepo::new();
    let root = repo.commit(&[], "init", "Initial commit");
    let merged = repo.merge_pull_request(root, 1, "feat: first");
    repo.tag("0.1.0", merged);
    repo.set_head(merged);

    let git = SystemGit::open(repo.path());
    let logger = RecordingLogger::new();

    let changelog = ChangelogExtractor::new(&git, &logger).changelog().unwrap();
    assert!(changelog.is_empty());
}

#[test]
fn test_untagged_repository_uses_whole_history() {
    let mut repo = TestRepo::new();
    let root = repo.commit(&[], "init", "Initial commit");
    let merged = repo.merge_pull_request(root, 1, "feat: first");
    repo.set_head(merged);

    let git = SystemGit::open(repo.path());
    let logger = RecordingLogger::new();

    assert_eq!(git.latest_tag().unwrap(), None);
    let changelog = ChangelogExtractor::new(&git, &logger).changelog().unwrap();
    let texts: Vec<&str> = changelog.entries().iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["* feat: first (#1)"]);
}

#[test]
#[serial]
fn test_untagged_repository_under_translated_locale() {
    let mut repo = TestRepo::new();
    let root = repo.commit(&[], "init", "Initial commit");
    repo.set_head(root);

    let previous: Vec<(&str, Option<String>)> = ["LANGUAGE", "LC_ALL", "LANG"]
        .into_iter()
        .map(|key| (key, std::env::var(key).ok()))
        .collect();
    std::env::set_var("LANGUAGE", "de");
    std::env::set_var("LC_ALL", "de_DE.UTF-8");
    std::env::set_var("LANG", "de_DE.UTF-8");

    let result = SystemGit::open(repo.path()).latest_tag();

    for (key, value) in previous {
        match value {
            Some(value) => std::env::set_var(key, value),
            None => std::env::remove_var(key),
        }
    }

    assert_eq!(result.unwrap(), None);
}
