use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Separates a merge commit's body from its summary in the log output
pub const FIELD_SEPARATOR: char = '\u{1f}';
/// Terminates one merge commit record in the log output
pub const RECORD_SEPARATOR: char = '\u{1e}';

fn merge_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\| Merge pull request (#\d+) from .*").expect("merge header pattern is valid")
    })
}

/// One formatted changelog line derived from a merge commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub text: String,
}

impl ChangelogEntry {
    /// Build an entry from a `"* <body> | <summary>"` line.
    ///
    /// A GitHub merge summary is shortened to its pull request number, so
    /// `"* fix: A | Merge pull request #12 from w/w"` becomes `"* fix: A (#12)"`.
    /// Other lines are kept as they are.
    pub fn from_merge_line(line: &str) -> Self {
        let text = merge_header().replace(line.trim(), "($1)").into_owned();
        ChangelogEntry { text }
    }
}

impl fmt::Display for ChangelogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Merge commits since the latest tag, in the order the log returned them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changelog {
    entries: Vec<ChangelogEntry>,
}

impl Changelog {
    pub fn new(entries: Vec<ChangelogEntry>) -> Self {
        Changelog { entries }
    }

    /// Parse the raw output of the merge log query.
    ///
    /// Each record carries `<body>\x1f<summary>\x1e`. Multi-line bodies are
    /// folded onto one line so every merge commit yields exactly one entry;
    /// blank output yields an empty changelog.
    pub fn parse_log(raw: &str) -> Self {
        let entries = raw
            .split(RECORD_SEPARATOR)
            .map(str::trim)
            .filter(|record| !record.is_empty())
            .map(|record| {
                let (body, summary) = record
                    .split_once(FIELD_SEPARATOR)
                    .unwrap_or(("", record));
                let body = body.split_whitespace().collect::<Vec<_>>().join(" ");
                let summary = summary.trim();

                if body.is_empty() {
                    ChangelogEntry::from_merge_line(&format!("* {}", summary))
                } else {
                    ChangelogEntry::from_merge_line(&format!("* {} | {}", body, summary))
                }
            })
            .collect();

        Changelog { entries }
    }

    pub fn entries(&self) -> &[ChangelogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as a single block: the prefix, then one entry per line
    pub fn render(&self, prefix: &str) -> String {
        self.entries.iter().fold(prefix.to_string(), |mut acc, entry| {
            acc.push('\n');
            acc.push_str(&entry.text);
            acc
        })
    }
}
