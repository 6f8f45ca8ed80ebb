use crate::domain::tag::Tag;
use regex::Regex;
use std::sync::OnceLock;

fn scp_style() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:[^@/]+@)?([^:/]+):(.+)$").expect("scp remote pattern is valid")
    })
}

fn url_style() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:ssh|git|https?)://(?:[^@/]+@)?([^:/]+)(?::\d+)?/(.+)$")
            .expect("url remote pattern is valid")
    })
}

/// Turn a remote URL into the HTTPS address a browser can open.
///
/// `git@github.com:org/repo.git` and `ssh://git@github.com/org/repo.git`
/// both become `https://github.com/org/repo`. Remotes that are neither
/// SSH nor HTTP(S) are returned with only the `.git` suffix removed.
pub fn browse_url(remote: &str) -> String {
    let remote = remote.trim();

    let (host, path) = if let Some(caps) = url_style().captures(remote) {
        (caps[1].to_string(), caps[2].to_string())
    } else if let Some(caps) = scp_style().captures(remote) {
        (caps[1].to_string(), caps[2].to_string())
    } else {
        return strip_git_suffix(remote).to_string();
    };

    let path = strip_git_suffix(path.trim_matches('/'));
    format!("https://{}/{}", host, path)
}

/// Page on the hosting platform where the release for `tag` can be drafted
pub fn release_page_url(remote: &str, tag: &Tag) -> String {
    format!("{}/releases/new?tag={}", browse_url(remote), tag)
}

fn strip_git_suffix(path: &str) -> &str {
    path.strip_suffix(".git").unwrap_or(path)
}
