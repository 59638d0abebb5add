use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{AppError, Result};
use crate::models::RepoCoordinate;

static REPO_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"github\.com/([^/\s?#]+)/([^/\s?#]+)").expect("repository URL pattern is valid")
});

/// Extracts `(owner, repo)` from a URL like `https://github.com/owner/repo`.
///
/// Anything after the repo segment (sub-paths, query, fragment) and a
/// trailing `.git` are ignored.
pub fn parse_repo_url(url: &str) -> Result<RepoCoordinate> {
    let captures = REPO_URL
        .captures(url)
        .ok_or_else(|| AppError::MalformedUrl(url.to_string()))?;

    let owner = captures[1].to_string();
    let name = captures[2].trim_end_matches(".git").to_string();
    if name.is_empty() {
        return Err(AppError::MalformedUrl(url.to_string()));
    }

    Ok(RepoCoordinate { owner, name })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinate(url: &str) -> (String, String) {
        let repo = parse_repo_url(url).unwrap();
        (repo.owner, repo.name)
    }

    #[test]
    fn parses_common_forms() {
        let expected = ("rust-lang".to_string(), "cargo".to_string());
        assert_eq!(coordinate("https://github.com/rust-lang/cargo"), expected);
        assert_eq!(coordinate("github.com/rust-lang/cargo"), expected);
        assert_eq!(coordinate("https://www.github.com/rust-lang/cargo.git"), expected);
        assert_eq!(coordinate("https://github.com/rust-lang/cargo/tree/master/src"), expected);
        assert_eq!(coordinate("https://github.com/rust-lang/cargo?tab=readme"), expected);
    }

    #[test]
    fn rejects_urls_without_owner_and_repo() {
        for url in [
            "",
            "not a url",
            "https://gitlab.com/owner/repo",
            "https://github.com/owner",
            "https://github.com/owner/",
            "https://github.com/owner/.git",
        ] {
            let err = parse_repo_url(url).unwrap_err();
            assert_eq!(err.kind(), "malformed_url", "url: {url:?}");
        }
    }
}
