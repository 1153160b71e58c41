use anyhow::{Context, Result};
use url::{ParseError, Url};

type BranchFormatter = fn(&str, &str) -> String;

/// Code hosts that have a known branch view, keyed by exact hostname.
const BRANCH_FORMATS: &[(&str, BranchFormatter)] = &[
    ("github.com", github_branch),
    ("gitlab.com", gitlab_branch),
    ("bitbucket.org", bitbucket_branch),
];

fn github_branch(url: &str, branch: &str) -> String {
    format!("{}/tree/{}", url, branch)
}

fn gitlab_branch(url: &str, branch: &str) -> String {
    format!("{}/-tree/{}", url, branch)
}

fn bitbucket_branch(url: &str, branch: &str) -> String {
    format!("{}/src/{}/", url, branch)
}

/// Turn a clone URL into the URL of the repository's web page.
///
/// Handles the two shapes git hosts hand out:
///
/// ```text
/// git@github.com:owner/repo.git     -> https://github.com/owner/repo
/// https://github.com/owner/repo.git -> https://github.com/owner/repo
/// ```
///
/// Anything else is returned as-is (minus a `.git` suffix).
pub fn browser_url(remote_url: &str) -> String {
    let url = remote_url.strip_suffix(".git").unwrap_or(remote_url);

    if url.starts_with("http") {
        return url.to_string();
    }

    if let Some(stripped) = url.strip_prefix("git@") {
        // Only the host:path separator, later colons belong to the path
        return format!("https://{}", stripped.replacen(':', "/", 1));
    }

    url.to_string()
}

/// Lowercased host of a browser URL, with `:port` when the URL spells out a
/// non-default port. `None` for remotes without a host, such as local paths.
pub fn code_host(url: &str) -> Result<Option<String>> {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(ParseError::RelativeUrlWithoutBase) => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to parse remote URL '{}'", url))
        }
    };

    let Some(host) = parsed.host_str() else {
        return Ok(None);
    };

    Ok(Some(match parsed.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    }))
}

/// Point a browser URL at `branch` for hosts with a known branch view.
/// Unknown hosts, and remotes with no host at all, get the URL back untouched.
pub fn branch_url(url: &str, branch: &str) -> Result<String> {
    let Some(host) = code_host(url)? else {
        return Ok(url.to_string());
    };

    let Some((_, format_branch)) = BRANCH_FORMATS.iter().find(|(h, _)| *h == host) else {
        return Ok(url.to_string());
    };

    Ok(format_branch(url.trim_end_matches('/'), branch))
}
