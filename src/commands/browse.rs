use crate::commands::open::Opener;
use crate::git::Vcs;
use crate::remote;
use anyhow::Result;
use colored::Colorize;
use std::io::Write;

/// Remote used when none is named on the command line
pub const DEFAULT_REMOTE: &str = "origin";

/// What a single invocation asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseOptions {
    pub remote: String,
    pub show: bool,
    pub branch: bool,
}

impl BrowseOptions {
    pub fn new(remote: Option<String>, show: bool, branch: bool) -> Self {
        Self {
            remote: remote.unwrap_or_else(|| DEFAULT_REMOTE.to_string()),
            show,
            branch,
        }
    }
}

/// Web URL for the remote (and branch) described by `opts`.
pub fn target_url(vcs: &impl Vcs, opts: &BrowseOptions) -> Result<String> {
    let remote_url = vcs.remote_url(&opts.remote)?;
    let url = remote::browser_url(&remote_url);

    if !opts.branch {
        return Ok(url);
    }

    let branch = vcs.current_branch()?;
    remote::branch_url(&url, &branch)
}

/// Print the remote's web URL to `out`, or open it in the browser
pub fn run(
    vcs: &impl Vcs,
    opener: &impl Opener,
    opts: &BrowseOptions,
    out: &mut impl Write,
) -> Result<()> {
    let url = target_url(vcs, opts)?;

    if opts.show {
        writeln!(out, "{}", url)?;
        return Ok(());
    }

    eprintln!("Opening {} in browser...", url.cyan());
    opener.open(&url)
}
