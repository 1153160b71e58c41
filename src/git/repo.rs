use super::Vcs;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Answers git queries by running the `git` binary.
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    /// Run git in the current directory
    pub fn new() -> Self {
        Self::at(".")
    }

    /// Run git in `workdir`
    pub fn at(workdir: impl AsRef<Path>) -> Self {
        Self {
            workdir: workdir.as_ref().to_path_buf(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .with_context(|| format!("Failed to run `git {}`", args.join(" ")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("`git {}` failed: {}", args.join(" "), stderr.trim());
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl Vcs for GitCli {
    fn remote_url(&self, remote: &str) -> Result<String> {
        let url = self.run(&["remote", "get-url", remote]).with_context(|| {
            format!(
                "No git remote '{}' found.\n\n\
                 To list the configured remotes, run:\n\n  \
                 git remote -v",
                remote
            )
        })?;

        if url.is_empty() {
            anyhow::bail!(
                "Git remote '{}' has no URL configured.\n\n\
                 To fix this, set the remote URL:\n\n  \
                 git remote set-url {} <url>",
                remote,
                remote
            );
        }

        Ok(url)
    }

    fn current_branch(&self) -> Result<String> {
        self.run(&["rev-parse", "--abbrev-ref", "HEAD"])
            .context("Failed getting current branch")
    }
}
