//! Common test utilities for git-browser integration tests
//!
//! - `TestRepo` - a real temporary git repository
//! - `OutputAssertions` - assertion helpers for command output

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Get path to compiled binary (built by cargo test)
pub fn git_browser_bin() -> &'static str {
    env!("CARGO_BIN_EXE_git-browser")
}

/// Run git-browser in `dir`
pub fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(git_browser_bin())
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to execute git-browser")
}

/// A temporary git repository on branch `main` with one commit
pub struct TestRepo {
    dir: TempDir,
}

#[allow(dead_code)]
impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let repo = Self { dir };

        repo.git(&["init", "-b", "main"]);
        repo.git(&["config", "user.email", "test@test.com"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["commit", "--allow-empty", "-m", "Initial commit"]);

        repo
    }

    /// Create a test repository with `url` configured as `name`
    pub fn with_remote(name: &str, url: &str) -> Self {
        let repo = Self::new();
        repo.add_remote(name, url);
        repo
    }

    pub fn add_remote(&self, name: &str, url: &str) {
        let output = self.git(&["remote", "add", name, url]);
        assert!(output.status.success(), "Failed to add remote {}", name);
    }

    pub fn checkout_new(&self, branch: &str) {
        let output = self.git(&["checkout", "-b", branch]);
        assert!(output.status.success(), "Failed to create branch {}", branch);
    }

    /// Get the path to the test repository
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Run git-browser in this repository
    pub fn run(&self, args: &[&str]) -> Output {
        run_in(self.dir.path(), args)
    }

    /// Run a raw git command
    pub fn git(&self, args: &[&str]) -> Output {
        Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("Failed to run git command")
    }

    /// Get stdout as string from output
    pub fn stdout(output: &Output) -> String {
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Get stderr as string from output
    pub fn stderr(output: &Output) -> String {
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}

pub trait OutputAssertions {
    fn assert_success(&self) -> &Self;
    fn assert_failure(&self) -> &Self;
    fn assert_stdout_eq(&self, s: &str) -> &Self;
    fn assert_stderr_contains(&self, s: &str) -> &Self;
}

#[allow(dead_code)]
impl OutputAssertions for Output {
    fn assert_success(&self) -> &Self {
        assert!(
            self.status.success(),
            "Expected success but got failure.\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&self.stdout),
            String::from_utf8_lossy(&self.stderr)
        );
        self
    }

    fn assert_failure(&self) -> &Self {
        assert!(
            !self.status.success(),
            "Expected failure but got success.\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&self.stdout),
            String::from_utf8_lossy(&self.stderr)
        );
        self
    }

    fn assert_stdout_eq(&self, s: &str) -> &Self {
        let stdout = String::from_utf8_lossy(&self.stdout);
        assert_eq!(stdout, s, "stderr: {}", String::from_utf8_lossy(&self.stderr));
        self
    }

    fn assert_stderr_contains(&self, s: &str) -> &Self {
        let stderr = String::from_utf8_lossy(&self.stderr);
        assert!(
            stderr.contains(s),
            "Expected stderr to contain '{}', got:\n{}",
            s,
            stderr
        );
        self
    }
}
