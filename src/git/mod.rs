mod repo;

pub use repo::GitCli;

use anyhow::Result;

/// The git queries the browse pipeline needs.
pub trait Vcs {
    /// Configured URL of the named remote.
    fn remote_url(&self, remote: &str) -> Result<String>;

    /// Abbreviated name of the checked-out branch.
    fn current_branch(&self) -> Result<String>;
}
