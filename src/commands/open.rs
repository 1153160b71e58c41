use anyhow::Result;
use std::process::Command;

/// Hands a URL to something that can display it.
pub trait Opener {
    fn open(&self, url: &str) -> Result<()>;
}

/// Opens URLs with the platform's default browser.
pub struct SystemOpener {
    os: &'static str,
}

impl SystemOpener {
    pub fn new() -> Self {
        Self::for_os(std::env::consts::OS)
    }

    pub fn for_os(os: &'static str) -> Self {
        Self { os }
    }
}

impl Default for SystemOpener {
    fn default() -> Self {
        Self::new()
    }
}

/// Program and leading arguments that open a URL on `os`.
pub fn opener_command(os: &str) -> Option<(&'static str, &'static [&'static str])> {
    match os {
        "linux" => Some(("xdg-open", &[])),
        "macos" => Some(("open", &[])),
        "windows" => Some(("cmd", &["/c", "start"])),
        _ => None,
    }
}

impl Opener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        let Some((program, args)) = opener_command(self.os) else {
            anyhow::bail!("Unable to start a browser session on {}", self.os);
        };

        // Fire and forget: spawn errors and exit status are ignored
        Command::new(program).args(args).arg(url).spawn().ok();

        Ok(())
    }
}
