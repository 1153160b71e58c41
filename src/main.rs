use anyhow::Result;
use clap::Parser;
use git_browser::commands::browse::{self, BrowseOptions};
use git_browser::commands::open::SystemOpener;
use git_browser::git::GitCli;

#[derive(Parser)]
#[command(name = "git-browser")]
#[command(about = "Open the web page of a git remote in your browser")]
#[command(
    long_about = "This utility is meant to be called as a git subcommand, `git browser`.\n\
                  It builds the correct URL for your code host (GitHub, GitLab, Bitbucket)\n\
                  and opens it in your default browser."
)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Print the URL to stdout, don't open a browser
    #[arg(short, long)]
    show: bool,

    /// Point the URL at the current branch
    #[arg(short, long)]
    branch: bool,

    /// Remote to open (defaults to origin)
    #[arg(
        short = 'r',
        long = "remote",
        value_name = "REMOTE",
        conflicts_with = "remote_name"
    )]
    remote_flag: Option<String>,

    /// Remote to open, same as --remote
    #[arg(value_name = "REMOTE")]
    remote_name: Option<String>,

    /// Print the current version and exit
    #[arg(short, long)]
    version: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let opts = BrowseOptions::new(cli.remote_flag.or(cli.remote_name), cli.show, cli.branch);

    browse::run(
        &GitCli::new(),
        &SystemOpener::new(),
        &opts,
        &mut std::io::stdout().lock(),
    )
}
