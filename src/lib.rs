//! git-browser library interface
//!
//! Derives the web URL of a git remote and opens it. The binary in main.rs
//! is a thin clap front end over these modules.

pub mod commands;
pub mod git;
pub mod remote;
