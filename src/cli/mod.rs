pub mod commands;
pub mod output;
pub mod progress;

use clap::{ArgAction, Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "yasp",
    version,
    about = "Snitch on print statements, TODOs and incomplete env files"
)]
pub struct Cli {
    /// Absolute path of the directory to scan, or a dot for the cwd
    #[arg(short = 'd', default_value = "")]
    pub dir: String,

    /// Ignore-like file listing names to skip, or a dot for the configured default
    #[arg(short = 'i', default_value = "")]
    pub ignore: String,

    /// Command to run
    #[arg(short = 'c', value_enum)]
    pub command: Command,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// List the directory tree
    Ls,
    /// List print statements in the code
    Print,
    /// List todo statements in the code
    Todo,
    /// Check env files for their expected variables
    Env,
    /// Run env, print and todo checks together
    Diag,
    /// List the remote issues of the project
    Issues,
    /// Report matching TODOs as remote issues
    Snitch,
}
