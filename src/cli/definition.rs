//! Top-level CLI definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::exec::ExecArgs;
use super::list::ListArgs;

#[derive(Parser)]
#[command(name = "keeper", version, about = "Command-line task ledger")]
pub struct Cli {
    /// Path to the task file (overrides the configured location)
    #[arg(long, global = true, env = "KEEPER_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a single ledger command and exit
    Exec(ExecArgs),

    /// List tasks without entering the prompt
    List(ListArgs),

    /// Generate shell completion scripts
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}
