//! Keeper - command-line task ledger

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use keeper::cli::{self, Cli, Commands};
use keeper::repl;

fn main() -> Result<()> {
    if std::env::var("KEEPER_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("keeper=debug")
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        // Completion works without touching config or the task file.
        Some(Commands::Completion { shell }) => {
            generate(shell, &mut Cli::command(), "keeper", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Exec(args)) => cli::exec::run(cli.file, args),
        Some(Commands::List(args)) => cli::list::run(cli.file, args),
        None => repl::run(cli.file),
    }
}
