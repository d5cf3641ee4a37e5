//! `keeper exec` command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::command::{parser, runner, validator};

#[derive(Args)]
pub struct ExecArgs {
    /// The ledger command to run, e.g. "todo read book"
    pub line: String,
}

pub fn run(file: Option<PathBuf>, args: ExecArgs) -> Result<()> {
    let (storage, mut tasks) = super::open_ledger(file)?;

    let input = parser::tokenize(&args.line);
    let command = validator::validate(&input, tasks.len())?;
    let response = runner::run(command, &mut tasks, &storage)?;
    println!("{}", response);

    Ok(())
}
