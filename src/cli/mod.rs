//! CLI command implementations

pub mod definition;
pub mod exec;
pub mod list;

pub use definition::{Cli, Commands};

use anyhow::Result;
use std::path::PathBuf;

use crate::config::Config;
use crate::storage::Storage;
use crate::task::TaskList;

/// Open storage at the resolved location and load the ledger. One-shot
/// commands fail loudly on a damaged file; only the interactive prompt
/// degrades to an empty session.
pub fn open_ledger(file: Option<PathBuf>) -> Result<(Storage, TaskList)> {
    let config = Config::load()?;
    let path = config.resolve_data_path(file)?;
    let storage = Storage::new(path, config.storage.backup);
    let tasks = storage.load()?;
    Ok((storage, tasks))
}
