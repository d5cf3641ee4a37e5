//! Ledger storage - flat text file persistence

pub mod error;

pub use error::{Result, StorageError};

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::task::{parse_ledger_date, Task, TaskList};

/// Reads and writes the task file. One task per line:
///
/// ```text
/// T | X | read book
/// D |   | return book | Oct 31 2026 23:59
/// E |   | book fair | Jan 29 2026 13:00 - Jan 30 2026 13:00
/// ```
pub struct Storage {
    path: PathBuf,
    backup: bool,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>, backup: bool) -> Self {
        Self {
            path: path.into(),
            backup,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<TaskList> {
        if !self.path.exists() {
            return Ok(TaskList::new());
        }

        let content = fs::read_to_string(&self.path)?;

        // Line shape: kind tag, completion flag, then name (and dates).
        let line_re = Regex::new(r"^(?P<kind>[TDE]) \| (?P<done>[X ]) \| (?P<rest>.+)$").unwrap();

        let mut tasks = Vec::new();
        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let task = parse_line(&line_re, line).ok_or_else(|| StorageError::Corrupt {
                line: i + 1,
                content: line.to_string(),
            })?;
            tasks.push(task);
        }

        Ok(TaskList::from_tasks(tasks))
    }

    pub fn save(&self, tasks: &TaskList) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        if self.backup && self.path.exists() {
            let backup_path = self.path.with_extension("txt.bak");
            if let Err(e) = fs::copy(&self.path, &backup_path) {
                warn!("Failed to create backup: {}", e);
            }
        }

        let mut content: String = tasks
            .iter()
            .map(Task::to_line)
            .collect::<Vec<_>>()
            .join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(&self.path, content)?;
        Ok(())
    }
}

fn parse_line(line_re: &Regex, line: &str) -> Option<Task> {
    let caps = line_re.captures(line)?;
    let done = &caps["done"] == "X";
    let rest = &caps["rest"];

    let mut task = match &caps["kind"] {
        "T" => Task::todo(rest),
        "D" => {
            let (name, date) = rest.rsplit_once(" | ")?;
            Task::deadline(name, parse_ledger_date(date)?)
        }
        "E" => {
            let (name, dates) = rest.rsplit_once(" | ")?;
            let (from, to) = dates.split_once(" - ")?;
            Task::event(name, parse_ledger_date(from)?, parse_ledger_date(to)?)
        }
        _ => return None,
    };

    if done {
        task.mark();
    }
    Some(task)
}
