//! `keeper list` command implementation

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::task::{Task, TaskKind, LEDGER_DATE_FORMAT};

#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct TaskJson {
    kind: &'static str,
    name: String,
    done: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<String>,
}

impl TaskJson {
    fn from_task(task: &Task) -> Self {
        let (kind, by, from, to) = match &task.kind {
            TaskKind::Todo => ("todo", None, None, None),
            TaskKind::Deadline { by } => (
                "deadline",
                Some(by.format(LEDGER_DATE_FORMAT).to_string()),
                None,
                None,
            ),
            TaskKind::Event { from, to } => (
                "event",
                None,
                Some(from.format(LEDGER_DATE_FORMAT).to_string()),
                Some(to.format(LEDGER_DATE_FORMAT).to_string()),
            ),
        };
        Self {
            kind,
            name: task.name.clone(),
            done: task.done,
            by,
            from,
            to,
        }
    }
}

pub fn run(file: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let (_, tasks) = super::open_ledger(file)?;

    if tasks.is_empty() {
        println!("The ledger is empty.");
        return Ok(());
    }

    if args.json {
        let entries: Vec<TaskJson> = tasks.iter().map(TaskJson::from_task).collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for (i, task) in tasks.iter().enumerate() {
        println!("{}.{}", i + 1, task);
    }
    println!();
    println!("Total: {} entries", tasks.len());

    Ok(())
}
