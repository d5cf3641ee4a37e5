//! Command execution against the task list

use anyhow::{bail, Context, Result};
use tracing::debug;

use super::validator::Command;
use crate::storage::Storage;
use crate::task::{Task, TaskList};

pub const FAREWELL: &str = "The ledger closes. Until next time.";

const TODO_HELP: &str = "Command: todo <name>\n  Record a plain task.";
const DEADLINE_HELP: &str = "Command: deadline <name> /by <time>\n  <time> uses the yyyy-MM-dd HH:mm format.\n  Record a task with a due time.";
const EVENT_HELP: &str = "Command: event <name> /from <time> /to <time>\n  Record a task that spans a start and an end.";
const LIST_HELP: &str = "Command: list\n  Show every entry, in order, numbered.";
const MARK_HELP: &str = "Command: mark <n>\n  Strike entry <n> through as done.";
const UNMARK_HELP: &str = "Command: unmark <n>\n  Reopen entry <n>.";
const DELETE_HELP: &str = "Command: delete <n>\n  Erase entry <n> from the ledger.";
const FIND_HELP: &str = "Command: find <term>\n  List entries whose name contains <term>.";
const HELP_HELP: &str = "Command: help [command]\n  Show this catalogue, or one command's usage.";
const BYE_HELP: &str = "Command: bye\n  Close the ledger.";

/// Execute a validated command. Every mutation is flushed to storage
/// before the response is returned, so the file never lags the list.
pub fn run(command: Command, tasks: &mut TaskList, storage: &Storage) -> Result<String> {
    match command {
        Command::List => Ok(render_list(tasks.iter())),
        Command::Todo { name } => add_task(Task::todo(name), "Recorded.", tasks, storage),
        Command::Deadline { name, by } => add_task(
            Task::deadline(name, by),
            "A deadline. The clock is already running.",
            tasks,
            storage,
        ),
        Command::Event { name, from, to } => {
            add_task(Task::event(name, from, to), "Scheduled.", tasks, storage)
        }
        Command::Mark { index } => {
            let Some(task) = tasks.get_mut(index) else {
                bail!("task index {} out of range", index + 1);
            };
            task.mark();
            let response = format!("Done. Struck through and settled.\n  {}", task);
            flush(tasks, storage)?;
            Ok(response)
        }
        Command::Unmark { index } => {
            let Some(task) = tasks.get_mut(index) else {
                bail!("task index {} out of range", index + 1);
            };
            task.unmark();
            let response = format!("Reopened. Back into the ledger it goes.\n  {}", task);
            flush(tasks, storage)?;
            Ok(response)
        }
        Command::Delete { index } => {
            if index >= tasks.len() {
                bail!("task index {} out of range", index + 1);
            }
            let removed = tasks.remove(index);
            flush(tasks, storage)?;
            let tail = match tasks.len() {
                0 => "The ledger is empty again.".to_string(),
                1 => "1 entry remains.".to_string(),
                n => format!("{} entries remain.", n),
            };
            Ok(format!("Erased.\n  {}\n{}", removed, tail))
        }
        Command::Find { term } => Ok(render_find(tasks, &term)),
        Command::Help { topic } => Ok(render_help(topic.as_deref())),
        Command::Bye => Ok(FAREWELL.to_string()),
    }
}

fn add_task(
    task: Task,
    headline: &str,
    tasks: &mut TaskList,
    storage: &Storage,
) -> Result<String> {
    let entry = task.to_string();
    tasks.add(task);
    flush(tasks, storage)?;
    Ok(format!(
        "{}\n  {}\nThe ledger holds {} now.",
        headline,
        entry,
        count_phrase(tasks.len())
    ))
}

fn flush(tasks: &TaskList, storage: &Storage) -> Result<()> {
    debug!(entries = tasks.len(), "flushing ledger");
    storage
        .save(tasks)
        .with_context(|| format!("failed to write {}", storage.path().display()))
}

fn count_phrase(count: usize) -> String {
    if count == 1 {
        "1 entry".to_string()
    } else {
        format!("{} entries", count)
    }
}

fn render_list<'a>(tasks: impl Iterator<Item = &'a Task>) -> String {
    tasks
        .enumerate()
        .map(|(i, task)| format!("{}.{}", i + 1, task))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_find(tasks: &TaskList, term: &str) -> String {
    let matches = tasks.find(term);
    match matches.len() {
        0 => format!("Nothing in the ledger matches '{}'.", term),
        1 => format!(
            "One entry matches:\n{}",
            render_list(matches.into_iter())
        ),
        n => format!(
            "{} entries match:\n{}",
            n,
            render_list(matches.into_iter())
        ),
    }
}

fn render_help(topic: Option<&str>) -> String {
    match topic {
        Some("todo") => TODO_HELP.to_string(),
        Some("deadline") => DEADLINE_HELP.to_string(),
        Some("event") => EVENT_HELP.to_string(),
        Some("list") => LIST_HELP.to_string(),
        Some("mark") => MARK_HELP.to_string(),
        Some("unmark") => UNMARK_HELP.to_string(),
        Some("delete") => DELETE_HELP.to_string(),
        Some("find") => FIND_HELP.to_string(),
        Some("help") => HELP_HELP.to_string(),
        Some("bye") => BYE_HELP.to_string(),
        // Bare `help`, or a topic the validator would have rejected.
        _ => [
            LIST_HELP,
            TODO_HELP,
            DEADLINE_HELP,
            EVENT_HELP,
            MARK_HELP,
            UNMARK_HELP,
            DELETE_HELP,
            FIND_HELP,
            HELP_HELP,
            BYE_HELP,
        ]
        .join("\n\n"),
    }
}
