//! End-to-end pipeline tests: tokenize, validate, run, persist, reload.

use anyhow::Result;
use keeper::command::{parser, runner, validator, CommandError};
use keeper::storage::Storage;
use keeper::task::TaskList;
use tempfile::tempdir;

fn drive(line: &str, tasks: &mut TaskList, storage: &Storage) -> Result<String> {
    let input = parser::tokenize(line);
    let command = validator::validate(&input, tasks.len())?;
    runner::run(command, tasks, storage)
}

fn try_validate(line: &str, tasks: &TaskList) -> std::result::Result<(), CommandError> {
    validator::validate(&parser::tokenize(line), tasks.len()).map(|_| ())
}

#[test]
fn test_session_roundtrip() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("tasks.txt");
    let storage = Storage::new(path, true);
    let mut tasks = storage.load()?;

    drive("todo read book", &mut tasks, &storage)?;
    drive("deadline return book /by 2026-10-31 23:59", &mut tasks, &storage)?;
    drive(
        "event book fair /from 2026-01-29 13:00 /to 2026-01-30 13:00",
        &mut tasks,
        &storage,
    )?;
    drive("mark 2", &mut tasks, &storage)?;

    let listing = drive("list", &mut tasks, &storage)?;
    assert_eq!(
        listing,
        "1.[T][ ] read book\n\
         2.[D][X] return book (by: Oct 31 2026 23:59)\n\
         3.[E][ ] book fair (from: Jan 29 2026 13:00 to: Jan 30 2026 13:00)"
    );

    // A fresh load from disk sees exactly the same ledger.
    let reloaded = storage.load()?;
    assert_eq!(reloaded, tasks);
    Ok(())
}

#[test]
fn test_mark_unmark_restores_display() -> Result<()> {
    let dir = tempdir()?;
    let storage = Storage::new(dir.path().join("tasks.txt"), false);
    let mut tasks = TaskList::new();

    drive("todo water plants", &mut tasks, &storage)?;
    let before = tasks.get(0).unwrap().to_string();

    drive("mark 1", &mut tasks, &storage)?;
    drive("unmark 1", &mut tasks, &storage)?;
    assert_eq!(tasks.get(0).unwrap().to_string(), before);
    Ok(())
}

#[test]
fn test_delete_renumbers_following_entries() -> Result<()> {
    let dir = tempdir()?;
    let storage = Storage::new(dir.path().join("tasks.txt"), false);
    let mut tasks = TaskList::new();

    drive("todo one", &mut tasks, &storage)?;
    drive("todo two", &mut tasks, &storage)?;
    drive("todo three", &mut tasks, &storage)?;

    drive("delete 2", &mut tasks, &storage)?;
    let listing = drive("list", &mut tasks, &storage)?;
    assert_eq!(listing, "1.[T][ ] one\n2.[T][ ] three");
    Ok(())
}

#[test]
fn test_find_matches_are_the_named_subsequence() -> Result<()> {
    let dir = tempdir()?;
    let storage = Storage::new(dir.path().join("tasks.txt"), false);
    let mut tasks = TaskList::new();

    drive("todo read book", &mut tasks, &storage)?;
    drive("todo sweep floor", &mut tasks, &storage)?;
    drive("deadline return Book /by 2026-10-31 23:59", &mut tasks, &storage)?;

    let found = drive("find book", &mut tasks, &storage)?;
    assert!(found.starts_with("2 entries match:"));
    assert!(found.contains("1.[T][ ] read book"));
    assert!(found.contains("2.[D][ ] return Book"));
    assert!(!found.contains("sweep floor"));
    Ok(())
}

#[test]
fn test_validation_failures_leave_ledger_untouched() -> Result<()> {
    let dir = tempdir()?;
    let storage = Storage::new(dir.path().join("tasks.txt"), false);
    let mut tasks = TaskList::new();

    drive("todo read book", &mut tasks, &storage)?;

    for line in [
        "todo",
        "nonsense",
        "deadline code 2026-01-27 23:59",
        "event fair /from 2026-01-02 10:00 /to 2026-01-01 10:00",
        "mark 5",
        "delete zero",
        "list please",
    ] {
        assert!(try_validate(line, &tasks).is_err(), "accepted: {}", line);
    }

    assert_eq!(tasks.len(), 1);
    assert_eq!(storage.load()?, tasks);
    Ok(())
}

#[test]
fn test_flush_happens_after_every_mutation() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("tasks.txt");
    let storage = Storage::new(path.clone(), false);
    let mut tasks = TaskList::new();

    drive("todo read book", &mut tasks, &storage)?;
    assert!(std::fs::read_to_string(&path)?.contains("T |   | read book"));

    drive("mark 1", &mut tasks, &storage)?;
    assert!(std::fs::read_to_string(&path)?.contains("T | X | read book"));

    drive("delete 1", &mut tasks, &storage)?;
    assert_eq!(std::fs::read_to_string(&path)?, "");
    Ok(())
}
