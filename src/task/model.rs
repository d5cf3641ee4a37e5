//! Task data model

use chrono::NaiveDateTime;
use std::fmt;

/// Format accepted on the command line, e.g. `2026-10-31 23:59`.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format used for display and in the ledger file, e.g. `Oct 31 2026 23:59`.
pub const LEDGER_DATE_FORMAT: &str = "%b %d %Y %H:%M";

/// What kind of task this is, with the kind-specific timing fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    /// Plain task with no timing.
    Todo,
    /// Task that must be finished by a point in time.
    Deadline { by: NaiveDateTime },
    /// Task that spans a start and an end.
    Event {
        from: NaiveDateTime,
        to: NaiveDateTime,
    },
}

impl TaskKind {
    /// Single-letter tag used in the ledger file.
    pub fn tag(&self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline { .. } => 'D',
            Self::Event { .. } => 'E',
        }
    }
}

/// A single ledger entry.
///
/// Invariant: `name` is non-empty and does not start with `/`. The
/// validator enforces this before a `Task` is ever constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub done: bool,
    pub kind: TaskKind,
}

impl Task {
    pub fn todo(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            done: false,
            kind: TaskKind::Todo,
        }
    }

    pub fn deadline(name: impl Into<String>, by: NaiveDateTime) -> Self {
        Self {
            name: name.into(),
            done: false,
            kind: TaskKind::Deadline { by },
        }
    }

    pub fn event(name: impl Into<String>, from: NaiveDateTime, to: NaiveDateTime) -> Self {
        Self {
            name: name.into(),
            done: false,
            kind: TaskKind::Event { from, to },
        }
    }

    /// Set the completion flag. Idempotent.
    pub fn mark(&mut self) {
        self.done = true;
    }

    /// Clear the completion flag. Idempotent.
    pub fn unmark(&mut self) {
        self.done = false;
    }

    /// `X` when done, a space otherwise.
    pub fn status_char(&self) -> char {
        if self.done {
            'X'
        } else {
            ' '
        }
    }

    /// Case-insensitive substring match against the task name.
    pub fn name_contains(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase())
    }

    /// Format as one line of the ledger file.
    pub fn to_line(&self) -> String {
        let head = format!("{} | {} | {}", self.kind.tag(), self.status_char(), self.name);
        match &self.kind {
            TaskKind::Todo => head,
            TaskKind::Deadline { by } => {
                format!("{} | {}", head, by.format(LEDGER_DATE_FORMAT))
            }
            TaskKind::Event { from, to } => format!(
                "{} | {} - {}",
                head,
                from.format(LEDGER_DATE_FORMAT),
                to.format(LEDGER_DATE_FORMAT)
            ),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.kind.tag(),
            self.status_char(),
            self.name
        )?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => {
                write!(f, " (by: {})", by.format(LEDGER_DATE_FORMAT))
            }
            TaskKind::Event { from, to } => write!(
                f,
                " (from: {} to: {})",
                from.format(LEDGER_DATE_FORMAT),
                to.format(LEDGER_DATE_FORMAT)
            ),
        }
    }
}

/// Parse a date in the command-line input format.
pub fn parse_input_date(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), INPUT_DATE_FORMAT).ok()
}

/// Parse a date in the ledger file format.
pub fn parse_ledger_date(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), LEDGER_DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDateTime {
        parse_input_date(s).unwrap()
    }

    #[test]
    fn test_todo_display() {
        let mut task = Task::todo("read book");
        assert_eq!(task.to_string(), "[T][ ] read book");

        task.mark();
        assert_eq!(task.to_string(), "[T][X] read book");
    }

    #[test]
    fn test_deadline_display() {
        let task = Task::deadline("return book", date("2026-10-31 23:59"));
        assert_eq!(task.to_string(), "[D][ ] return book (by: Oct 31 2026 23:59)");
    }

    #[test]
    fn test_event_display() {
        let task = Task::event(
            "project meeting",
            date("2026-01-29 13:00"),
            date("2026-01-29 15:00"),
        );
        assert_eq!(
            task.to_string(),
            "[E][ ] project meeting (from: Jan 29 2026 13:00 to: Jan 29 2026 15:00)"
        );
    }

    #[test]
    fn test_mark_unmark_idempotent() {
        let mut task = Task::todo("laundry");
        let original = task.to_string();

        task.mark();
        task.mark();
        assert!(task.done);

        task.unmark();
        task.unmark();
        assert!(!task.done);
        assert_eq!(task.to_string(), original);
    }

    #[test]
    fn test_to_line_formats() {
        let mut todo = Task::todo("homework");
        todo.mark();
        assert_eq!(todo.to_line(), "T | X | homework");

        let deadline = Task::deadline("household chores", date("2026-01-28 13:00"));
        assert_eq!(deadline.to_line(), "D |   | household chores | Jan 28 2026 13:00");

        let event = Task::event("Sports Day", date("2026-01-29 13:00"), date("2026-01-30 13:00"));
        assert_eq!(
            event.to_line(),
            "E |   | Sports Day | Jan 29 2026 13:00 - Jan 30 2026 13:00"
        );
    }

    #[test]
    fn test_name_contains_is_case_insensitive() {
        let task = Task::todo("Read Rust Book");
        assert!(task.name_contains("rust"));
        assert!(task.name_contains("RUST"));
        assert!(!task.name_contains("python"));
    }

    #[test]
    fn test_ledger_date_roundtrip() {
        let by = date("2026-10-31 23:59");
        let formatted = by.format(LEDGER_DATE_FORMAT).to_string();
        assert_eq!(parse_ledger_date(&formatted), Some(by));
    }
}
