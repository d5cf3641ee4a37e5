//! User-input error type

use thiserror::Error;

/// Everything a user can get wrong at the prompt. Each variant names one
/// violated rule and carries the themed message plus a usage hint; the
/// caller prints it and re-prompts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("An empty line records nothing.\nhint: type a command, or 'help' for the full list")]
    EmptyInput,

    #[error("'{0}' is not in the ledger's vocabulary.\nhint: 'help' lists every command it answers to")]
    UnknownCommand(String),

    #[error("'list' needs no extra words to show the ledger.\nhint: type 'list' by itself")]
    ListTakesNoArguments,

    #[error("The ledger is empty; there is nothing to {action}.\nhint: add a task first with 'todo', 'deadline', or 'event'")]
    EmptyLedger { action: String },

    #[error("You are searching an empty ledger.\nhint: add a task before trying to find one")]
    FindInEmptyLedger,

    #[error("A task with no name is no task at all.\nhint: try: {command} <name> ...")]
    MissingName { command: String },

    #[error("You are pointing at nothing; give the entry's number.\nhint: usage: {command} <task number>")]
    MissingIndex { command: String },

    #[error("A plain todo carries no tags.\nhint: todo tasks do not use /by, /from, or /to")]
    TodoWithTags,

    #[error("A deadline has a single end, not a schedule.\nhint: remove /from and /to; use only /by")]
    DeadlineWithEventTags,

    #[error("A deadline without '/by' never falls due.\nhint: a deadline requires a '/by <time>' marker")]
    MissingByTag,

    #[error("One deadline, one ending.\nhint: keep exactly one '/by' tag")]
    DuplicateByTag,

    #[error("Events keep schedules, not deadlines.\nhint: replace '/by' with '/from' and '/to'")]
    EventWithByTag,

    #[error("An event needs exactly one start and one end.\nhint: provide exactly one '/from' and one '/to' tag")]
    EventTagCount,

    #[error("An event cannot end before it is announced to begin.\nhint: place the '/from' tag before the '/to' tag")]
    EventTagOrder,

    #[error("The '{tag}' tag arrived with no time attached.\nhint: provide the timing right after the {tag} tag")]
    EmptyTagValue { tag: &'static str },

    #[error("That is not a time the ledger can file.\nhint: use yyyy-MM-dd HH:mm, e.g. 2026-10-31 23:59")]
    BadDateFormat,

    #[error("This event ends before it begins.\nhint: the /from time must be before the /to time")]
    EventEndsBeforeStart,

    #[error("An event with no duration is a moment, not an entry.\nhint: the /from and /to times cannot be equal")]
    EventZeroDuration,

    #[error("'{0}' is not a number.\nhint: provide a whole-number task index")]
    NotANumber(String),

    #[error("No entry holds that number.\nhint: enter a number between 1 and {size}")]
    IndexOutOfRange { size: usize },

    #[error("There is no page for '{0}' in the ledger's manual.\nhint: plain 'help' lists every command")]
    UnknownHelpTopic(String),
}

pub type Result<T> = std::result::Result<T, CommandError>;
