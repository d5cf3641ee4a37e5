//! Command grammar and semantic validation

use chrono::NaiveDateTime;

use super::error::{CommandError, Result};
use super::parser::TokenizedInput;
use crate::task::parse_input_date;

/// Every command the ledger answers to.
pub const KNOWN_COMMANDS: &[&str] = &[
    "todo", "deadline", "event", "list", "mark", "unmark", "find", "delete", "help", "bye",
];

/// A fully validated command, ready to execute. Indices are 0-based; the
/// validator has already checked them against the list size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Todo { name: String },
    Deadline { name: String, by: NaiveDateTime },
    Event {
        name: String,
        from: NaiveDateTime,
        to: NaiveDateTime,
    },
    Mark { index: usize },
    Unmark { index: usize },
    Delete { index: usize },
    Find { term: String },
    Help { topic: Option<String> },
    Bye,
}

/// Check a tokenized line against the grammar and the current list size,
/// returning the typed command or the first violated rule.
pub fn validate(input: &TokenizedInput, list_len: usize) -> Result<Command> {
    let keyword = input.keyword.as_str();
    let details = &input.details;

    if keyword.is_empty() {
        return Err(CommandError::EmptyInput);
    }
    if !KNOWN_COMMANDS.contains(&keyword) {
        return Err(CommandError::UnknownCommand(keyword.to_string()));
    }

    // list and bare help are the only commands with no required argument.
    if keyword == "list" {
        if !details.is_empty() {
            return Err(CommandError::ListTakesNoArguments);
        }
        if list_len == 0 {
            return Err(CommandError::EmptyLedger {
                action: "list".to_string(),
            });
        }
        return Ok(Command::List);
    }
    if keyword == "bye" {
        return Ok(Command::Bye);
    }
    if keyword == "help" && details.is_empty() {
        return Ok(Command::Help { topic: None });
    }

    require_first_argument(keyword, details)?;

    match keyword {
        "find" => {
            if list_len == 0 {
                return Err(CommandError::FindInEmptyLedger);
            }
            Ok(Command::Find {
                term: details[0].clone(),
            })
        }
        "todo" => {
            if details.len() > 1 {
                return Err(CommandError::TodoWithTags);
            }
            Ok(Command::Todo {
                name: details[0].clone(),
            })
        }
        "deadline" => validate_deadline(details),
        "event" => validate_event(details),
        "mark" | "unmark" | "delete" => {
            let index = validate_index(keyword, details, list_len)?;
            Ok(match keyword {
                "mark" => Command::Mark { index },
                "unmark" => Command::Unmark { index },
                _ => Command::Delete { index },
            })
        }
        "help" => {
            let topic = details[0].trim();
            if !KNOWN_COMMANDS.contains(&topic) {
                return Err(CommandError::UnknownHelpTopic(topic.to_string()));
            }
            Ok(Command::Help {
                topic: Some(topic.to_string()),
            })
        }
        _ => Err(CommandError::UnknownCommand(keyword.to_string())),
    }
}

/// The first detail chunk must exist, be non-empty, and not be a bare tag.
/// The index commands get their own wording.
fn require_first_argument(keyword: &str, details: &[String]) -> Result<()> {
    if details.is_empty() || details[0].trim().is_empty() || details[0].starts_with('/') {
        if matches!(keyword, "mark" | "unmark" | "delete") {
            return Err(CommandError::MissingIndex {
                command: keyword.to_string(),
            });
        }
        return Err(CommandError::MissingName {
            command: keyword.to_string(),
        });
    }
    Ok(())
}

fn count_tags(details: &[String], tag: &str) -> usize {
    details.iter().filter(|d| d.trim().starts_with(tag)).count()
}

fn tag_index(details: &[String], tag: &str) -> Option<usize> {
    details.iter().position(|d| d.trim().starts_with(tag))
}

/// The value carried by a tag chunk: everything after the tag keyword.
fn tag_value<'a>(chunk: &'a str, tag: &str) -> &'a str {
    chunk.trim().strip_prefix(tag).unwrap_or("").trim()
}

fn parse_tag_date(chunk: &str, tag: &'static str) -> Result<NaiveDateTime> {
    let value = tag_value(chunk, tag);
    if value.is_empty() {
        return Err(CommandError::EmptyTagValue { tag });
    }
    parse_input_date(value).ok_or(CommandError::BadDateFormat)
}

fn validate_deadline(details: &[String]) -> Result<Command> {
    if count_tags(details, "/from") > 0 || count_tags(details, "/to") > 0 {
        return Err(CommandError::DeadlineWithEventTags);
    }
    match count_tags(details, "/by") {
        0 => return Err(CommandError::MissingByTag),
        1 => {}
        _ => return Err(CommandError::DuplicateByTag),
    }

    let Some(by_idx) = tag_index(details, "/by") else {
        return Err(CommandError::MissingByTag);
    };
    let by = parse_tag_date(&details[by_idx], "/by")?;

    Ok(Command::Deadline {
        name: details[0].clone(),
        by,
    })
}

fn validate_event(details: &[String]) -> Result<Command> {
    if count_tags(details, "/by") > 0 {
        return Err(CommandError::EventWithByTag);
    }
    if count_tags(details, "/from") != 1 || count_tags(details, "/to") != 1 {
        return Err(CommandError::EventTagCount);
    }

    let (Some(from_idx), Some(to_idx)) = (tag_index(details, "/from"), tag_index(details, "/to"))
    else {
        return Err(CommandError::EventTagCount);
    };
    if to_idx < from_idx {
        return Err(CommandError::EventTagOrder);
    }

    let from = parse_tag_date(&details[from_idx], "/from")?;
    let to = parse_tag_date(&details[to_idx], "/to")?;
    if from > to {
        return Err(CommandError::EventEndsBeforeStart);
    }
    if from == to {
        return Err(CommandError::EventZeroDuration);
    }

    Ok(Command::Event {
        name: details[0].clone(),
        from,
        to,
    })
}

fn validate_index(keyword: &str, details: &[String], list_len: usize) -> Result<usize> {
    if list_len == 0 {
        return Err(CommandError::EmptyLedger {
            action: keyword.to_string(),
        });
    }

    let raw = details[0].trim();
    let number: i64 = raw
        .parse()
        .map_err(|_| CommandError::NotANumber(raw.to_string()))?;
    if number < 1 || number as usize > list_len {
        return Err(CommandError::IndexOutOfRange { size: list_len });
    }

    Ok((number - 1) as usize)
}
