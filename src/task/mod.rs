//! Task model and the in-memory task list

pub mod list;
pub mod model;

pub use list::TaskList;
pub use model::{
    parse_input_date, parse_ledger_date, Task, TaskKind, INPUT_DATE_FORMAT, LEDGER_DATE_FORMAT,
};
