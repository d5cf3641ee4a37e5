//! Interactive prompt loop

use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

use crate::command::{parser, runner, validator, Command};
use crate::config::Config;
use crate::storage::Storage;
use crate::task::TaskList;

const GREETING: &str = "The ledger is open. What should it record?";

pub fn run(file: Option<PathBuf>) -> Result<()> {
    let config = Config::load()?;
    let path = config.resolve_data_path(file)?;
    let storage = Storage::new(path, config.storage.backup);

    // A damaged ledger is reported, never fatal. The session starts empty
    // and the damaged file is moved aside by the backup on the next flush.
    let mut tasks = match storage.load() {
        Ok(tasks) => tasks,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Starting with an empty ledger; the old file will be kept as a backup.");
            TaskList::new()
        }
    };

    println!("{}", GREETING);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = parser::tokenize(&line);
        debug!(keyword = %input.keyword, "command received");

        match validator::validate(&input, tasks.len()) {
            Ok(Command::Bye) => break,
            Ok(command) => match runner::run(command, &mut tasks, &storage) {
                Ok(response) => println!("{}\n", response),
                // A failed flush is reported; the session keeps going.
                Err(err) => println!("{:#}\n", err),
            },
            Err(err) => println!("{}\n", err),
        }
    }

    println!("{}", runner::FAREWELL);
    Ok(())
}
