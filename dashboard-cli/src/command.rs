//! Interactive commands.

use std::str::FromStr;

use crate::error::CliError;

pub const HELP: &str = "\
commands:
  n              next page
  p              previous page
  g N            go to page N
  s N            show N rows per page
  o KEY          sort by column KEY (again to reverse)
  / QUERY        search (empty clears the query)
  f FIELD=VALUE  filter FIELD by VALUE (empty VALUE removes it)
  c              clear search and filters
  v N            view row N of this page
  d N            delete row N of this page
  h              help
  q              quit";

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    Go(usize),
    PageSize(usize),
    Sort(String),
    Search(String),
    Filter { field: String, value: String },
    Clear,
    View(usize),
    Delete(usize),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CliError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let invalid = || CliError::InvalidCommand(line.to_string());

        if let Some(query) = line.strip_prefix('/') {
            return Ok(Command::Search(query.trim().to_string()));
        }

        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };
        let number = || rest.parse::<usize>().map_err(|_| invalid());

        match head {
            "n" | "next" => Ok(Command::Next),
            "p" | "prev" => Ok(Command::Prev),
            "g" | "go" => Ok(Command::Go(number()?)),
            "s" | "size" => Ok(Command::PageSize(number()?)),
            "o" | "sort" if !rest.is_empty() => Ok(Command::Sort(rest.to_string())),
            "f" | "filter" => {
                let (field, value) = parse_filter(rest)?;
                Ok(Command::Filter { field, value })
            }
            "c" | "clear" => Ok(Command::Clear),
            "v" | "view" => Ok(Command::View(number()?)),
            "d" | "delete" => Ok(Command::Delete(number()?)),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => Err(invalid()),
        }
    }
}

/// Splits `FIELD=VALUE`. The value may be empty.
pub fn parse_filter(arg: &str) -> Result<(String, String), CliError> {
    match arg.split_once('=') {
        Some((field, value)) if !field.trim().is_empty() => {
            Ok((field.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(CliError::InvalidFilter(arg.to_string())),
    }
}
