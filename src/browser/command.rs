use std::path::PathBuf;

use crate::filter::FilterField;

pub const DEFAULT_LIST_SIZE: usize = 10;

pub const USAGE: &str = "\
Commands:
  title <text>           filter by title (no text clears the filter)
  year <text>            filter by release year
  location <text>        filter by filming location
  pick <field> <n>       use the n-th suggestion of a field
  reset                  clear every filter
  list [n]               list the first n visible movies (default 10)
  show <n>               show the details of the n-th visible movie
  map [file]             write the map of the visible movies
  help                   show this message
  quit                   leave";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetFilter(FilterField, String),
    Pick(FilterField, usize),
    Reset,
    List(usize),
    Show(usize),
    Map(Option<PathBuf>),
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, String> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        if let Ok(field) = name.parse::<FilterField>() {
            return Ok(Command::SetFilter(field, rest.to_string()));
        }

        match name.to_ascii_lowercase().as_str() {
            "pick" => {
                let mut args = rest.split_whitespace();
                let field = args
                    .next()
                    .ok_or_else(|| "Usage: pick <field> <n>".to_string())?
                    .parse::<FilterField>()?;
                let position = parse_position(args.next())?;
                Ok(Command::Pick(field, position))
            }
            "reset" => Ok(Command::Reset),
            "list" => match rest {
                "" => Ok(Command::List(DEFAULT_LIST_SIZE)),
                n => n
                    .parse::<usize>()
                    .map(Command::List)
                    .map_err(|_| format!("Not a number: {}", n)),
            },
            "show" => Ok(Command::Show(parse_position(Some(rest))?)),
            "map" => Ok(Command::Map(match rest {
                "" => None,
                file => Some(PathBuf::from(file)),
            })),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "" => Err("Empty command, type 'help' for the list of commands".to_string()),
            other => Err(format!(
                "Unknown command '{}', type 'help' for the list of commands",
                other
            )),
        }
    }
}

// Positions are 1-based, as displayed.
fn parse_position(arg: Option<&str>) -> Result<usize, String> {
    match arg.map(str::parse::<usize>) {
        Some(Ok(position)) if position > 0 => Ok(position),
        Some(_) => Err("Positions start at 1".to_string()),
        None => Err("Missing position".to_string()),
    }
}
