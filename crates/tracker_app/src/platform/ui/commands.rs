//! Line commands typed on stdin.

use tracker_core::{Msg, SortKey, ViewMode};

pub const HELP: &str = "\
Commands:
  sort <title|rating|watched|order>  change the sort order
  search <text>                      filter the list (no text clears)
  view <tiles|list>                  switch the layout
  select <n>                         open row n of the current list
  close                              close the detail panel
  help                               show this text
  quit                               exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Maps straight onto a state message.
    Send(Msg),
    /// 1-based row of the list as currently displayed.
    Select(usize),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command {0:?}; type `help` for a list")]
    Unknown(String),
    #[error("`{command}` expects one of: {expected}")]
    BadArgument {
        command: &'static str,
        expected: &'static str,
    },
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "sort" => Command::Send(Msg::SortChanged(parse_sort_key(rest)?)),
        "search" => Command::Send(Msg::SearchChanged(rest.to_string())),
        "view" => Command::Send(Msg::ViewModeChanged(parse_view_mode(rest)?)),
        "select" => match rest.parse::<usize>() {
            Ok(row) if row > 0 => Command::Select(row),
            _ => {
                return Err(CommandError::BadArgument {
                    command: "select",
                    expected: "a row number from 1",
                })
            }
        },
        "close" => Command::Send(Msg::SelectionClosed),
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };
    Ok(Some(command))
}

fn parse_sort_key(arg: &str) -> Result<SortKey, CommandError> {
    match arg.to_lowercase().as_str() {
        "title" => Ok(SortKey::Title),
        "rating" => Ok(SortKey::OverallRating),
        "watched" | "status" => Ok(SortKey::Watched),
        "order" => Ok(SortKey::WatchOrder),
        _ => Err(CommandError::BadArgument {
            command: "sort",
            expected: "title, rating, watched, order",
        }),
    }
}

fn parse_view_mode(arg: &str) -> Result<ViewMode, CommandError> {
    match arg.to_lowercase().as_str() {
        "tiles" | "grid" => Ok(ViewMode::Tiles),
        "list" => Ok(ViewMode::List),
        _ => Err(CommandError::BadArgument {
            command: "view",
            expected: "tiles, list",
        }),
    }
}
