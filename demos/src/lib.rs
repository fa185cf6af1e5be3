//! Command handling shared by the catch-the-cat terminal demo.
//!
//! The catcher types one command per line:
//!
//! - `x y` blocks the cell at `(x, y)`
//! - `hint` prints the route the cat is planning
//! - `q` or `quit` ends the game

use std::fmt;

use hexcat_core::Point;
use hexcat_paths::{BoardOracle, find_escape_path};

/// One line of catcher input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Block(Point),
    Hint,
    Quit,
}

/// Parse a line of catcher input.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        [] => Err(CommandError::Empty),
        ["q" | "quit"] => Ok(Command::Quit),
        ["hint"] => Ok(Command::Hint),
        [x, y] => {
            let x = x
                .parse::<i32>()
                .map_err(|_| CommandError::BadCoordinate(x.to_string()))?;
            let y = y
                .parse::<i32>()
                .map_err(|_| CommandError::BadCoordinate(y.to_string()))?;
            Ok(Command::Block(Point::new(x, y)))
        }
        _ => Err(CommandError::Unknown(line.trim().to_string())),
    }
}

/// Describe the cat's current escape plan in one line.
pub fn describe_route<B: BoardOracle>(board: &B) -> String {
    let path = find_escape_path(board);
    if path.is_empty() {
        return "the cat sees no way out".to_string();
    }
    let steps: Vec<String> = path.iter().map(Point::to_string).collect();
    let plural = if path.len() == 1 { "" } else { "s" };
    format!(
        "the cat plans {} step{plural}: {}",
        path.len(),
        steps.join(" -> ")
    )
}

/// Errors from [`parse_command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    BadCoordinate(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("enter a cell as `x y`, `hint` or `q`"),
            Self::Unknown(s) => write!(f, "unknown command \u{201c}{s}\u{201d}"),
            Self::BadCoordinate(s) => write!(f, "\u{201c}{s}\u{201d} is not a coordinate"),
        }
    }
}

impl std::error::Error for CommandError {}
