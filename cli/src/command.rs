use std::str::FromStr;

use clearfield_core::{Coord, Position};
use thiserror::Error;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Position),
    New,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("empty input")]
    Empty,
    #[error("expected `ROW COL`, got {0:?}")]
    BadPosition(String),
    #[error("unknown command {0:?}, type `help` for a list")]
    Unknown(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        if line.is_empty() {
            return Err(ParseCommandError::Empty);
        }

        match line.to_ascii_lowercase().as_str() {
            "new" | "n" | "reset" => return Ok(Command::New),
            "help" | "h" | "?" => return Ok(Command::Help),
            "quit" | "q" | "exit" => return Ok(Command::Quit),
            _ => {}
        }

        if !line.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(ParseCommandError::Unknown(line.to_owned()));
        }

        let parts: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        let [row, col] = parts[..] else {
            return Err(ParseCommandError::BadPosition(line.to_owned()));
        };
        let parse = |part: &str| {
            part.parse::<Coord>()
                .map_err(|_| ParseCommandError::BadPosition(line.to_owned()))
        };
        Ok(Command::Reveal((parse(row)?, parse(col)?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positions() {
        assert_eq!("3 4".parse::<Command>(), Ok(Command::Reveal((3, 4))));
        assert_eq!("  3,4 ".parse::<Command>(), Ok(Command::Reveal((3, 4))));
        assert_eq!("10, 0".parse::<Command>(), Ok(Command::Reveal((10, 0))));
    }

    #[test]
    fn parses_keywords() {
        assert_eq!("new".parse::<Command>(), Ok(Command::New));
        assert_eq!("RESET".parse::<Command>(), Ok(Command::New));
        assert_eq!("?".parse::<Command>(), Ok(Command::Help));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!("".parse::<Command>(), Err(ParseCommandError::Empty));
        assert_eq!(
            "1 2 3".parse::<Command>(),
            Err(ParseCommandError::BadPosition("1 2 3".into()))
        );
        assert_eq!(
            "1 -2".parse::<Command>(),
            Err(ParseCommandError::BadPosition("1 -2".into()))
        );
        assert_eq!(
            "7".parse::<Command>(),
            Err(ParseCommandError::BadPosition("7".into()))
        );
        assert_eq!(
            "flag 1 2".parse::<Command>(),
            Err(ParseCommandError::Unknown("flag 1 2".into()))
        );
    }
}
