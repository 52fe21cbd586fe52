use std::str::FromStr;

use sweeper_core::Coord2;
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    ChordReveal(Coord2),
    ChordFlag(Coord2),
    Open(Coord2),
    Restart,
    Json,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command {0:?}, type h for help")]
    Unknown(String),
    #[error("Command {0:?} expects ROW COL")]
    MissingCoords(String),
    #[error("Invalid coordinate {0:?}")]
    InvalidCoord(String),
    #[error("Unexpected trailing input {0:?}")]
    Trailing(String),
}

pub const HELP: &str = "\
commands (coordinates are ROW COL, zero-based):
  r ROW COL   reveal a cell
  f ROW COL   toggle a flag
  c ROW COL   chord reveal around a number
  a ROW COL   chord flag around a number
  o ROW COL   reveal, or chord if already revealed
  n           restart with a new minefield
  j           print the board as JSON
  h           show this help
  q           quit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;

        let command = match name {
            "n" | "new" => Command::Restart,
            "j" | "json" => Command::Json,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => {
                let make: fn(Coord2) -> Command = match name {
                    "r" | "reveal" => Command::Reveal,
                    "f" | "flag" => Command::Flag,
                    "c" | "chord" => Command::ChordReveal,
                    "a" | "auto" => Command::ChordFlag,
                    "o" | "open" => Command::Open,
                    _ => return Err(CommandError::Unknown(name.to_string())),
                };
                let (Some(row), Some(col)) = (words.next(), words.next()) else {
                    return Err(CommandError::MissingCoords(name.to_string()));
                };
                make((parse_coord(row)?, parse_coord(col)?))
            }
        };

        match words.next() {
            Some(extra) => Err(CommandError::Trailing(extra.to_string())),
            None => Ok(command),
        }
    }
}

fn parse_coord(word: &str) -> Result<u8, CommandError> {
    word.parse()
        .map_err(|_| CommandError::InvalidCoord(word.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_coordinate_commands() {
        assert_eq!("r 3 4".parse(), Ok(Command::Reveal((3, 4))));
        assert_eq!("flag 0 0".parse(), Ok(Command::Flag((0, 0))));
        assert_eq!("  c 1   2 ".parse(), Ok(Command::ChordReveal((1, 2))));
        assert_eq!("a 7 9".parse(), Ok(Command::ChordFlag((7, 9))));
        assert_eq!("o 2 2".parse(), Ok(Command::Open((2, 2))));
    }

    #[test]
    fn parses_bare_commands() {
        assert_eq!("n".parse(), Ok(Command::Restart));
        assert_eq!("json".parse(), Ok(Command::Json));
        assert_eq!("?".parse(), Ok(Command::Help));
        assert_eq!("q".parse(), Ok(Command::Quit));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "x 1 1".parse::<Command>(),
            Err(CommandError::Unknown("x".to_string()))
        );
        assert_eq!(
            "r 1".parse::<Command>(),
            Err(CommandError::MissingCoords("r".to_string()))
        );
        assert_eq!(
            "r -1 2".parse::<Command>(),
            Err(CommandError::InvalidCoord("-1".to_string()))
        );
        assert_eq!(
            "r 300 2".parse::<Command>(),
            Err(CommandError::InvalidCoord("300".to_string()))
        );
        assert_eq!(
            "q now".parse::<Command>(),
            Err(CommandError::Trailing("now".to_string()))
        );
    }
}
