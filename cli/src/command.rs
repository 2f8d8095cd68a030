use std::str::FromStr;

use prismatch_core::{Coord, Position};
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Select(Position),
    Swap(Position, Position),
    Hint,
    Reset,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command {0:?}, try `help`")]
    Unknown(String),
    #[error("expected {expected} coordinates, got {found}")]
    WrongArity { expected: usize, found: usize },
    #[error("invalid coordinate {0:?}")]
    InvalidCoord(String),
}

pub const HELP: &str = "\
commands:
  <row> <col>                 select a cell, a second adjacent pick swaps
  swap <row> <col> <row> <col>  swap two adjacent cells directly
  hint                        show a swap that makes a match
  reset                       start a new game
  help                        show this text
  quit                        leave";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let first = words.next().ok_or(CommandError::Empty)?;
        let rest: Vec<&str> = words.collect();

        let command = match first.to_ascii_lowercase().as_str() {
            "hint" | "h" => Self::Hint,
            "reset" | "new" => Self::Reset,
            "help" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            "select" | "s" => {
                let [row, col] = coords::<2>(&rest)?;
                Self::Select(Position::new(row, col))
            }
            "swap" => {
                let [r1, c1, r2, c2] = coords::<4>(&rest)?;
                Self::Swap(Position::new(r1, c1), Position::new(r2, c2))
            }
            _ if first.parse::<Coord>().is_ok() => {
                let mut all = vec![first];
                all.extend(rest);
                let [row, col] = coords::<2>(&all)?;
                Self::Select(Position::new(row, col))
            }
            _ => return Err(CommandError::Unknown(first.to_owned())),
        };
        Ok(command)
    }
}

fn coords<const N: usize>(words: &[&str]) -> Result<[Coord; N], CommandError> {
    if words.len() != N {
        return Err(CommandError::WrongArity {
            expected: N,
            found: words.len(),
        });
    }
    let mut out = [0; N];
    for (slot, word) in out.iter_mut().zip(words) {
        *slot = word
            .parse()
            .map_err(|_| CommandError::InvalidCoord((*word).to_owned()))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_coordinates_select() {
        assert_eq!(
            "3 4".parse::<Command>(),
            Ok(Command::Select(Position::new(3, 4)))
        );
        assert_eq!(
            "select 0 7".parse::<Command>(),
            Ok(Command::Select(Position::new(0, 7)))
        );
    }

    #[test]
    fn swap_takes_two_positions() {
        assert_eq!(
            "swap 1 2 1 3".parse::<Command>(),
            Ok(Command::Swap(Position::new(1, 2), Position::new(1, 3)))
        );
        assert_eq!(
            "swap 1 2".parse::<Command>(),
            Err(CommandError::WrongArity {
                expected: 4,
                found: 2
            })
        );
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!("HINT".parse::<Command>(), Ok(Command::Hint));
        assert_eq!("Reset".parse::<Command>(), Ok(Command::Reset));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn bad_input_is_reported() {
        assert_eq!("   ".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "jump".parse::<Command>(),
            Err(CommandError::Unknown("jump".to_owned()))
        );
        assert_eq!(
            "3 x".parse::<Command>(),
            Err(CommandError::InvalidCoord("x".to_owned()))
        );
        assert_eq!(
            "-1 2".parse::<Command>(),
            Err(CommandError::Unknown("-1".to_owned()))
        );
    }
}
