use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Unknown token symbol {0:?}")]
    UnknownToken(char),
    #[error("Board contains an empty cell")]
    EmptyCell,
    #[error("Board already contains a match")]
    BoardHasMatches,
    #[error("Token script needs at least one token")]
    EmptyTokenScript,
}

pub type Result<T> = core::result::Result<T, GameError>;
