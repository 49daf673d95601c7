use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Position is outside the board")]
    InvalidPosition,
    #[error("Board needs at least one row and one column")]
    InvalidDimensions,
    #[error("Mine probability must be within 0 and 1")]
    InvalidProbability,
    #[error("Mine layout does not match the board size")]
    InvalidLayout,
}

pub type Result<T> = core::result::Result<T, GameError>;
