use thiserror::Error;

use crate::Coord2;

/// Reasons a board configuration is rejected before anything is built.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board must have at least one row")]
    NoRows,
    #[error("Board must have at least one column")]
    NoColumns,
    #[error("Board dimensions exceed the coordinate range")]
    TooLarge,
    #[error("Board must have at least one mine")]
    NoMines,
    #[error("Too many mines, {mines} requested but at most {max} fit")]
    TooManyMines { mines: i64, max: i64 },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Coordinates {0:?} are outside the board")]
    OutOfBounds(Coord2),
}

impl GameError {
    pub const fn is_config(self) -> bool {
        matches!(self, Self::Config(_))
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
