use thiserror::Error;

/// Reasons a saved payload cannot be restored into a game.
#[derive(Error, Debug)]
pub enum StateError {
    #[error("{what} has {found} entries, expected {expected}")]
    WrongLength {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("{0} cells selected, at most 2 allowed")]
    TooManySelected(usize),
    #[error("coordinate ({row}, {col}) is outside the grid")]
    CoordOutOfRange { row: usize, col: usize },
    #[error("winning pair names the same cell twice")]
    DuplicateWinningCell,
    #[error("malformed save data: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, StateError>;
