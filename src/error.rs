use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not match the cross layout")]
    InvalidBoardShape,
    #[error("No move to undo")]
    NothingToUndo,
    #[error("No move to redo")]
    NothingToRedo,
}

pub type Result<T> = core::result::Result<T, GameError>;
