use serde::{Deserialize, Serialize};

/// State of a single board position.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellState {
    OffBoard,
    Empty,
    Occupied,
}

impl CellState {
    pub const fn is_playable(self) -> bool {
        matches!(self, Self::Empty | Self::Occupied)
    }
}
