#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use history::*;
pub use moves::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod history;
mod moves;
mod types;

/// Cells along each side of the cross-shaped board.
pub const BOARD_SIDE: Coord = 7;

/// The centre cell, the only hole at the start of a standard game.
pub const CENTER: Coord2 = (3, 3);

/// Playable cells in the cross layout.
pub const PLAYABLE_CELLS: PegCount = 33;

/// Pegs on the board at the start of a standard game.
pub const STARTING_PEGS: PegCount = 32;

/// The four 2x2 corner blocks lie outside the cross and never hold a cell.
const fn in_corner_block(coords: Coord2) -> bool {
    let (row, col) = coords;
    (row < 2 || row > 4) && (col < 2 || col > 4)
}

/// 7x7 grid of cell states. Pure storage: rules live with [`Jump`] and the
/// scan methods, mutation goes through the engine and history restore paths.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<CellState>,
}

impl Board {
    /// Standard starting position: centre empty, 32 pegs around it.
    pub fn starting() -> Self {
        let side = BOARD_SIDE as usize;
        let cells = Array2::from_shape_fn((side, side), |(row, col)| {
            let coords = (row as Coord, col as Coord);
            if in_corner_block(coords) {
                CellState::OffBoard
            } else if coords == CENTER {
                CellState::Empty
            } else {
                CellState::Occupied
            }
        });
        Self { cells }
    }

    /// Builds a board from an explicit grid, for custom positions.
    ///
    /// The grid must be 7x7 and its `OffBoard` cells must be exactly the four
    /// corner blocks.
    pub fn from_cells(cells: Array2<CellState>) -> Result<Self> {
        let side = BOARD_SIDE as usize;
        if cells.dim() != (side, side) {
            return Err(GameError::InvalidBoardShape);
        }
        for ((row, col), &cell) in cells.indexed_iter() {
            let in_corner = in_corner_block((row as Coord, col as Coord));
            if (cell == CellState::OffBoard) != in_corner {
                return Err(GameError::InvalidBoardShape);
            }
        }
        Ok(Self { cells })
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < BOARD_SIDE && coords.1 < BOARD_SIDE {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> CellState {
        self.cells[nd(coords)]
    }

    pub fn occupied_count(&self) -> PegCount {
        self.cells
            .iter()
            .filter(|&&cell| cell == CellState::Occupied)
            .count()
            .try_into()
            .unwrap()
    }

    pub(crate) fn set(&mut self, coords: Coord2, state: CellState) {
        self.cells[nd(coords)] = state;
    }

    pub(crate) fn cells(&self) -> &Array2<CellState> {
        &self.cells
    }
}

impl Index<Coord2> for Board {
    type Output = CellState;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[nd(coords)]
    }
}

/// Outcome of a selection request.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SelectOutcome {
    NoChange,
    Changed,
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Outcome of a bulk history operation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HistoryOutcome {
    NoChange,
    Restored,
}

impl HistoryOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Restored => true,
        }
    }
}

/// Outcome of a move attempt.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    Rejected,
    Moved,
    Won,
    Stalemate,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            Rejected => false,
            Moved => true,
            Won => true,
            Stalemate => true,
        }
    }

    pub const fn ends_game(self) -> bool {
        matches!(self, Self::Won | Self::Stalemate)
    }
}

impl From<GameStatus> for MoveOutcome {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::InProgress => Self::Moved,
            GameStatus::Won => Self::Won,
            GameStatus::Stalemate => Self::Stalemate,
        }
    }
}
