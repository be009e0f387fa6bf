use core::fmt;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// One executed (or proposed) jump: the moving peg's origin and landing cell.
/// The captured cell is always the midpoint and is derived, not stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jump {
    pub from: Coord2,
    pub to: Coord2,
}

impl Jump {
    pub const fn new(from: Coord2, to: Coord2) -> Self {
        Self { from, to }
    }

    /// Cell jumped over. `Some` only for a straight two-cell geometry.
    pub fn midpoint(self) -> Option<Coord2> {
        let (from_row, from_col) = self.from;
        let (to_row, to_col) = self.to;

        match (from_row.abs_diff(to_row), from_col.abs_diff(to_col)) {
            (0, 2) | (2, 0) => Some((
                ((from_row as u16 + to_row as u16) / 2) as Coord,
                ((from_col as u16 + to_col as u16) / 2) as Coord,
            )),
            _ => None,
        }
    }
}

fn col_letter(col: Coord) -> char {
    (b'A' + col) as char
}

/// Board notation, e.g. `C4 over E4`: columns A-G, rows 1-7, with the
/// landing cell after `over`.
impl fmt::Display for Jump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} over {}{}",
            col_letter(self.from.1),
            self.from.0 + 1,
            col_letter(self.to.1),
            self.to.0 + 1,
        )
    }
}

/// Overall verdict of a position. Derived from the board on demand, never
/// stored: undoing out of a dead end revives the game.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GameStatus {
    InProgress,
    Won,
    Stalemate,
}

impl GameStatus {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Stalemate)
    }
}

impl Board {
    /// Whether `jump` is legal on this board: endpoints in range, origin
    /// occupied, landing cell empty, straight two-cell geometry, and an
    /// occupied midpoint. Anything else is plain `false`, never an error.
    pub fn is_legal(&self, jump: Jump) -> bool {
        if self.validate_coords(jump.from).is_err() || self.validate_coords(jump.to).is_err() {
            return false;
        }
        let Some(mid) = jump.midpoint() else {
            return false;
        };

        self[jump.from] == CellState::Occupied
            && self[jump.to] == CellState::Empty
            && self[mid] == CellState::Occupied
    }

    /// Legal jumps starting at `from`, at most one per direction.
    pub fn legal_jumps_from(&self, from: Coord2) -> SmallVec<[Jump; 4]> {
        JumpTargets::new(from)
            .map(|to| Jump::new(from, to))
            .filter(|&jump| self.is_legal(jump))
            .collect()
    }

    /// Scans the position. One peg left is a win; otherwise the board is in
    /// progress exactly when some peg still has a legal jump. Stops at the
    /// first legal jump found.
    pub fn game_status(&self) -> GameStatus {
        if self.occupied_count() == 1 {
            return GameStatus::Won;
        }

        for ((row, col), &cell) in self.cells().indexed_iter() {
            if cell != CellState::Occupied {
                continue;
            }
            let from = (row as Coord, col as Coord);
            if JumpTargets::new(from).any(|to| self.is_legal(Jump::new(from, to))) {
                return GameStatus::InProgress;
            }
        }

        GameStatus::Stalemate
    }
}
