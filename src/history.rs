use alloc::vec::Vec;
use core::mem;
use serde::{Deserialize, Serialize};

use crate::*;

/// Reversible move history: board snapshots paired one-to-one with the jumps
/// that left them. `undo_stack[i]` is the board as it stood before
/// `move_log[i]` was applied; the redo pair mirrors that for undone moves.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    undo_stack: Vec<Board>,
    redo_stack: Vec<Board>,
    move_log: Vec<Jump>,
    redo_move_log: Vec<Jump>,
}

impl History {
    /// Records an applied move: stores the pre-move snapshot and the jump,
    /// and discards the redo branch.
    pub fn record(&mut self, snapshot: Board, jump: Jump) {
        self.undo_stack.push(snapshot);
        self.move_log.push(jump);
        self.redo_stack.clear();
        self.redo_move_log.clear();
        debug_assert_eq!(self.undo_stack.len(), self.move_log.len());
    }

    /// Steps `board` back to the newest snapshot.
    pub fn undo(&mut self, board: &mut Board) -> Result<()> {
        let snapshot = self.undo_stack.pop().ok_or(GameError::NothingToUndo)?;
        self.redo_stack.push(mem::replace(board, snapshot));
        if let Some(jump) = self.move_log.pop() {
            self.redo_move_log.push(jump);
        }
        debug_assert_eq!(self.redo_stack.len(), self.redo_move_log.len());
        Ok(())
    }

    /// Steps `board` forward to the newest undone snapshot.
    pub fn redo(&mut self, board: &mut Board) -> Result<()> {
        let snapshot = self.redo_stack.pop().ok_or(GameError::NothingToRedo)?;
        self.undo_stack.push(mem::replace(board, snapshot));
        if let Some(jump) = self.redo_move_log.pop() {
            self.move_log.push(jump);
        }
        debug_assert_eq!(self.undo_stack.len(), self.move_log.len());
        Ok(())
    }

    /// Undoes every applied move, leaving the full forward chain on the redo
    /// side with the first move poppable first.
    pub fn rewind(&mut self, board: &mut Board) -> HistoryOutcome {
        if self.undo_stack.is_empty() {
            return HistoryOutcome::NoChange;
        }
        while self.undo(board).is_ok() {}
        HistoryOutcome::Restored
    }

    /// Reapplies every undone move.
    pub fn replay(&mut self, board: &mut Board) -> HistoryOutcome {
        if self.redo_stack.is_empty() {
            return HistoryOutcome::NoChange;
        }
        while self.redo(board).is_ok() {}
        HistoryOutcome::Restored
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.move_log.clear();
        self.redo_move_log.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Jumps currently applied, oldest first.
    pub fn moves(&self) -> &[Jump] {
        &self.move_log
    }

    pub fn depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
}
