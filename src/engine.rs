use serde::{Deserialize, Serialize};

use crate::*;

/// One game session: the board, the reversible history, and the transient
/// peg selection. Every externally driven operation lives here; the host
/// only renders state and forwards events.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    history: History,
    selected: Option<Coord2>,
}

impl GameEngine {
    /// Session on the standard starting position.
    pub fn new() -> Self {
        Self::with_board(Board::starting())
    }

    /// Session on a custom position.
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            history: History::default(),
            selected: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, coords: Coord2) -> CellState {
        self.board.cell_at(coords)
    }

    pub fn selected_peg(&self) -> Option<Coord2> {
        self.selected
    }

    /// Jumps applied so far, oldest first.
    pub fn move_log(&self) -> &[Jump] {
        self.history.moves()
    }

    pub fn pegs_remaining(&self) -> PegCount {
        self.board.occupied_count()
    }

    pub fn status(&self) -> GameStatus {
        self.board.game_status()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Remembers `coords` as the selected peg. Cells without a peg leave the
    /// selection untouched; how to react to that is the caller's choice.
    pub fn select_peg(&mut self, coords: Coord2) -> Result<SelectOutcome> {
        let coords = self.board.validate_coords(coords)?;

        Ok(match self.board[coords] {
            CellState::Occupied => {
                self.selected = Some(coords);
                SelectOutcome::Changed
            }
            _ => SelectOutcome::NoChange,
        })
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Validates and applies `jump`. An illegal jump, out-of-range endpoints
    /// included, is reported as [`MoveOutcome::Rejected`] and changes
    /// nothing. A legal jump snapshots the pre-move board, discards any redo
    /// branch, mutates the three cells, and reports the resulting verdict.
    pub fn attempt_move(&mut self, jump: Jump) -> MoveOutcome {
        let Some(mid) = jump.midpoint() else {
            return MoveOutcome::Rejected;
        };
        if !self.board.is_legal(jump) {
            return MoveOutcome::Rejected;
        }

        self.history.record(self.board.clone(), jump);
        self.board.set(jump.from, CellState::Empty);
        self.board.set(mid, CellState::Empty);
        self.board.set(jump.to, CellState::Occupied);
        self.selected = None;

        log::debug!(
            "applied move {}, {} pegs left",
            jump,
            self.board.occupied_count()
        );
        self.board.game_status().into()
    }

    pub fn undo(&mut self) -> Result<()> {
        self.history.undo(&mut self.board)?;
        self.selected = None;
        log::debug!("undid move, {} applied", self.history.depth());
        Ok(())
    }

    pub fn redo(&mut self) -> Result<()> {
        self.history.redo(&mut self.board)?;
        self.selected = None;
        log::debug!("redid move, {} applied", self.history.depth());
        Ok(())
    }

    /// Undoes every applied move; no-op when there is nothing to undo.
    pub fn undo_all(&mut self) -> HistoryOutcome {
        let outcome = self.history.rewind(&mut self.board);
        if outcome.has_update() {
            self.selected = None;
            log::debug!("rewound to start, {} redoable", self.history.redo_depth());
        }
        outcome
    }

    /// Reapplies every undone move; no-op when there is nothing to redo.
    pub fn redo_all(&mut self) -> HistoryOutcome {
        let outcome = self.history.replay(&mut self.board);
        if outcome.has_update() {
            self.selected = None;
            log::debug!("replayed history, {} applied", self.history.depth());
        }
        outcome
    }

    /// Undoes up to `steps` moves, reporting how many actually ran.
    pub fn undo_steps(&mut self, steps: usize) -> usize {
        let mut applied = 0;
        while applied < steps && self.undo().is_ok() {
            applied += 1;
        }
        applied
    }

    /// Reapplies up to `steps` undone moves, reporting how many actually ran.
    pub fn redo_steps(&mut self, steps: usize) -> usize {
        let mut applied = 0;
        while applied < steps && self.redo().is_ok() {
            applied += 1;
        }
        applied
    }

    /// Resets to the standard starting position and forgets all history.
    pub fn new_game(&mut self) {
        self.board = Board::starting();
        self.history.clear();
        self.selected = None;
        log::debug!("new game");
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn opening_jump_updates_cells_count_and_log() {
        let mut engine = GameEngine::new();

        let outcome = engine.attempt_move(Jump::new((3, 1), (3, 3)));

        assert_eq!(outcome, MoveOutcome::Moved);
        assert_eq!(engine.cell_at((3, 1)), CellState::Empty);
        assert_eq!(engine.cell_at((3, 2)), CellState::Empty);
        assert_eq!(engine.cell_at((3, 3)), CellState::Occupied);
        assert_eq!(engine.pegs_remaining(), STARTING_PEGS - 1);
        assert_eq!(engine.move_log().len(), 1);
        assert_eq!(engine.move_log()[0].to_string(), "B4 over D4");
        assert_eq!(engine.status(), GameStatus::InProgress);
    }

    #[test]
    fn rejected_move_leaves_no_trace() {
        let mut engine = GameEngine::new();
        let before = engine.clone();

        assert_eq!(
            engine.attempt_move(Jump::new((3, 2), (3, 3))),
            MoveOutcome::Rejected
        );
        assert_eq!(
            engine.attempt_move(Jump::new((3, 5), (3, 7))),
            MoveOutcome::Rejected
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn successful_move_clears_selection_and_redo_branch() {
        let mut engine = GameEngine::new();
        engine.attempt_move(Jump::new((3, 1), (3, 3)));
        engine.undo().unwrap();
        assert!(engine.can_redo());

        engine.select_peg((5, 3)).unwrap();
        engine.attempt_move(Jump::new((5, 3), (3, 3)));

        assert_eq!(engine.selected_peg(), None);
        assert!(!engine.can_redo());
        assert_eq!(engine.redo(), Err(GameError::NothingToRedo));
    }

    #[test]
    fn stepping_a_fresh_session_errors() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.undo(), Err(GameError::NothingToUndo));
        assert_eq!(engine.redo(), Err(GameError::NothingToRedo));
        assert_eq!(engine.undo_all(), HistoryOutcome::NoChange);
        assert_eq!(engine.redo_all(), HistoryOutcome::NoChange);
    }

    #[test]
    fn select_peg_stores_only_occupied_cells() {
        let mut engine = GameEngine::new();

        let outcome = engine.select_peg((3, 1)).unwrap();
        assert!(outcome.has_update());
        assert_eq!(engine.selected_peg(), Some((3, 1)));

        assert_eq!(engine.select_peg((3, 3)), Ok(SelectOutcome::NoChange));
        assert_eq!(engine.selected_peg(), Some((3, 1)));

        assert_eq!(engine.select_peg((9, 0)), Err(GameError::InvalidCoords));

        engine.clear_selection();
        assert_eq!(engine.selected_peg(), None);
    }

    #[test]
    fn undo_clears_selection() {
        let mut engine = GameEngine::new();
        engine.attempt_move(Jump::new((3, 1), (3, 3)));
        engine.select_peg((3, 3)).unwrap();

        engine.undo().unwrap();

        assert_eq!(engine.selected_peg(), None);
        assert_eq!(engine.board(), &Board::starting());
    }

    #[test]
    fn undo_steps_stops_at_history_start() {
        let mut engine = GameEngine::new();
        engine.attempt_move(Jump::new((3, 1), (3, 3)));
        engine.attempt_move(Jump::new((3, 4), (3, 2)));

        assert_eq!(engine.undo_steps(5), 2);
        assert_eq!(engine.board(), &Board::starting());
        assert_eq!(engine.redo_steps(1), 1);
        assert_eq!(engine.move_log().len(), 1);
    }

    #[test]
    fn new_game_resets_everything() {
        let mut engine = GameEngine::new();
        engine.attempt_move(Jump::new((3, 1), (3, 3)));
        engine.undo().unwrap();
        engine.select_peg((3, 1)).unwrap();

        engine.new_game();

        assert_eq!(engine, GameEngine::new());
        assert!(!engine.can_undo());
        assert!(!engine.can_redo());
    }
}
