//! Real (non-hypothetical) play on a single board.

use crate::board::{GameOutcome, Mark};
use crate::boards::tic_tac_toe::BoardState;
use crate::boards::win_detector::WinDetector;
use crate::error::{Error, Result};
use tracing::{debug, info};

/// A game in progress, X moving first.
///
/// Every placement is followed by a last-move win check, so the status moves
/// from `InProgress` to `Won` or `Draw` and stays there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: BoardState,
    to_move: Mark,
    status: GameOutcome,
    moves: Vec<usize>,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: BoardState::new(),
            to_move: Mark::X,
            status: GameOutcome::InProgress,
            moves: Vec::new(),
        }
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn status(&self) -> GameOutcome {
        self.status
    }

    /// The mark that plays next. Meaningless once the game is over.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Indices played so far, in order.
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    /// Plays `index` for the side to move and returns the new status.
    ///
    /// A rejected placement leaves the game untouched.
    pub fn play(&mut self, index: usize) -> Result<GameOutcome> {
        if self.status.is_terminal() {
            return Err(Error::GameOver);
        }

        let mark = self.to_move;
        self.board.place(index, mark)?;
        self.moves.push(index);
        debug!(index, %mark, "placed mark");

        if WinDetector::wins_at(&self.board, index, mark) {
            self.status = GameOutcome::Won(mark);
        } else if self.board.is_full() {
            self.status = GameOutcome::Draw;
        } else {
            self.to_move = mark.opponent();
        }

        if self.status.is_terminal() {
            info!(status = ?self.status, moves = self.moves.len(), "game over");
        }

        Ok(self.status)
    }
}
