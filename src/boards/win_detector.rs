use crate::board::{GameOutcome, Mark};
use crate::boards::tic_tac_toe::{BoardState, CELL_COUNT, Cell};

/// The eight index triples that win on a 3x3 board.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

const DIAGONALS: [[usize; 3]; 2] = [[0, 4, 8], [2, 4, 6]];

/// Win detection for the 3x3 board.
pub struct WinDetector;

impl WinDetector {
    /// Returns `true` if `mark` at `last_index` completes a line through that square.
    ///
    /// Only the row, the column and, for even indices, the two diagonals are checked.
    /// The diagonals pass through the corners and the center only, all of which have
    /// an even index. An index outside the board is never a win.
    pub fn wins_at(board: &BoardState, last_index: usize, mark: Mark) -> bool {
        if last_index >= CELL_COUNT {
            return false;
        }

        let cells = board.cells();
        let owns = |index: usize| cells[index] == Cell::Occupied(mark);

        let row = last_index / 3;
        if (0..3).all(|i| owns(row * 3 + i)) {
            return true;
        }

        let col = last_index % 3;
        if (0..3).all(|i| owns(col + i * 3)) {
            return true;
        }

        last_index % 2 == 0 && DIAGONALS.iter().any(|line| line.iter().all(|&i| owns(i)))
    }

    /// Evaluates an arbitrary position by scanning all eight lines.
    pub fn outcome(board: &BoardState) -> GameOutcome {
        let cells = board.cells();
        for [a, b, c] in WINNING_LINES {
            if let Cell::Occupied(mark) = cells[a] {
                if cells[b] == cells[a] && cells[c] == cells[a] {
                    return GameOutcome::Won(mark);
                }
            }
        }

        if board.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }
}
