use crate::board::{Board, GameOutcome, Mark};
use crate::boards::win_detector::WinDetector;
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A single square of the grid.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Mark),
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(mark) => mark.to_char(),
        }
    }

    fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Occupied(Mark::X)),
            'O' | 'o' => Some(Cell::Occupied(Mark::O)),
            _ => None,
        }
    }
}

/// The 3x3 Tic-Tac-Toe grid.
///
/// Cells are indexed 0 to 8, row by row:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
///
/// The board is 9 bytes and `Copy`; search lookahead works on copies and never
/// has to restore a cell.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Default)]
pub struct BoardState {
    cells: [Cell; CELL_COUNT],
}

impl BoardState {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at `index`.
    pub fn cell_at(&self, index: usize) -> Result<Cell> {
        self.cells
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfBounds { index })
    }

    /// Returns every empty index in ascending order.
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Sets `index` to `mark` if it is empty.
    ///
    /// On error the board is left untouched. Detecting a resulting win is the
    /// caller's job, see [`WinDetector::wins_at`].
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<()> {
        match self.cell_at(index)? {
            Cell::Empty => {
                self.cells[index] = Cell::Occupied(mark);
                Ok(())
            }
            Cell::Occupied(_) => Err(Error::CellOccupied { index }),
        }
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }
}

impl Board for BoardState {
    type Move = usize;

    fn get_available_moves(&self) -> Vec<Self::Move> {
        self.available_moves()
    }

    fn perform_move(&mut self, b_move: Self::Move, mark: Mark) {
        debug_assert_eq!(self.cells[b_move], Cell::Empty, "lookahead into occupied cell");
        self.cells[b_move] = Cell::Occupied(mark);
    }

    fn get_outcome(&self) -> GameOutcome {
        WinDetector::outcome(self)
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(3).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{} {} {}",
                row[0].to_char(),
                row[1].to_char(),
                row[2].to_char()
            )?;
        }
        Ok(())
    }
}

impl FromStr for BoardState {
    type Err = Error;

    /// Parses nine cell characters (`X`, `O`, `.` or `_`), ignoring whitespace,
    /// so the `Display` output parses back.
    fn from_str(s: &str) -> Result<Self> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut count = 0;
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = Cell::from_char(c).ok_or_else(|| Error::InvalidBoard {
                input: s.to_string(),
                reason: format!("unexpected character '{c}'"),
            })?;
            if count < CELL_COUNT {
                cells[count] = cell;
            }
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(Error::InvalidBoard {
                input: s.to_string(),
                reason: format!("expected {CELL_COUNT} cells, got {count}"),
            });
        }

        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, GameOutcome, Mark};
    use crate::boards::tic_tac_toe::{BoardState, Cell};
    use crate::error::Error;

    #[test]
    fn new_board_is_empty() {
        let board = BoardState::new();
        assert_eq!(board.available_moves(), (0..9).collect::<Vec<_>>());
        assert!(!board.is_full());
        assert_eq!(board.get_outcome(), GameOutcome::InProgress);
    }

    #[test]
    fn available_moves_are_ascending_and_skip_occupied() {
        // arrange
        let mut board = BoardState::new();
        board.place(4, Mark::X).unwrap();
        board.place(0, Mark::O).unwrap();
        board.place(8, Mark::X).unwrap();

        // act
        let moves = board.available_moves();

        // assert
        assert_eq!(moves, vec![1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn place_rejects_occupied_cell_and_keeps_board() {
        // arrange
        let mut board = BoardState::new();
        board.place(4, Mark::X).unwrap();
        let before = board;

        // act
        let result = board.place(4, Mark::O);

        // assert
        assert_eq!(result, Err(Error::CellOccupied { index: 4 }));
        assert_eq!(board.cell_at(4), Ok(Cell::Occupied(Mark::X)));
        assert_eq!(board, before);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut board = BoardState::new();
        assert_eq!(board.cell_at(9), Err(Error::IndexOutOfBounds { index: 9 }));
        assert_eq!(
            board.place(42, Mark::X),
            Err(Error::IndexOutOfBounds { index: 42 })
        );
        assert_eq!(board, BoardState::new());
    }

    #[test]
    fn full_board_has_no_moves() {
        let board: BoardState = "XOX XOO OXX".parse().unwrap();
        assert!(board.is_full());
        assert!(board.available_moves().is_empty());
    }

    #[test]
    fn display_parses_back() {
        // arrange
        let board: BoardState = "X.O .X. ..O".parse().unwrap();

        // act
        let rendered = board.to_string();

        // assert
        assert_eq!(rendered, "X . O\n. X .\n. . O");
        assert_eq!(rendered.parse::<BoardState>(), Ok(board));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!(
            "XOX".parse::<BoardState>(),
            Err(Error::InvalidBoard { .. })
        ));
        assert!(matches!(
            "XOX XOO OXXX".parse::<BoardState>(),
            Err(Error::InvalidBoard { .. })
        ));
        assert!(matches!(
            "XOX XQO OXX".parse::<BoardState>(),
            Err(Error::InvalidBoard { .. })
        ));
    }
}
