use std::fmt;

/// The seam between a game and the search engine.
///
/// The search treats a board as a small value: every ply works on its own copy,
/// so implementations must be `Copy` and cheap to duplicate.
pub trait Board: Copy {
    /// The type representing a move. For Tic-Tac-Toe this is a cell index.
    type Move: Copy + fmt::Debug;

    /// Returns every legal move in the order the search should try them.
    ///
    /// The order is significant: when several moves score equally, the first one wins.
    fn get_available_moves(&self) -> Vec<Self::Move>;

    /// Places `mark` for the given move.
    ///
    /// Only moves returned by `get_available_moves` may be passed here.
    fn perform_move(&mut self, b_move: Self::Move, mark: Mark);

    /// Evaluates the position without reference to the last move played.
    fn get_outcome(&self) -> GameOutcome;
}

/// One of the two players' marks. No third value is representable.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Returns the other player's mark.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The state of a game. `Won` and `Draw` are absorbing.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum GameOutcome {
    /// No line is complete and at least one cell is empty.
    InProgress,
    /// The given mark holds a complete line.
    Won(Mark),
    /// The board is full and no line is complete.
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }

    /// Scores a terminal outcome from `me`'s point of view.
    ///
    /// Returns `None` for `InProgress`, which is distinct from a drawn score of `0`.
    pub fn score_for(self, me: Mark) -> Option<i32> {
        match self {
            GameOutcome::InProgress => None,
            GameOutcome::Draw => Some(0),
            GameOutcome::Won(winner) if winner == me => Some(1),
            GameOutcome::Won(_) => Some(-1),
        }
    }
}
