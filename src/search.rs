use crate::agent::Agent;
use crate::board::Board;
use std::fmt;
use std::str::FromStr;

/// Lower pruning bound. Scores live in `{-1, 0, 1}`, so `-2` acts as minus infinity.
pub const ALPHA_FLOOR: i32 = -2;
/// Upper pruning bound, the counterpart of [`ALPHA_FLOOR`].
pub const BETA_CEILING: i32 = 2;

/// The tree-search algorithm used to score a position.
///
/// Both strategies return the same score for every position; alpha-beta only
/// visits fewer nodes.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum Strategy {
    /// Full minimax over the whole remaining game tree.
    Minimax,
    /// Minimax with alpha-beta pruning.
    #[default]
    AlphaBeta,
}

impl Strategy {
    /// Scores `board` for `agent`, with `maximizing` telling whose mark is placed next.
    pub fn evaluate<B: Board>(self, board: &B, agent: &mut Agent, maximizing: bool) -> i32 {
        match self {
            Strategy::Minimax => minimax(board, agent, maximizing),
            Strategy::AlphaBeta => alpha_beta(board, agent, maximizing, ALPHA_FLOOR, BETA_CEILING),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Minimax => write!(f, "minimax"),
            Strategy::AlphaBeta => write!(f, "alpha-beta"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "minimax" => Ok(Strategy::Minimax),
            "2" | "alpha-beta" | "alphabeta" | "alpha_beta" => Ok(Strategy::AlphaBeta),
            other => Err(format!(
                "unknown strategy '{other}' (expected 'minimax' or 'alpha-beta')"
            )),
        }
    }
}

/// The alpha-beta window carried down the tree.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Bounds {
    /// Best score the maximizer can already guarantee.
    pub alpha: i32,
    /// Best score the minimizer can already guarantee.
    pub beta: i32,
}

impl Bounds {
    pub fn new(alpha: i32, beta: i32) -> Self {
        Self { alpha, beta }
    }

    fn is_cut(&self) -> bool {
        self.beta <= self.alpha
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::new(ALPHA_FLOOR, BETA_CEILING)
    }
}

/// Exhaustive minimax from `agent`'s point of view.
pub fn minimax<B: Board>(board: &B, agent: &mut Agent, maximizing: bool) -> i32 {
    search(board, agent, maximizing, None)
}

/// Minimax with alpha-beta pruning inside the window `[alpha, beta]`.
pub fn alpha_beta<B: Board>(
    board: &B,
    agent: &mut Agent,
    maximizing: bool,
    alpha: i32,
    beta: i32,
) -> i32 {
    search(board, agent, maximizing, Some(Bounds::new(alpha, beta)))
}

/// The shared traversal. Without `bounds` every child is searched.
///
/// Each child is a copy of `board` with one more mark, so siblings never see
/// each other's lookahead and a cutoff leaves nothing to restore.
fn search<B: Board>(
    board: &B,
    agent: &mut Agent,
    maximizing: bool,
    mut bounds: Option<Bounds>,
) -> i32 {
    agent.visit();

    if let Some(score) = board.get_outcome().score_for(agent.mark()) {
        return score;
    }

    let mark = if maximizing {
        agent.mark()
    } else {
        agent.opponent()
    };
    let mut best = if maximizing { ALPHA_FLOOR } else { BETA_CEILING };

    for b_move in board.get_available_moves() {
        let mut child = *board;
        child.perform_move(b_move, mark);
        let score = search(&child, agent, !maximizing, bounds);

        if maximizing {
            best = best.max(score);
        } else {
            best = best.min(score);
        }

        if let Some(window) = bounds.as_mut() {
            if maximizing {
                window.alpha = window.alpha.max(best);
            } else {
                window.beta = window.beta.min(best);
            }
            if window.is_cut() {
                break;
            }
        }
    }

    debug_assert!((-1..=1).contains(&best), "non-terminal position without moves");
    best
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::agent::Agent;
    use crate::board::{Board, Mark};
    use crate::boards::tic_tac_toe::BoardState;
    use crate::search::{ALPHA_FLOOR, BETA_CEILING, Strategy, alpha_beta, minimax};
    use std::collections::HashSet;

    /// Every position reachable from the empty board with X moving first,
    /// paired with the side to move.
    pub(crate) fn reachable_positions() -> Vec<(BoardState, Mark)> {
        fn walk(
            board: BoardState,
            to_move: Mark,
            seen: &mut HashSet<BoardState>,
            out: &mut Vec<(BoardState, Mark)>,
        ) {
            if !seen.insert(board) {
                return;
            }
            out.push((board, to_move));
            if board.get_outcome().is_terminal() {
                return;
            }
            for index in board.available_moves() {
                let mut child = board;
                child.perform_move(index, to_move);
                walk(child, to_move.opponent(), seen, out);
            }
        }

        let mut seen = HashSet::new();
        let mut out = Vec::new();
        walk(BoardState::new(), Mark::X, &mut seen, &mut out);
        out
    }

    #[test]
    fn reachable_position_count() {
        assert_eq!(reachable_positions().len(), 5478);
    }

    #[test]
    fn terminal_positions_score_without_recursing() {
        // arrange
        let x_won: BoardState = "XXX OO. ...".parse().unwrap();
        let draw: BoardState = "XOX XOO OXX".parse().unwrap();

        for strategy in [Strategy::Minimax, Strategy::AlphaBeta] {
            let mut x = Agent::new(Mark::X);
            let mut o = Agent::new(Mark::O);

            // act & assert
            assert_eq!(strategy.evaluate(&x_won, &mut x, true), 1);
            assert_eq!(strategy.evaluate(&x_won, &mut o, false), -1);
            assert_eq!(strategy.evaluate(&draw, &mut x, true), 0);
            assert_eq!(x.nodes(), 2);
            assert_eq!(o.nodes(), 1);
        }
    }

    #[test]
    fn empty_board_is_a_draw_under_perfect_play() {
        // arrange
        let board = BoardState::new();
        let mut agent = Agent::new(Mark::X);

        // act
        let score = minimax(&board, &mut agent, true);

        // assert
        assert_eq!(score, 0);
        assert_eq!(agent.nodes(), 549_946);
    }

    #[test]
    fn alpha_beta_matches_minimax_on_empty_board_with_fewer_nodes() {
        let board = BoardState::new();

        let mut full = Agent::new(Mark::O);
        let full_score = minimax(&board, &mut full, false);

        let mut pruned = Agent::new(Mark::O);
        let pruned_score = alpha_beta(&board, &mut pruned, false, ALPHA_FLOOR, BETA_CEILING);

        assert_eq!(full_score, pruned_score);
        assert!(pruned.nodes() < full.nodes());
    }

    #[test]
    fn strategies_agree_on_every_reachable_position() {
        for (board, to_move) in reachable_positions() {
            for (me, maximizing) in [(to_move, true), (to_move.opponent(), false)] {
                let mut full = Agent::new(me);
                let mut pruned = Agent::new(me);

                let full_score = Strategy::Minimax.evaluate(&board, &mut full, maximizing);
                let pruned_score = Strategy::AlphaBeta.evaluate(&board, &mut pruned, maximizing);

                assert_eq!(full_score, pruned_score, "{board}\n{me} maximizing={maximizing}");
                assert!(pruned.nodes() <= full.nodes(), "{board}");
                assert!((-1..=1).contains(&full_score));
            }
        }
    }

    #[test]
    fn narrow_window_cuts_after_first_refutation() {
        // arrange
        // X to move wins at index 2, the first move tried.
        let board: BoardState = "XX. OO. ...".parse().unwrap();
        let mut pruned = Agent::new(Mark::X);
        let mut full = Agent::new(Mark::X);

        // act
        let pruned_score = alpha_beta(&board, &mut pruned, true, ALPHA_FLOOR, 1);
        let full_score = minimax(&board, &mut full, true);

        // assert
        assert_eq!(pruned_score, 1);
        assert_eq!(full_score, 1);
        assert_eq!(pruned.nodes(), 2);
        assert!(full.nodes() > 2);
    }

    #[test]
    fn strategy_parses_from_flags() {
        assert_eq!("minimax".parse(), Ok(Strategy::Minimax));
        assert_eq!("Alpha-Beta".parse(), Ok(Strategy::AlphaBeta));
        assert_eq!("1".parse(), Ok(Strategy::Minimax));
        assert_eq!("2".parse(), Ok(Strategy::AlphaBeta));
        assert!("greedy".parse::<Strategy>().is_err());
        assert_eq!(Strategy::default(), Strategy::AlphaBeta);
        assert_eq!(Strategy::AlphaBeta.to_string().parse(), Ok(Strategy::AlphaBeta));
    }
}
