use crate::board::{Board, Mark};
use crate::search::{ALPHA_FLOOR, Strategy};
use tracing::{debug, instrument, trace};

/// A computer player bound to one mark.
///
/// The agent owns a node counter that is reset at the start of every move
/// decision; it is diagnostic state and has no influence on the search.
#[derive(Debug, Clone)]
pub struct Agent {
    mark: Mark,
    opponent: Mark,
    strategy: Strategy,
    nodes: u64,
}

/// A builder for creating instances of `Agent`.
pub struct AgentBuilder {
    mark: Mark,
    strategy: Strategy,
}

impl AgentBuilder {
    /// Creates a new builder for an agent playing `mark`.
    pub fn new(mark: Mark) -> Self {
        Self {
            mark,
            strategy: Strategy::default(),
        }
    }

    /// Sets the strategy used by [`Agent::get_move`].
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn build(self) -> Agent {
        Agent {
            mark: self.mark,
            opponent: self.mark.opponent(),
            strategy: self.strategy,
            nodes: 0,
        }
    }
}

impl Agent {
    /// Creates an agent with the default strategy.
    pub fn new(mark: Mark) -> Self {
        AgentBuilder::new(mark).build()
    }

    /// Returns a new builder for `Agent`.
    pub fn builder(mark: Mark) -> AgentBuilder {
        AgentBuilder::new(mark)
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn opponent(&self) -> Mark {
        self.opponent
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Number of positions visited since the last reset.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn reset_nodes(&mut self) {
        self.nodes = 0;
    }

    pub(crate) fn visit(&mut self) {
        self.nodes += 1;
    }

    /// Picks a move with the agent's configured strategy.
    pub fn get_move<B: Board>(&mut self, board: &B) -> (Option<B::Move>, u64) {
        let strategy = self.strategy;
        select_move(board, self, strategy)
    }
}

/// Returns the best move for `agent` and the number of positions searched.
///
/// Every legal move is tried in the board's order and scored with the opponent
/// to move next. Only a strictly greater score replaces the current best, so the
/// first of several equally good moves is chosen. `None` means the board has no
/// legal move left.
#[instrument(level = "debug", skip(board, agent), fields(mark = %agent.mark()))]
pub fn select_move<B: Board>(
    board: &B,
    agent: &mut Agent,
    strategy: Strategy,
) -> (Option<B::Move>, u64) {
    agent.reset_nodes();

    let mut best_score = ALPHA_FLOOR;
    let mut best_move = None;

    for b_move in board.get_available_moves() {
        let mut child = *board;
        child.perform_move(b_move, agent.mark());
        let score = strategy.evaluate(&child, agent, false);
        trace!(?b_move, score, "scored candidate move");

        if score > best_score {
            best_score = score;
            best_move = Some(b_move);
        }
    }

    debug!(?best_move, best_score, nodes = agent.nodes(), "selected move");
    (best_move, agent.nodes())
}
