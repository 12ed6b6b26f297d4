//! A small and simple library for exhaustive game-tree search on Tic-Tac-Toe.
//!
//! This library plays 3x3 Tic-Tac-Toe perfectly by searching every line of play to the
//! end of the game. Two interchangeable strategies are provided: plain minimax and
//! minimax with alpha-beta pruning. Both always choose the same move; pruning only
//! reduces the number of positions visited.
//!
//! # Example
//!
//! ```rust
//! use minimax_lib::agent::{Agent, select_move};
//! use minimax_lib::board::{GameOutcome, Mark};
//! use minimax_lib::game::Game;
//! use minimax_lib::search::Strategy;
//!
//! // X opens in the center
//! let mut game = Game::new();
//! game.play(4).unwrap();
//!
//! // Let an alpha-beta agent answer for O
//! let mut agent = Agent::builder(Mark::O)
//!     .with_strategy(Strategy::AlphaBeta)
//!     .build();
//! let (best_move, nodes) = select_move(game.board(), &mut agent, Strategy::AlphaBeta);
//!
//! // Every edge loses against a center opening, so O takes the first corner
//! assert_eq!(best_move, Some(0));
//! assert!(nodes > 0);
//! assert_eq!(game.play(0).unwrap(), GameOutcome::InProgress);
//! ```

/// Contains the `Board` trait and the `Mark` and `GameOutcome` enums shared by every module.
pub mod board;
/// Contains the Tic-Tac-Toe board and its win detection.
pub mod boards;
/// The searching player and move selection.
pub mod agent;
/// Error types returned by board and game operations.
pub mod error;
/// Non-hypothetical play with win and draw tracking.
pub mod game;
/// A random opponent and the generators that drive it.
pub mod random;
/// The core search: minimax and alpha-beta over any `Board`.
pub mod search;

pub use error::{Error, Result};
