//! The 3x3 Tic-Tac-Toe board and its win detection.

/// `BoardState` and `Cell`, the `Board` implementation for Tic-Tac-Toe.
pub mod tic_tac_toe;
/// Last-move win detection and whole-board terminal evaluation.
pub mod win_detector;
