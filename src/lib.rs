//! Gomoku move engine
//!
//! A five-in-a-row engine: immutable board model, win detection with
//! endpoint reporting, two heuristic evaluators, minimax search with
//! alpha-beta pruning and score memoization, and a move selector with
//! difficulty presets.
//!
//! # Architecture
//!
//! - [`board`]: board representation, players, positions, line scans
//! - [`rules`]: win detection over the four axes
//! - [`eval`]: full-board window evaluation and one-move delta scoring
//! - [`search`]: minimax with alpha-beta pruning and the score cache
//! - [`engine`]: difficulty presets and the win/block/search pipeline
//!
//! # Move selection priority
//!
//! The engine always checks, in order: a move that completes its own
//! five, a move blocking the opponent's five, and only then the
//! configured search. Deeper difficulties change only the third phase.
//!
//! # Quick start
//!
//! ```
//! use gomoku_ai::{AiEngine, Board, Difficulty, Player, Pos};
//!
//! let board = Board::new(5)
//!     .with_stone(Pos::new(2, 2), Player::Black)
//!     .with_stone(Pos::new(1, 1), Player::White);
//!
//! let mut engine = AiEngine::new(Difficulty::Easy);
//! let pos = engine.select_move(&board, Player::Black).unwrap();
//! assert!(board.is_empty(pos));
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

pub use board::{Board, Cell, Player, Pos, WIN_LENGTH};
pub use engine::{select_move, AiEngine, Difficulty, MoveResult, SearchMode, SearchType};
pub use error::Error;
pub use eval::{evaluate, score_move};
pub use rules::{check_win, has_any_five, would_win, WinInfo};
pub use search::{SearchConfig, SearchResult, SearchStats, Searcher};
