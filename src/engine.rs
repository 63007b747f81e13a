//! Move selection: difficulty presets and the win/block/search pipeline
//!
//! The engine wraps the searcher with two unconditional overrides that
//! bypass search entirely:
//!
//! 1. **Immediate win**: any move completing our own five is taken.
//! 2. **Block**: any move the opponent could win with next turn is
//!    occupied.
//! 3. Otherwise the configured fallback runs: minimax search, or plain
//!    one-ply delta scoring in the greedy variant.
//!
//! First-found wins/blocks are returned in row-major scan order; no
//! ranking among simultaneous candidates is performed.
//!
//! # Example
//!
//! ```
//! use gomoku_ai::{select_move, Board, Difficulty, Player, Pos};
//!
//! let board = Board::new(5).with_stone(Pos::new(2, 2), Player::Black);
//! let pos = select_move(&board, Player::White, Difficulty::Easy).unwrap();
//! assert!(board.is_empty(pos));
//! ```

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player, Pos};
use crate::error::Error;
use crate::eval::{score_move, WindowScore};
use crate::rules::would_win;
use crate::search::{SearchConfig, Searcher};

/// Difficulty presets mapping to a search configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// The search configuration this preset stands for.
    #[must_use]
    pub fn config(self) -> SearchConfig {
        match self {
            Difficulty::Easy => SearchConfig {
                max_depth: 2,
                use_cache: false,
            },
            Difficulty::Medium => SearchConfig {
                max_depth: 3,
                use_cache: true,
            },
            Difficulty::Hard => SearchConfig {
                max_depth: 4,
                use_cache: true,
            },
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Fallback strategy when no immediate win or block exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Deep minimax search (the default)
    Minimax,
    /// One-ply delta scoring, the simpler variant
    Greedy,
}

/// Which phase of the pipeline produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Move completing our own five
    ImmediateWin,
    /// Move occupying the opponent's winning position
    Block,
    /// Regular minimax search result
    Minimax,
    /// One-ply delta scoring result
    Greedy,
}

/// A selected move with metadata about how it was found.
#[derive(Debug, Clone, Copy)]
pub struct MoveResult {
    /// Chosen position
    pub pos: Pos,
    /// Score attached to the move: the win score for overrides, the
    /// minimax value or delta score otherwise
    pub score: i32,
    /// Phase that produced the move
    pub search_type: SearchType,
    /// Minimax nodes entered (0 for overrides and greedy)
    pub nodes: u64,
}

/// Move selector owning a searcher for one difficulty.
///
/// The score cache inside the searcher persists across calls on the
/// same engine; [`AiEngine::clear_cache`] drops it, e.g. when a new
/// game starts, and must not change any selected move.
pub struct AiEngine {
    difficulty: Difficulty,
    mode: SearchMode,
    searcher: Searcher,
}

impl AiEngine {
    /// Create an engine with the minimax fallback.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_mode(difficulty, SearchMode::Minimax)
    }

    /// Create an engine with an explicit fallback mode.
    #[must_use]
    pub fn with_mode(difficulty: Difficulty, mode: SearchMode) -> Self {
        Self {
            difficulty,
            mode,
            searcher: Searcher::new(difficulty.config()),
        }
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Switch presets; rebuilds the searcher (and thus its cache) when
    /// the difficulty actually changes.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.difficulty != difficulty {
            self.difficulty = difficulty;
            self.searcher = Searcher::new(difficulty.config());
        }
    }

    /// Drop all memoized scores.
    pub fn clear_cache(&mut self) {
        self.searcher.clear_cache();
    }

    /// Pick a move for `player`, or fail with [`Error::BoardFull`] when
    /// no empty position exists.
    pub fn select_move(&mut self, board: &Board, player: Player) -> Result<Pos, Error> {
        self.select_move_with_stats(board, player)
            .map(|result| result.pos)
    }

    /// Pick a move and report which pipeline phase found it.
    pub fn select_move_with_stats(
        &mut self,
        board: &Board,
        player: Player,
    ) -> Result<MoveResult, Error> {
        if board.is_full() {
            return Err(Error::BoardFull);
        }

        // 1. Immediate winning move, taken unconditionally
        if let Some(pos) = find_winning_move(board, player) {
            return Ok(MoveResult {
                pos,
                score: WindowScore::FIVE,
                search_type: SearchType::ImmediateWin,
                nodes: 0,
            });
        }

        // 2. Block the opponent's winning position
        if let Some(pos) = find_winning_move(board, player.opponent()) {
            return Ok(MoveResult {
                pos,
                score: WindowScore::FIVE,
                search_type: SearchType::Block,
                nodes: 0,
            });
        }

        // 3. Configured fallback
        match self.mode {
            SearchMode::Minimax => {
                // The board has an empty position, so the search always
                // produces a move.
                let result = self
                    .searcher
                    .search(board, player)
                    .ok_or(Error::BoardFull)?;
                Ok(MoveResult {
                    pos: result.pos,
                    score: result.score,
                    search_type: SearchType::Minimax,
                    nodes: result.stats.nodes,
                })
            }
            SearchMode::Greedy => {
                let (pos, score) = greedy_move(board, player).ok_or(Error::BoardFull)?;
                Ok(MoveResult {
                    pos,
                    score,
                    search_type: SearchType::Greedy,
                    nodes: 0,
                })
            }
        }
    }
}

/// First empty position (row-major) where `player` would complete five.
fn find_winning_move(board: &Board, player: Player) -> Option<Pos> {
    board
        .empty_positions()
        .into_iter()
        .find(|&pos| would_win(board, pos, player))
}

/// Highest delta-scored empty position, first-found on ties.
fn greedy_move(board: &Board, player: Player) -> Option<(Pos, i32)> {
    let mut best: Option<(Pos, i32)> = None;
    for pos in board.empty_positions() {
        let score = score_move(board, pos, player);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((pos, score)),
        }
    }
    best
}

/// One-shot entry point: pick a move for `player` on `board` at the
/// given difficulty.
///
/// Builds a fresh engine per call; the cache therefore lives only for
/// this one decision. Fails only when the board has no empty position.
pub fn select_move(board: &Board, player: Player, difficulty: Difficulty) -> Result<Pos, Error> {
    AiEngine::new(difficulty).select_move(board, player)
}
