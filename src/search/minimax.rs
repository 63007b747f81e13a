//! Minimax search with alpha-beta pruning and score memoization
//!
//! The searcher explores the game tree depth-first to a configured
//! depth, alternating maximizing and minimizing plies, pruning branches
//! that cannot affect the outcome, and memoizing scores keyed by the
//! exact (board, depth, side) triple. It is strictly single-threaded
//! and synchronous; depth is the only bound on work.
//!
//! # Example
//!
//! ```
//! use gomoku_ai::board::{Board, Player, Pos};
//! use gomoku_ai::search::{SearchConfig, Searcher};
//!
//! let board = Board::new(5).with_stone(Pos::new(2, 2), Player::Black);
//! let mut searcher = Searcher::new(SearchConfig { max_depth: 2, use_cache: true });
//!
//! let best = searcher.next_move(&board, Player::White).unwrap();
//! assert!(board.is_empty(best));
//! ```

use crate::board::{Board, Player, Pos};
use crate::eval::evaluate;
use crate::rules::has_any_five;

use super::cache::{CacheKey, ScoreCache};

/// Infinity score for alpha-beta bounds; every evaluation is strictly
/// inside (-INF, INF).
const INF: i32 = i32::MAX;

/// Search configuration: depth budget and whether scores are memoized.
///
/// Caching is a toggle on the one searcher implementation, not a
/// separate code path; with `use_cache` off the cache is never probed
/// or populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies explored below each root candidate
    pub max_depth: u8,
    /// Memoize (board, depth, side) scores across the search
    pub use_cache: bool,
}

/// Counters describing the work done by the last `next_move` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Minimax nodes entered
    pub nodes: u64,
    /// Scores answered from the cache
    pub cache_hits: u64,
    /// Child loops cut short by alpha-beta
    pub prunes: u64,
}

/// Outcome of a root search.
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    /// Best move found
    pub pos: Pos,
    /// Minimax score of that move
    pub score: i32,
    /// Work counters for this search
    pub stats: SearchStats,
}

/// Minimax searcher owning its score cache.
///
/// The cache persists across searches on the same instance; entries
/// are keyed by the full board so stale hits are impossible, and
/// [`Searcher::clear_cache`] exists for callers that want a fresh
/// table per game.
pub struct Searcher {
    config: SearchConfig,
    cache: ScoreCache,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            cache: ScoreCache::new(),
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Counters from the most recent search
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Number of memoized scores currently held
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Drop all memoized scores
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Find the best move for `player`, or `None` on a full board.
    ///
    /// Every empty position is tried in row-major order; each candidate
    /// is scored by a minimax search of the resulting board with the
    /// opponent to move. Ties are broken by the first-encountered
    /// candidate, which makes the result deterministic for a given
    /// board and configuration.
    #[must_use]
    pub fn search(&mut self, board: &Board, player: Player) -> Option<SearchResult> {
        self.stats = SearchStats::default();

        let mut best: Option<(Pos, i32)> = None;
        for pos in board.empty_positions() {
            let child = board.with_stone(pos, player);
            let score = self.minimax(&child, self.config.max_depth, false, player, -INF, INF);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((pos, score)),
            }
        }

        best.map(|(pos, score)| SearchResult {
            pos,
            score,
            stats: self.stats,
        })
    }

    /// Convenience wrapper returning only the chosen position.
    #[must_use]
    pub fn next_move(&mut self, board: &Board, player: Player) -> Option<Pos> {
        self.search(board, player).map(|result| result.pos)
    }

    /// Score `board` from `root`'s perspective with `depth` plies
    /// remaining.
    ///
    /// The side to move is `root` when `maximizing`, the opponent
    /// otherwise. Terminal positions (depth exhausted, board full, or a
    /// five already on the board) are scored by full-board evaluation.
    /// Cached scores are returned unchanged, with no alpha/beta
    /// adjustment; the stored value for a key is always the value a
    /// fresh evaluation would produce.
    fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        maximizing: bool,
        root: Player,
        alpha: i32,
        beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        let key = if self.config.use_cache {
            let key = CacheKey::encode(board, depth, maximizing);
            if let Some(score) = self.cache.probe(&key) {
                self.stats.cache_hits += 1;
                return score;
            }
            Some(key)
        } else {
            None
        };

        if depth == 0 || board.is_full() || has_any_five(board) {
            let score = evaluate(board, root);
            if let Some(key) = key {
                self.cache.store(key, score);
            }
            return score;
        }

        let side = if maximizing { root } else { root.opponent() };
        let mut alpha = alpha;
        let mut beta = beta;
        let mut best = if maximizing { -INF } else { INF };

        for pos in board.empty_positions() {
            let child = board.with_stone(pos, side);
            let score = self.minimax(&child, depth - 1, !maximizing, root, alpha, beta);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if beta <= alpha {
                self.stats.prunes += 1;
                break;
            }
        }

        if let Some(key) = key {
            self.cache.store(key, best);
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    fn depth2() -> Searcher {
        Searcher::new(SearchConfig {
            max_depth: 2,
            use_cache: true,
        })
    }

    #[test]
    fn test_full_board_returns_none() {
        let mut board = Board::new(2);
        let mut player = Player::Black;
        for pos in board.empty_positions() {
            board = board.with_stone(pos, player);
            player = player.opponent();
        }
        assert!(depth2().next_move(&board, Player::Black).is_none());
    }

    #[test]
    fn test_returns_empty_position() {
        let board = Board::from_rows(&[
            "x.o..",
            ".x...",
            "..o..",
            ".....",
            ".....",
        ]);
        let pos = depth2().next_move(&board, Player::Black).unwrap();
        assert!(board.is_empty(pos));
    }

    #[test]
    fn test_takes_winning_move() {
        // Black completes five at (4, 2); the child board is terminal
        // and evaluates to the win score, dominating every alternative.
        let board = Board::from_rows(&[
            "......",
            "xxxx..",
            "oo.o..",
            "......",
            "......",
            "......",
        ]);
        let result = depth2().search(&board, Player::Black).unwrap();
        assert_eq!(result.pos, Pos::new(4, 1));
    }

    #[test]
    fn test_deterministic_across_runs() {
        let board = Board::from_rows(&[
            ".....",
            ".xo..",
            "..x..",
            ".....",
            ".....",
        ]);
        let mut searcher = depth2();
        let first = searcher.next_move(&board, Player::White);
        let second = searcher.next_move(&board, Player::White);
        assert_eq!(first, second);
    }

    #[test]
    fn test_cache_toggle_does_not_change_move() {
        let board = Board::from_rows(&[
            ".....",
            ".xo..",
            ".x...",
            ".....",
            ".....",
        ]);
        let cached = depth2().next_move(&board, Player::Black);
        let uncached = Searcher::new(SearchConfig {
            max_depth: 2,
            use_cache: false,
        })
        .next_move(&board, Player::Black);
        assert_eq!(cached, uncached);
    }

    #[test]
    fn test_cache_disabled_stays_empty() {
        let board = Board::from_rows(&[
            ".....",
            ".xo..",
            ".....",
            ".....",
            ".....",
        ]);
        let mut searcher = Searcher::new(SearchConfig {
            max_depth: 2,
            use_cache: false,
        });
        let _ = searcher.next_move(&board, Player::Black);
        assert_eq!(searcher.cache_len(), 0);
        assert_eq!(searcher.stats().cache_hits, 0);
    }

    #[test]
    fn test_cache_populated_and_reused() {
        let board = Board::from_rows(&[
            ".....",
            ".xo..",
            ".....",
            ".....",
            ".....",
        ]);
        let mut searcher = depth2();
        let first = searcher.next_move(&board, Player::Black);
        assert!(searcher.cache_len() > 0);

        // Second run answers mostly from cache and agrees
        let second = searcher.next_move(&board, Player::Black);
        assert_eq!(first, second);
        assert!(searcher.stats().cache_hits > 0);
    }

    #[test]
    fn test_clear_cache_keeps_result() {
        let board = Board::from_rows(&[
            ".....",
            ".xo..",
            "..o..",
            ".....",
            ".....",
        ]);
        let mut searcher = depth2();
        let before = searcher.next_move(&board, Player::White);
        searcher.clear_cache();
        assert_eq!(searcher.cache_len(), 0);
        let after = searcher.next_move(&board, Player::White);
        assert_eq!(before, after);
    }

    #[test]
    fn test_stats_counted() {
        let board = Board::from_rows(&[
            ".....",
            ".xo..",
            ".....",
            ".....",
            ".....",
        ]);
        let mut searcher = depth2();
        let result = searcher.search(&board, Player::Black).unwrap();
        assert!(result.stats.nodes > 0);
    }
}
