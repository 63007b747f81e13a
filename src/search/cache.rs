//! Score cache for the minimax search
//!
//! The search memoizes previously scored (board, depth, side-to-move)
//! triples. The key is a faithful byte-packed encoding of the full cell
//! sequence (2 bits per cell) plus the remaining depth and the
//! maximizing flag, so equal keys imply equal scores by construction -
//! no lossy digest, no false collisions.
//!
//! # Example
//!
//! ```
//! use gomoku_ai::board::Board;
//! use gomoku_ai::search::{CacheKey, ScoreCache};
//!
//! let board = Board::new(5);
//! let mut cache = ScoreCache::new();
//!
//! let key = CacheKey::encode(&board, 3, true);
//! cache.store(key.clone(), 40);
//! assert_eq!(cache.probe(&key), Some(40));
//! ```

use std::collections::HashMap;

use crate::board::{Board, Cell, Player};

/// Canonical cache key: exact cell sequence, remaining depth, and the
/// side-to-move flag. Two positions share a key only if the boards are
/// cell-for-cell identical and the search parameters match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    cells: Box<[u8]>,
    depth: u8,
    maximizing: bool,
}

impl CacheKey {
    /// Pack a board plus search parameters into a key. Each cell takes
    /// 2 bits (empty / black / white), row-major.
    #[must_use]
    pub fn encode(board: &Board, depth: u8, maximizing: bool) -> Self {
        let cells = board.cells();
        let mut packed = vec![0u8; cells.len().div_ceil(4)];
        for (i, cell) in cells.iter().enumerate() {
            let code: u8 = match cell {
                Cell::Empty => 0,
                Cell::Occupied(Player::Black) => 1,
                Cell::Occupied(Player::White) => 2,
            };
            packed[i / 4] |= code << ((i % 4) * 2);
        }
        Self {
            cells: packed.into_boxed_slice(),
            depth,
            maximizing,
        }
    }
}

/// Memoized scores, owned by a single searcher.
///
/// Entries are never invalidated; the cache may grow without bound
/// across many searches, an accepted memory/time tradeoff. It lives as
/// long as its searcher and can be dropped wholesale via
/// [`ScoreCache::clear`].
#[derive(Debug, Default)]
pub struct ScoreCache {
    entries: HashMap<CacheKey, i32>,
}

impl ScoreCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a previously computed score.
    #[must_use]
    pub fn probe(&self, key: &CacheKey) -> Option<i32> {
        self.entries.get(key).copied()
    }

    /// Record a computed score. Overwrites any existing entry, which
    /// must by the key invariant hold the same value.
    pub fn store(&mut self, key: CacheKey, score: i32) {
        self.entries.insert(key, score);
    }

    /// Number of cached scores
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
