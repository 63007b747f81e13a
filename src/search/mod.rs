//! Search module
//!
//! Contains:
//! - Score cache keyed by exact (board, depth, side) triples
//! - Minimax search with alpha-beta pruning

pub mod cache;
pub mod minimax;

pub use cache::{CacheKey, ScoreCache};
pub use minimax::{SearchConfig, SearchResult, SearchStats, Searcher};
