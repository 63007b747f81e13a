//! Position evaluation
//!
//! Contains:
//! - Score tables for both evaluation strategies
//! - Full-board window evaluation for the deep search
//! - Single-move delta scoring for the greedy fallback

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, score_move};
pub use patterns::{DeltaScore, WindowScore};
