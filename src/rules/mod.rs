//! Game rules: win detection
//!
//! The external game loop uses [`check_win`] after a real move; the
//! search engine uses [`has_any_five`] as its terminal test and the
//! move selector uses [`would_win`] for its immediate win/block scans.

pub mod win;

// Re-exports for convenient access
pub use win::{check_win, has_any_five, would_win, WinInfo};
