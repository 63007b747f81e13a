//! Crate error type

use crate::board::Pos;

/// Errors surfaced by the move engine.
///
/// These are the only two failure modes in the core: the board model
/// rejecting a bad placement, and move selection being asked for a move
/// on a full board. All recursive search calls are total over
/// well-formed inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Placement on an out-of-bounds or occupied cell
    #[error("invalid move at {pos}: out of bounds or occupied")]
    InvalidMove { pos: Pos },
    /// Move requested with zero empty positions; fatal to the caller
    #[error("no empty positions left on the board")]
    BoardFull,
}
