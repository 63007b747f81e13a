//! Score tables for the two evaluation strategies
//!
//! The deep search and the one-ply greedy fallback use different
//! weights on purpose; the tables are not numerically equivalent and
//! must stay separate.

/// Scores for fixed 5-cell windows in the full-board evaluation.
///
/// A window counts only when it lies entirely on the board and holds
/// stones of at most one player; the exact own/empty (or
/// opponent/empty) split selects the weight.
pub struct WindowScore;

impl WindowScore {
    /// Five of our own - a won line
    pub const FIVE: i32 = 100_000;
    /// Four own stones, one empty
    pub const FOUR: i32 = 10_000;
    /// Three own stones, two empty
    pub const THREE: i32 = 1_000;
    /// Two own stones, three empty
    pub const TWO: i32 = 100;
    /// One own stone, four empty
    pub const ONE: i32 = 10;

    // Defensive mirror weights; one- and two-opponent windows score 0.
    /// Opponent four, one empty
    pub const BLOCK_FOUR: i32 = 5_000;
    /// Opponent three, two empty
    pub const BLOCK_THREE: i32 = 500;
}

/// Scores for the bounded 9-cell windows of single-move delta scoring.
///
/// Used by the greedy fallback path only; mixed-occupancy windows still
/// contribute under this simple scheme.
pub struct DeltaScore;

impl DeltaScore {
    /// Four own stones with one empty in the window
    pub const FOUR: i32 = 1_000;
    /// Three own stones, two empty
    pub const THREE: i32 = 100;
    /// Two own stones, three empty
    pub const TWO: i32 = 10;

    /// Opponent four, one empty - blocking is almost as good as winning
    pub const BLOCK_FOUR: i32 = 900;
    /// Opponent three, two empty
    pub const BLOCK_THREE: i32 = 90;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_score_hierarchy() {
        assert!(WindowScore::FIVE > WindowScore::FOUR);
        assert!(WindowScore::FOUR > WindowScore::BLOCK_FOUR);
        assert!(WindowScore::BLOCK_FOUR > WindowScore::THREE);
        assert!(WindowScore::THREE > WindowScore::BLOCK_THREE);
        assert!(WindowScore::BLOCK_THREE > WindowScore::TWO);
        assert!(WindowScore::TWO > WindowScore::ONE);
    }

    #[test]
    fn test_delta_score_hierarchy() {
        // Completing our own four outranks blocking the opponent's
        assert!(DeltaScore::FOUR > DeltaScore::BLOCK_FOUR);
        assert!(DeltaScore::BLOCK_FOUR > DeltaScore::THREE);
        assert!(DeltaScore::THREE > DeltaScore::BLOCK_THREE);
        assert!(DeltaScore::BLOCK_THREE > DeltaScore::TWO);
    }
}
