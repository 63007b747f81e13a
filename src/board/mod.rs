//! Board representation for five-in-a-row

pub mod grid;
pub mod line;


// Re-exports
pub use grid::Board;

use serde::{Deserialize, Serialize};

/// Number of contiguous stones that wins the game
pub const WIN_LENGTH: usize = 5;

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

/// State of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    /// Check if the cell holds no stone
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The occupying player, if any
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// Position on the board, 0-indexed. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    #[inline]
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Step by `(dx, dy)`, returning `None` when the step leaves a
    /// `size`×`size` board.
    #[inline]
    pub fn offset(self, dx: isize, dy: isize, size: usize) -> Option<Pos> {
        let x = self.x as isize + dx;
        let y = self.y as isize + dy;
        if x >= 0 && x < size as isize && y >= 0 && y < size as isize {
            Some(Pos::new(x as usize, y as usize))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
