//! Square grid of cells with value-semantics move application

use crate::error::Error;

use super::{Cell, Player, Pos};

/// Game board with a side length fixed at construction.
///
/// Boards are plain values: applying a move produces a new `Board` and
/// leaves the original untouched. The search relies on this when it
/// simulates moves, since sibling branches may still hold the parent
/// board, and the cache key is derived directly from the cell sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with the given side length.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length of the board
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        debug_assert!(pos.x < self.size && pos.y < self.size);
        pos.y * self.size + pos.x
    }

    /// Get the cell at a position. The position must be in bounds.
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Check if a position is in bounds and unoccupied
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        pos.x < self.size && pos.y < self.size && self.get(pos).is_empty()
    }

    /// All empty positions in row-major order (y outer, x inner).
    ///
    /// The order is deterministic; the search's first-encountered tie
    /// break depends on it.
    #[must_use]
    pub fn empty_positions(&self) -> Vec<Pos> {
        let mut positions = Vec::new();
        for y in 0..self.size {
            for x in 0..self.size {
                let pos = Pos::new(x, y);
                if self.get(pos).is_empty() {
                    positions.push(pos);
                }
            }
        }
        positions
    }

    /// Total stones on the board
    #[must_use]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Check if no empty position remains
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Return a new board with `player`'s stone at `pos`.
    ///
    /// Fails with [`Error::InvalidMove`] if the position is out of
    /// bounds or already occupied.
    pub fn with_move(&self, pos: Pos, player: Player) -> Result<Board, Error> {
        if !self.is_empty(pos) {
            return Err(Error::InvalidMove { pos });
        }
        Ok(self.with_stone(pos, player))
    }

    /// Return a new board with `player`'s stone at `pos`, without
    /// validation.
    ///
    /// Hot-path variant of [`Board::with_move`] for callers that already
    /// know the position is empty (the search only iterates
    /// `empty_positions`).
    #[must_use]
    pub fn with_stone(&self, pos: Pos, player: Player) -> Board {
        debug_assert!(self.is_empty(pos), "with_stone on occupied cell {pos}");
        let mut board = self.clone();
        let idx = board.index(pos);
        board.cells[idx] = Cell::Occupied(player);
        board
    }

    /// Raw cell sequence in row-major order (cache key source)
    #[inline]
    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Build a board from an ASCII diagram, one string per row:
    /// `'x'` black, `'o'` white, anything else empty. Rows must all have
    /// the same length. Intended for tests and position dumps.
    #[must_use]
    pub fn from_rows(rows: &[&str]) -> Board {
        let size = rows.len();
        let mut board = Board::new(size);
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), size, "row {y} has wrong length");
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    'x' | 'X' => Cell::Occupied(Player::Black),
                    'o' | 'O' => Cell::Occupied(Player::White),
                    _ => Cell::Empty,
                };
                board.cells[y * size + x] = cell;
            }
        }
        board
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                let ch = match self.get(Pos::new(x, y)) {
                    Cell::Empty => '.',
                    Cell::Occupied(Player::Black) => 'x',
                    Cell::Occupied(Player::White) => 'o',
                };
                f.write_fmt(format_args!("{ch}"))?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
