//! Line scanning along the four board axes
//!
//! Both win detection and evaluation read lines of cells off the board:
//! bounded windows centered on a placed stone, fixed 5-cell windows for
//! the full-board evaluator, and unbounded contiguous runs for counting
//! toward five-in-a-row.

use super::{Board, Cell, Player, Pos, WIN_LENGTH};

/// One of the four undirected line orientations, as a pair of opposite
/// unit vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Axis {
    pub forward: (isize, isize),
    pub backward: (isize, isize),
}

/// Axes in win-check order: vertical, horizontal, diagonal,
/// anti-diagonal. Win detection reports the first axis that satisfies
/// the win condition, so this order is observable.
pub const AXES: [Axis; 4] = [
    Axis { forward: (0, 1), backward: (0, -1) },
    Axis { forward: (1, 0), backward: (-1, 0) },
    Axis { forward: (1, 1), backward: (-1, -1) },
    Axis { forward: (1, -1), backward: (-1, 1) },
];

/// Forward unit vectors used by the full-board evaluator. Every cell is
/// scanned with only these, so each 5-cell window is visited exactly
/// once per starting point.
pub const FORWARD_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Collect a bounded window of cells centered on `pos`.
///
/// Walks outward along `axis.forward` then `axis.backward`, each limited
/// to `max_steps_each_side` steps or the board edge. The returned
/// sequence starts with the cell at `pos` itself; with 4 steps per side
/// it is at most 9 cells long.
#[must_use]
pub fn scan_bounded(board: &Board, pos: Pos, axis: Axis, max_steps_each_side: usize) -> Vec<Cell> {
    let mut cells = vec![board.get(pos)];
    for (dx, dy) in [axis.forward, axis.backward] {
        let mut cur = pos;
        for _ in 0..max_steps_each_side {
            match cur.offset(dx, dy, board.size()) {
                Some(next) => {
                    cells.push(board.get(next));
                    cur = next;
                }
                None => break,
            }
        }
    }
    cells
}

/// Read exactly [`WIN_LENGTH`] cells starting at `start` and stepping by
/// `(dx, dy)`.
///
/// Returns `None` (not a partial window) if any step leaves the grid;
/// callers treat out-of-bounds windows as contributing zero. `start`
/// itself must be in bounds.
#[must_use]
pub fn scan_fixed_window(board: &Board, start: Pos, dx: isize, dy: isize) -> Option<[Cell; WIN_LENGTH]> {
    let mut window = [Cell::Empty; WIN_LENGTH];
    window[0] = board.get(start);
    let mut cur = start;
    for slot in window.iter_mut().skip(1) {
        cur = cur.offset(dx, dy, board.size())?;
        *slot = board.get(cur);
    }
    Some(window)
}

/// A contiguous run of same-player stones adjacent to a starting cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// Number of contiguous stones, not counting the starting cell
    pub count: usize,
    /// Outermost matching cell reached; the starting cell when the run
    /// is empty
    pub end: Pos,
}

/// Count `player`'s contiguous stones starting one step from `from`
/// along `(dx, dy)`, unbounded until a differing/empty cell or the
/// board edge.
#[must_use]
pub fn run(board: &Board, from: Pos, (dx, dy): (isize, isize), player: Player) -> Run {
    let mut count = 0;
    let mut end = from;
    let mut cur = from;
    while let Some(next) = cur.offset(dx, dy, board.size()) {
        if board.get(next) == Cell::Occupied(player) {
            count += 1;
            end = next;
            cur = next;
        } else {
            break;
        }
    }
    Run { count, end }
}
