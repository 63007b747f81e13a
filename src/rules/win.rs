//! Win condition checking for five-in-a-row
//!
//! A stone wins when it is part of 5 or more contiguous same-player
//! stones along any of the four axes (overlines count). Detection comes
//! in three forms: a last-move check that reports the winning line's
//! endpoints, an allocation-free hypothetical check used by the move
//! selector's override scans, and a whole-board scan for the search's
//! terminal test, where no single "last move" exists.

use serde::{Deserialize, Serialize};

use crate::board::line::{run, AXES};
use crate::board::{Board, Player, Pos, WIN_LENGTH};

/// A completed five-in-a-row.
///
/// `start` and `end` are the outermost same-player cells of the full
/// contiguous run along the winning axis, not clamped to exactly five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinInfo {
    pub player: Player,
    pub start: Pos,
    pub end: Pos,
}

/// Check whether the stone just placed at `last_move` completes a line
/// of five or more.
///
/// Returns `None` if the cell at `last_move` is empty. Axes are checked
/// in order vertical, horizontal, diagonal, anti-diagonal and the first
/// winning axis is reported; a stone completing lines on two axes at
/// once surfaces only the first.
#[must_use]
pub fn check_win(board: &Board, last_move: Pos) -> Option<WinInfo> {
    let player = board.get(last_move).player()?;

    for axis in AXES {
        let forward = run(board, last_move, axis.forward, player);
        let backward = run(board, last_move, axis.backward, player);
        if 1 + forward.count + backward.count >= WIN_LENGTH {
            return Some(WinInfo {
                player,
                start: backward.end,
                end: forward.end,
            });
        }
    }
    None
}

/// Check whether placing `player`'s stone at `pos` would complete five
/// in a row.
///
/// Counts as if the stone stood at `pos` without building the
/// hypothetical board; returns `false` if `pos` is not an empty
/// position.
#[must_use]
pub fn would_win(board: &Board, pos: Pos, player: Player) -> bool {
    if !board.is_empty(pos) {
        return false;
    }
    for axis in AXES {
        let total = 1
            + run(board, pos, axis.forward, player).count
            + run(board, pos, axis.backward, player).count;
        if total >= WIN_LENGTH {
            return true;
        }
    }
    false
}

/// Check whether any stone on the board already completes five in a
/// row. O(size²) scan used as the search's terminal test.
#[must_use]
pub fn has_any_five(board: &Board) -> bool {
    for y in 0..board.size() {
        for x in 0..board.size() {
            if check_win(board, Pos::new(x, y)).is_some() {
                return true;
            }
        }
    }
    false
}
