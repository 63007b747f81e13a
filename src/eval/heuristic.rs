//! Heuristic evaluation of board positions
//!
//! Two strategies coexist:
//!
//! - [`evaluate`] scores a whole board for the deep search by scanning
//!   every 5-cell window from every cell in the four forward
//!   directions. Windows overlap, so most physical lines are counted
//!   from several starting offsets; this inflates magnitudes but is
//!   internally consistent since both sides are scored the same way,
//!   and cached scores depend on it.
//! - [`score_move`] ranks a single candidate move for the greedy
//!   fallback by scoring the four bounded 9-cell windows centered on
//!   it. Unlike the deep evaluator it does not zero out windows that
//!   contain both players' stones.

use crate::board::line::{scan_bounded, scan_fixed_window, Axis, AXES, FORWARD_DIRECTIONS};
use crate::board::{Board, Cell, Player, Pos, WIN_LENGTH};

use super::patterns::{DeltaScore, WindowScore};

/// Steps taken to each side of a candidate move when extracting its
/// bounded windows (a 9-cell line at most).
const DELTA_STEPS: usize = WIN_LENGTH - 1;

/// Own, opponent and empty counts within a window.
fn tally(cells: &[Cell], player: Player) -> (usize, usize, usize) {
    let mut own = 0;
    let mut opponent = 0;
    let mut empty = 0;
    for &cell in cells {
        match cell.player() {
            Some(p) if p == player => own += 1,
            Some(_) => opponent += 1,
            None => empty += 1,
        }
    }
    (own, opponent, empty)
}

/// Evaluate the whole board from `player`'s perspective.
///
/// Sums the score of every in-bounds 5-cell window over all cells and
/// all four forward directions. Positive values favor `player`.
#[must_use]
pub fn evaluate(board: &Board, player: Player) -> i32 {
    let mut score = 0;
    for y in 0..board.size() {
        for x in 0..board.size() {
            let start = Pos::new(x, y);
            for (dx, dy) in FORWARD_DIRECTIONS {
                if let Some(window) = scan_fixed_window(board, start, dx, dy) {
                    score += score_window(&window, player);
                }
            }
        }
    }
    score
}

/// Score one fixed 5-cell window.
///
/// A window holding stones of both players carries no net threat and
/// scores 0; otherwise the exact own/empty (or opponent/empty) counts
/// select the weight.
fn score_window(window: &[Cell; WIN_LENGTH], player: Player) -> i32 {
    let (own, opponent, empty) = tally(window, player);

    if own > 0 && opponent > 0 {
        return 0;
    }

    match (own, empty) {
        (5, 0) => WindowScore::FIVE,
        (4, 1) => WindowScore::FOUR,
        (3, 2) => WindowScore::THREE,
        (2, 3) => WindowScore::TWO,
        (1, 4) => WindowScore::ONE,
        _ => match (opponent, empty) {
            (4, 1) => WindowScore::BLOCK_FOUR,
            (3, 2) => WindowScore::BLOCK_THREE,
            _ => 0,
        },
    }
}

/// Score the candidate move at `pos` for `player` by one-ply delta
/// scoring.
///
/// Places the stone hypothetically, then sums the delta score of the
/// bounded window centered on `pos` along each of the four axes. `pos`
/// must be an empty position.
#[must_use]
pub fn score_move(board: &Board, pos: Pos, player: Player) -> i32 {
    let hypothetical = board.with_stone(pos, player);
    AXES.iter()
        .map(|&axis| score_delta_window(&hypothetical, pos, axis, player))
        .sum()
}

fn score_delta_window(board: &Board, pos: Pos, axis: Axis, player: Player) -> i32 {
    let window = scan_bounded(board, pos, axis, DELTA_STEPS);
    let (own, opponent, empty) = tally(&window, player);

    let mut score = 0;
    if own == 4 && empty == 1 {
        score += DeltaScore::FOUR;
    } else if own == 3 && empty == 2 {
        score += DeltaScore::THREE;
    } else if own == 2 && empty == 3 {
        score += DeltaScore::TWO;
    }
    if opponent == 4 && empty == 1 {
        score += DeltaScore::BLOCK_FOUR;
    } else if opponent == 3 && empty == 2 {
        score += DeltaScore::BLOCK_THREE;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_scores_zero() {
        let board = Board::new(9);
        assert_eq!(evaluate(&board, Player::Black), 0);
        assert_eq!(evaluate(&board, Player::White), 0);
    }

    #[test]
    fn test_corner_stone_window_count() {
        // A lone corner stone is covered by exactly three in-bounds
        // windows (horizontal, vertical, diagonal; the anti-diagonal
        // one leaves the grid), each scoring ONE.
        let board = Board::new(5).with_stone(Pos::new(0, 0), Player::Black);
        assert_eq!(evaluate(&board, Player::Black), 3 * WindowScore::ONE);
    }

    #[test]
    fn test_four_with_one_empty_scores_four() {
        // On a 5x5 board the only horizontal window in row 0 is the row
        // itself: 4 black + 1 empty.
        let board = Board::from_rows(&[
            "xxxx.",
            ".....",
            ".....",
            ".....",
            ".....",
        ]);
        let row_window = scan_fixed_window(&board, Pos::new(0, 0), 1, 0).unwrap();
        assert_eq!(score_window(&row_window, Player::Black), WindowScore::FOUR);
        // Seen from White the same window is a four-block
        assert_eq!(score_window(&row_window, Player::White), WindowScore::BLOCK_FOUR);
    }

    #[test]
    fn test_mixed_window_scores_zero() {
        // 3 black + 2 white in one window carries no net threat
        let board = Board::from_rows(&[
            "xxxoo",
            ".....",
            ".....",
            ".....",
            ".....",
        ]);
        let window = scan_fixed_window(&board, Pos::new(0, 0), 1, 0).unwrap();
        assert_eq!(score_window(&window, Player::Black), 0);
        assert_eq!(score_window(&window, Player::White), 0);
    }

    #[test]
    fn test_full_window_is_win_score() {
        let board = Board::from_rows(&[
            "ooooo",
            ".....",
            ".....",
            ".....",
            ".....",
        ]);
        let window = scan_fixed_window(&board, Pos::new(0, 0), 1, 0).unwrap();
        assert_eq!(score_window(&window, Player::White), WindowScore::FIVE);
    }

    #[test]
    fn test_evaluate_symmetric_under_relabeling() {
        let board = Board::from_rows(&[
            "x.o..",
            ".xo..",
            "..x..",
            ".....",
            "o....",
        ]);
        let swapped = Board::from_rows(&[
            "o.x..",
            ".ox..",
            "..o..",
            ".....",
            "x....",
        ]);
        assert_eq!(
            evaluate(&board, Player::Black),
            evaluate(&swapped, Player::White)
        );
    }

    #[test]
    fn test_evaluate_prefers_own_lines() {
        let board = Board::from_rows(&[
            ".........",
            "..xxx....",
            ".........",
            ".........",
            ".........",
            ".........",
            "......o..",
            ".........",
            ".........",
        ]);
        let black = evaluate(&board, Player::Black);
        let white = evaluate(&board, Player::White);
        assert!(black > white, "three in a row should outweigh a lone stone: {black} vs {white}");
    }

    #[test]
    fn test_score_move_four_in_clipped_window() {
        // Placing at the corner next to three own stones: the
        // horizontal window is clipped to 5 cells by the edge and
        // tallies 4 own + 1 empty. The counts run over the whole
        // window, so on an open board the same shape scores nothing.
        let board = Board::from_rows(&[
            ".xxx.....",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
        ]);
        let corner = score_move(&board, Pos::new(0, 0), Player::Black);
        assert_eq!(corner, DeltaScore::FOUR);

        let lone = score_move(&board, Pos::new(7, 7), Player::Black);
        assert_eq!(lone, 0);
    }

    #[test]
    fn test_score_move_blocking_four() {
        // White column at (4, 2)..(4, 5); Black at (4, 1) sees a
        // 6-cell vertical window (clipped above) with 4 opponent
        // stones and 1 empty.
        let board = Board::from_rows(&[
            ".........",
            ".........",
            "....o....",
            "....o....",
            "....o....",
            "....o....",
            ".........",
            ".........",
            ".........",
        ]);
        let blocking = score_move(&board, Pos::new(4, 1), Player::Black);
        assert_eq!(blocking, DeltaScore::BLOCK_FOUR);
    }

    #[test]
    fn test_score_move_mixed_window_still_contributes() {
        // The delta path has no zero-out rule: a window holding both
        // players' stones can still score. Horizontal window around
        // (3, 4): x x x [x] o o o . (clipped left), 4 own + 3 opponent
        // + 1 empty, which still fires the own-four weight.
        let board = Board::from_rows(&[
            ".........",
            ".........",
            ".........",
            ".........",
            "xxx.ooo..",
            ".........",
            ".........",
            ".........",
            ".........",
        ]);
        let score = score_move(&board, Pos::new(3, 4), Player::Black);
        assert_eq!(score, DeltaScore::FOUR);
    }
}
