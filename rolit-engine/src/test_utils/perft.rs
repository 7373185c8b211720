//! "Perft" move counter: the number of distinct placement sequences of a
//! given length from the starting board.
//!
//! In Rolit a placement is legal on any empty cell next to a ball, whatever
//! color is being played, and captures recolor without clearing. Legality
//! therefore depends only on occupancy and the count is the same for every
//! color assignment, so the walk just places Red everywhere.

use crate::board::{Board, Color};

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Board::new(), depth)
}

fn leaves_below(board: Board, depth: u64) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    board
        .candidate_moves()
        .into_iter()
        .map(|mv| {
            let mut next = board;
            let placed = next.apply_move(mv, Color::Red);
            debug_assert!(placed);
            leaves_below(next, depth - 1)
        })
        .sum()
}

#[test]
fn perft_00() {
    assert_eq!(run_perft(0), 1);
}

#[test]
fn perft_01() {
    // The ring of cells around the 2x2 starting block.
    assert_eq!(run_perft(1), 12);
}

#[test]
fn perft_02() {
    // 4 corner first moves expose 5 fresh cells each, the 8 others 3 each:
    // 4 * (12 - 1 + 5) + 8 * (12 - 1 + 3) = 176.
    assert_eq!(run_perft(2), 176);
}
