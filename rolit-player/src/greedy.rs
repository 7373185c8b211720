//! The greedy move selector: take whichever placement converts the most
//! balls right now, breaking ties uniformly at random.
//!
//! Every hypothetical move is probed on a copy of the board; the live board
//! is only ever touched through [`Board::apply_move`], once, with the
//! chosen move.

use rand::rngs::{StdRng, ThreadRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rolit_engine::{Board, Color, Location};

/// A one-ply capture-maximizing player.
///
/// The random tie-break is intentional: among equally good moves the
/// selector must not settle into a canonical choice, so tests that need
/// reproducibility have to seed the generator explicitly.
pub struct GreedyPlayer<R: Rng> {
    rng: R,
}

impl GreedyPlayer<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for GreedyPlayer<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl GreedyPlayer<StdRng> {
    /// A deterministic player for reproducible games.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> GreedyPlayer<R> {
    /// Choose a move for `color` and apply it to the live board, returning
    /// the chosen location.
    ///
    /// # Panics
    /// If the board has no legal placement left. That only happens on a
    /// full board, and callers are expected to check
    /// [`Board::is_full`] before asking for a move.
    pub fn select_move(&mut self, board: &mut Board, color: Color) -> Location {
        let scored = evaluate(board, color);
        let best = scored
            .iter()
            .map(|&(_, gain)| gain)
            .max()
            .expect("no legal move: the board is full");
        let tied: Vec<Location> = scored
            .iter()
            .filter(|&&(_, gain)| gain == best)
            .map(|&(mv, _)| mv)
            .collect();

        let &choice = tied.choose(&mut self.rng).expect("tie set is never empty");
        let placed = board.apply_move(choice, color);
        debug_assert!(placed, "evaluated moves are legal by construction");
        choice
    }
}

/// The capture gain of every legal placement for `color`, in row-major
/// order. Probing never touches the board passed in.
pub fn evaluate(board: &Board, color: Color) -> Vec<(Location, usize)> {
    board
        .candidate_moves()
        .into_iter()
        .filter_map(|mv| board.move_gain(mv, color).map(|gain| (mv, gain)))
        .collect()
}
