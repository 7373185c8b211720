//! `rolit-engine` implements the board game Rolit: four-color Reversi on an
//! 8x8 grid, where a ball may be placed on any empty cell touching another
//! ball, and every opposing run sandwiched by the new ball is converted.
//!
//! The crate is split into:
//!
//!  - [`Board`] and the rules methods on it: adjacency, the capture scan,
//!    [`Board::apply_move`] (the single mutating entry point) and scoring.
//!  - [`GameSession`]: the per-session metadata (players, rounds, theme).
//!  - [`SaveState`]: the flat binary save format, byte-compatible with
//!    existing save files.
//!  - [`Location`]: board coordinates and the textual "a1" notation.

pub mod test_utils;

mod board;
mod codec;
mod location;
mod rules;
mod session;

pub use board::*;
pub use codec::*;
pub use location::*;
pub use rules::*;
pub use session::*;

/// The number of columns on the board.
pub const WIDTH: usize = 8;

/// The number of rows on the board.
pub const HEIGHT: usize = 8;

/// The number of cells on the board.
pub const NUM_CELLS: usize = 64;
