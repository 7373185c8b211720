//! Move selection for Rolit: a greedy one-ply player.

mod greedy;

pub use greedy::{evaluate, GreedyPlayer};
