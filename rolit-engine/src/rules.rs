//! The Rolit rules: adjacency, the sandwich capture scan, move application
//! and scoring.
//!
//! The capture scan runs *after* the new ball has been written to the grid:
//! [`Board::captures`] reads the mover's color from the origin cell itself.
//! Scanning from a still-empty origin finds nothing, so the ordering is
//! load-bearing; [`Board::apply_move`] takes care of it.

use crate::board::{Board, Color};
use crate::location::Location;
use crate::{HEIGHT, WIDTH};

/// The 8 compass directions as (dx, dy) steps.
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Per-color ball counts, in Red, Yellow, Green, Blue order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Score {
    pub red: u8,
    pub yellow: u8,
    pub green: u8,
    pub blue: u8,
}

impl Score {
    /// The count for a single color.
    pub fn get(&self, color: Color) -> u8 {
        match color {
            Color::Red => self.red,
            Color::Yellow => self.yellow,
            Color::Green => self.green,
            Color::Blue => self.blue,
        }
    }

    /// The counts in color order, as stored in the save format.
    pub fn to_array(&self) -> [u8; 4] {
        [self.red, self.yellow, self.green, self.blue]
    }

    /// The total number of balls on the board.
    pub fn total(&self) -> u8 {
        self.red + self.yellow + self.green + self.blue
    }
}

impl Board {
    /// True iff at least one of the 8 in-bounds neighbors of `loc` holds a
    /// ball. Placement is legal next to *any* ball, own color included.
    pub fn is_adjacent(&self, loc: Location) -> bool {
        DIRECTIONS
            .iter()
            .any(|&(dx, dy)| loc.offset(dx, dy).map_or(false, |n| self.get(n).is_some()))
    }

    /// The cells captured by the ball already sitting at `loc`.
    ///
    /// Each direction is walked outward over a run of opposing balls; the
    /// run counts only if it ends on an in-bounds ball of the mover's own
    /// color. An empty cell or the board edge cuts the run loose.
    ///
    /// The origin cell must already hold the mover's ball. An empty origin
    /// captures nothing.
    pub fn captures(&self, loc: Location) -> Vec<Location> {
        let color = match self.get(loc) {
            Some(color) => color,
            None => {
                debug_assert!(false, "capture scan from an empty cell");
                return Vec::new();
            }
        };

        let mut captured = Vec::new();
        for &(dx, dy) in &DIRECTIONS {
            let mut run = Vec::new();
            let mut cursor = loc.offset(dx, dy);
            while let Some(next) = cursor {
                match self.get(next) {
                    // An opposing ball extends the run.
                    Some(c) if c != color => {
                        run.push(next);
                        cursor = next.offset(dx, dy);
                    }
                    // Our own ball closes the sandwich.
                    Some(_) => {
                        captured.extend(run);
                        break;
                    }
                    // A gap: nothing captured along this direction.
                    None => break,
                }
            }
        }
        captured
    }

    /// Place a ball of `color` at `loc` and convert every captured run.
    ///
    /// Returns `false` without touching the board when `loc` is occupied or
    /// has no occupied neighbor. A rejected move is ordinary control flow
    /// (the driver re-prompts), not an error.
    ///
    /// This is the single mutating entry point; the AI and any driver must
    /// route every board change through it.
    pub fn apply_move(&mut self, loc: Location, color: Color) -> bool {
        if self.get(loc).is_some() || !self.is_adjacent(loc) {
            return false;
        }
        self.set(loc, color);
        for captured in self.captures(loc) {
            self.set(captured, color);
        }
        true
    }

    /// Every empty cell adjacent to a ball, in row-major order. These are
    /// exactly the legal placements, for any color.
    pub fn candidate_moves(&self) -> Vec<Location> {
        let mut moves = Vec::new();
        for y in 0..HEIGHT as u8 {
            for x in 0..WIDTH as u8 {
                let loc = Location::new(x, y);
                if self.get(loc).is_none() && self.is_adjacent(loc) {
                    moves.push(loc);
                }
            }
        }
        moves
    }

    /// The number of balls a placement of `color` at `loc` would convert,
    /// probed on a copy of the board. `None` for illegal placements.
    pub fn move_gain(&self, loc: Location, color: Color) -> Option<usize> {
        if self.get(loc).is_some() || !self.is_adjacent(loc) {
            return None;
        }
        let mut probe = *self;
        probe.set(loc, color);
        Some(probe.captures(loc).len())
    }

    /// Count the balls of each color.
    pub fn score(&self) -> Score {
        let mut score = Score::default();
        for cell in self.cells() {
            match cell {
                Some(Color::Red) => score.red += 1,
                Some(Color::Yellow) => score.yellow += 1,
                Some(Color::Green) => score.green += 1,
                Some(Color::Blue) => score.blue += 1,
                None => {}
            }
        }
        score
    }
}
