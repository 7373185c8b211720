//! The Rolit board: an 8x8 grid of four-color cells.
//!
//! A four-color game does not pack into a pair of player/opponent bitboards
//! the way two-player Reversi does, so the board is a plain row-major array
//! of cells. The board is `Copy`, which keeps hypothetical-move probing a
//! cheap by-value operation.
//!
//! All game mutation goes through [`Board::apply_move`] in `rules.rs`; this
//! module only covers storage, the starting position, occupancy counts and
//! the text representations used by drivers and test fixtures.

use crate::location::Location;
use crate::{HEIGHT, WIDTH};
use derive_more::{Display, Error};
use std::fmt::{self, Write};

/// One of the four ball colors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
}

/// A single cell: empty, or holding a ball.
pub type Cell = Option<Color>;

impl Color {
    /// All colors, in score and save-format order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Yellow, Color::Green, Color::Blue];

    /// The 4-bit cell id used by the save format (empty cells are 0).
    #[inline]
    pub fn nibble(self) -> u8 {
        match self {
            Color::Red => 1,
            Color::Yellow => 2,
            Color::Green => 3,
            Color::Blue => 4,
        }
    }

    fn to_char(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// The complete cell grid, row-major with the origin at the top-left.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    /// The starting position: a 2x2 block of one ball per color in the
    /// center of an otherwise empty board.
    pub fn new() -> Self {
        let mut cells = [[None; WIDTH]; HEIGHT];
        cells[3][3] = Some(Color::Red);
        cells[3][4] = Some(Color::Yellow);
        cells[4][3] = Some(Color::Blue);
        cells[4][4] = Some(Color::Green);
        Self { cells }
    }

    pub(crate) fn from_cells(cells: [[Cell; WIDTH]; HEIGHT]) -> Self {
        Self { cells }
    }

    /// The cell at `loc`.
    #[inline]
    pub fn get(&self, loc: Location) -> Cell {
        self.cells[loc.y() as usize][loc.x() as usize]
    }

    /// Write a ball into a cell. Cells are only ever colored or recolored,
    /// never cleared, which is what keeps occupancy monotonic.
    #[inline]
    pub(crate) fn set(&mut self, loc: Location, color: Color) {
        self.cells[loc.y() as usize][loc.x() as usize] = Some(color);
    }

    /// All 64 cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// The number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells().filter(|cell| cell.is_some()).count()
    }

    /// The number of empty cells.
    pub fn empty_count(&self) -> usize {
        WIDTH * HEIGHT - self.occupied_count()
    }

    /// Whether the round is over: every cell holds a ball.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// The number of balls placed since the start of the round. Derived
    /// from occupancy (4 starting balls + one per turn), never stored.
    pub fn turn_count(&self) -> u8 {
        self.occupied_count().saturating_sub(4) as u8
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

// Board formatted like:
//    1 2 3 4 5 6 7 8
//  a . . . . . . . .
//  ...
//  d . . . R Y . . .
//  e . . . B G . . .
//  ...
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   1 2 3 4 5 6 7 8")?;
        for (y, row) in self.cells.iter().enumerate() {
            write!(f, "\n {} ", (b'a' + y as u8) as char)?;
            for cell in row {
                f.write_char(cell.map_or('.', Color::to_char))?;
                f.write_char(' ')?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Error, Display)]
pub enum ParseBoardError {
    WrongLength,
    InvalidCell,
}

/// Parse a board from a 64-character picture using `.RYGB`, row-major.
/// Whitespace is ignored, so fixtures can be written one row per line.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [[None; WIDTH]; HEIGHT];
        let mut chars = s.chars().filter(|c| !c.is_whitespace());

        for row in cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = match chars.next().ok_or(ParseBoardError::WrongLength)? {
                    '.' => None,
                    'R' => Some(Color::Red),
                    'Y' => Some(Color::Yellow),
                    'G' => Some(Color::Green),
                    'B' => Some(Color::Blue),
                    _ => return Err(ParseBoardError::InvalidCell),
                };
            }
        }

        if chars.next().is_some() {
            return Err(ParseBoardError::WrongLength);
        }

        Ok(Self { cells })
    }
}
