//! Code for working with [`Location`]s on the Rolit board.

use crate::{HEIGHT, WIDTH};
use std::fmt::{self, Display, Formatter, Write};

/// A cell coordinate: `x` is the column (0-7, left to right), `y` the row
/// (0-7, top to bottom).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Location {
    x: u8,
    y: u8,
}

impl Location {
    /// Construct from column and row coordinates.
    ///
    /// # Panics
    /// If either coordinate is off the board.
    pub fn new(x: u8, y: u8) -> Self {
        assert!(x < WIDTH as u8 && y < HEIGHT as u8);
        Self { x, y }
    }

    /// The column, 0-7 left to right.
    #[inline]
    pub fn x(self) -> u8 {
        self.x
    }

    /// The row, 0-7 top to bottom.
    #[inline]
    pub fn y(self) -> u8 {
        self.y
    }

    /// Convert from a row-major cell index (0 for a1, 63 for h8).
    pub fn from_index(index: usize) -> Self {
        assert!(index < WIDTH * HEIGHT);
        Self {
            x: (index % WIDTH) as u8,
            y: (index / WIDTH) as u8,
        }
    }

    /// Convert into a row-major cell index.
    #[inline]
    pub fn to_index(self) -> usize {
        self.y as usize * WIDTH + self.x as usize
    }

    /// Step by `(dx, dy)`, returning `None` when the step leaves the board.
    #[inline]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let x = self.x as i8 + dx;
        let y = self.y as i8 + dy;
        if (0..WIDTH as i8).contains(&x) && (0..HEIGHT as i8).contains(&y) {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ParseLocationError;

impl Display for ParseLocationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "invalid location string")
    }
}

impl std::error::Error for ParseLocationError {}

/// Build a [`Location`] from the textual notation: a letter `a`-`h` selects
/// the row and a digit `1`-`8` the column, so "a1" is the top-left cell.
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let row_char = chars.next().ok_or(ParseLocationError)?.to_ascii_lowercase();
        let y = "abcdefgh".find(row_char).ok_or(ParseLocationError)? as u8;
        let col = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as u8;

        if !(1..=8).contains(&col) || chars.next() != None {
            return Err(ParseLocationError);
        }

        Ok(Self { x: col - 1, y })
    }
}

/// Convert this [`Location`] into string notation ("a1").
impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char((b'a' + self.y) as char)?;
        f.write_char((b'1' + self.x) as char)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn location_from_index() {
        assert_eq!(Location::from_index(0), Location::new(0, 0));
        assert_eq!(Location::from_index(63), Location::new(7, 7));
        assert_eq!(Location::from_index(11), Location::new(3, 1));
    }

    #[test]
    fn location_to_index() {
        assert_eq!(Location::new(0, 0).to_index(), 0);
        assert_eq!(Location::new(7, 7).to_index(), 63);
        assert_eq!(Location::new(3, 1).to_index(), 11);
    }

    #[test]
    fn location_offset() {
        assert_eq!(Location::new(3, 3).offset(1, -1), Some(Location::new(4, 2)));
        assert_eq!(Location::new(0, 5).offset(-1, 0), None);
        assert_eq!(Location::new(4, 7).offset(0, 1), None);
        assert_eq!(Location::new(7, 0).offset(1, -1), None);
    }

    #[test]
    fn location_from_str_success() {
        assert_eq!(Location::from_str("a1"), Ok(Location::new(0, 0)));
        assert_eq!(Location::from_str("H8"), Ok(Location::new(7, 7)));
        assert_eq!(Location::from_str("c5"), Ok(Location::new(4, 2)));
    }

    #[test]
    fn location_from_str_fail() {
        assert_eq!(Location::from_str(""), Err(ParseLocationError));
        assert_eq!(Location::from_str("a12"), Err(ParseLocationError));
        assert_eq!(Location::from_str("aa"), Err(ParseLocationError));
        assert_eq!(Location::from_str("a0"), Err(ParseLocationError));
        assert_eq!(Location::from_str("a9"), Err(ParseLocationError));
        assert_eq!(Location::from_str("i5"), Err(ParseLocationError));
    }

    #[test]
    fn location_to_str() {
        assert_eq!(Location::new(0, 0).to_string(), "a1");
        assert_eq!(Location::new(7, 7).to_string(), "h8");
        assert_eq!(Location::from_str("e2").unwrap().to_string(), "e2");
        assert_eq!(Location::from_str("F6").unwrap().to_string(), "f6");
    }
}
