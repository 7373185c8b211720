//! The flat binary save format.
//!
//! Layout, with no magic bytes, checksum or version field:
//!
//!  - bytes 0-31: the 64 cells, two per byte with the high nibble first, in
//!    row-major order; nibble 0 is empty, 1-4 are Red, Yellow, Green, Blue
//!  - byte 32: start bias (bits 7-6), player count - 1 (bits 5-4),
//!    AI count (bits 3-2), round count - 1 (bits 1-0)
//!  - byte 33: current round (bits 7-6), theme id (bits 5-0)
//!  - then 4 score bytes per scheduled round, `0xFF` meaning "not scored"
//!
//! A save truncated inside the score section still loads, with the missing
//! rounds coming back unscored; a truncated board or header does not, and
//! neither does a cell nibble above 4.

use crate::board::{Board, Cell, Color};
use crate::location::Location;
use crate::session::{GameSession, RoundScores};
use crate::{HEIGHT, WIDTH};
use derive_more::{Display, Error, From};
use std::fs;
use std::io;
use std::path::Path;

const BOARD_BYTES: usize = 32;
const FLAGS_BYTE: usize = 32;
const META_BYTE: usize = 33;
const HEADER_BYTES: usize = 34;
const SCORES_PER_ROUND: usize = 4;
const UNSCORED: u8 = 0xFF;

/// A full session snapshot, as written to disk.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaveState {
    pub board: Board,
    pub session: GameSession,
}

#[derive(Debug, PartialEq, Error, Display)]
pub enum DecodeError {
    /// The data ends before the 34 board and header bytes do.
    Truncated,
    /// A board nibble above 4. Coercing it would fabricate a ball color,
    /// so the whole save is rejected.
    #[display(fmt = "invalid cell value {} at cell {}", value, index)]
    InvalidCell { value: u8, index: usize },
}

/// Failure to load a save from disk.
#[derive(Debug, Display, Error, From)]
pub enum LoadError {
    Io(io::Error),
    Decode(DecodeError),
}

impl SaveState {
    /// Pack the snapshot into the flat byte layout.
    pub fn encode(&self) -> Vec<u8> {
        let rounds = self.session.round_count() as usize;
        let mut data = Vec::with_capacity(HEADER_BYTES + SCORES_PER_ROUND * rounds);

        for pair in 0..BOARD_BYTES {
            let high = cell_nibble(self.board.get(Location::from_index(2 * pair)));
            let low = cell_nibble(self.board.get(Location::from_index(2 * pair + 1)));
            data.push(high << 4 | low);
        }
        data.push(flags_byte(&self.session));
        data.push(meta_byte(&self.session));
        for round in self.session.round_scores() {
            for &score in round {
                data.push(score.unwrap_or(UNSCORED));
            }
        }
        data
    }

    /// Unpack a snapshot from raw save bytes.
    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        if data.len() < HEADER_BYTES {
            return Err(DecodeError::Truncated);
        }

        let mut cells = [[None; WIDTH]; HEIGHT];
        for (pair, &byte) in data[..BOARD_BYTES].iter().enumerate() {
            cells[pair / 4][2 * (pair % 4)] = cell_from_nibble(byte >> 4, 2 * pair)?;
            cells[pair / 4][2 * (pair % 4) + 1] = cell_from_nibble(byte & 0x0F, 2 * pair + 1)?;
        }

        let (start_bias, player_count, ai_count, round_count) = unpack_flags(data[FLAGS_BYTE]);
        let (current_round, theme_id) = unpack_meta(data[META_BYTE]);

        let mut round_scores = Vec::with_capacity(round_count as usize);
        for round in 0..round_count as usize {
            let offset = HEADER_BYTES + SCORES_PER_ROUND * round;
            match data.get(offset..offset + SCORES_PER_ROUND) {
                Some(bytes) => {
                    let mut scores: RoundScores = [None; SCORES_PER_ROUND];
                    for (slot, &byte) in scores.iter_mut().zip(bytes) {
                        *slot = if byte == UNSCORED { None } else { Some(byte) };
                    }
                    round_scores.push(scores);
                }
                // The save was written before this round completed.
                None => round_scores.push([None; SCORES_PER_ROUND]),
            }
        }

        Ok(Self {
            board: Board::from_cells(cells),
            session: GameSession::from_parts(
                start_bias,
                player_count,
                ai_count,
                round_count,
                current_round,
                round_scores,
                theme_id,
            ),
        })
    }

    /// Write the snapshot to a save file.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        fs::write(path, self.encode())
    }

    /// Load a snapshot from a save file.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        Ok(Self::decode(&fs::read(path)?)?)
    }
}

#[inline]
fn cell_nibble(cell: Cell) -> u8 {
    cell.map_or(0, Color::nibble)
}

fn cell_from_nibble(value: u8, index: usize) -> Result<Cell, DecodeError> {
    match value {
        0 => Ok(None),
        1 => Ok(Some(Color::Red)),
        2 => Ok(Some(Color::Yellow)),
        3 => Ok(Some(Color::Green)),
        4 => Ok(Some(Color::Blue)),
        _ => Err(DecodeError::InvalidCell { value, index }),
    }
}

// Byte 32: bias, players - 1, AIs and rounds - 1, two bits each from the top.
fn flags_byte(session: &GameSession) -> u8 {
    (session.start_bias() << 6)
        | ((session.player_count() - 1) << 4)
        | (session.ai_count() << 2)
        | (session.round_count() - 1)
}

fn unpack_flags(byte: u8) -> (u8, u8, u8, u8) {
    (
        (byte >> 6) & 0b11,
        ((byte >> 4) & 0b11) + 1,
        (byte >> 2) & 0b11,
        (byte & 0b11) + 1,
    )
}

// Byte 33: current round in the top two bits, theme id in the rest.
fn meta_byte(session: &GameSession) -> u8 {
    (session.current_round() << 6) | session.theme_id()
}

fn unpack_meta(byte: u8) -> (u8, u8) {
    ((byte >> 6) & 0b11, byte & 0b111111)
}
