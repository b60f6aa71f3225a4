//! Canonical position identity.
//!
//! A `PositionKey` packs the board contents, the side to move, and the
//! castling rights into a fixed-size value: one nibble per square (empty plus
//! twelve piece/color combinations) in four u64 words, and one flags byte.
//! Keys are the shared identity for the transposition table, the repetition
//! history, and the opening book: two positions are the same for all three
//! purposes iff their keys are equal.
//!
//! The en-passant target and the halfmove clock are NOT part of the key;
//! positions that differ only in those fields compare equal.
//!
//! A key prints as a 66-character hex string and parses back losslessly,
//! which is also its serde form so it can be used as a JSON map key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::board::Position;
use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PositionKey {
    /// One nibble per square, a1 first: 0 = empty, 1..=12 = piece index.
    squares: [u64; 4],
    /// Bit 0: black to move. Bits 1..=4: wk, wq, bk, bq castling rights.
    flags: u8,
}

impl PositionKey {
    pub fn of(pos: &Position) -> Self {
        let mut squares = [0u64; 4];
        for (i, cell) in pos.board.iter().enumerate() {
            let nibble = match cell {
                None => 0u64,
                Some(pc) => 1 + (pc.color.idx() * 6 + pc.kind.idx()) as u64,
            };
            squares[i / 16] |= nibble << ((i % 16) * 4);
        }

        let mut flags = 0u8;
        if pos.side_to_move == Color::Black {
            flags |= 1;
        }
        if pos.castling.wk {
            flags |= 1 << 1;
        }
        if pos.castling.wq {
            flags |= 1 << 2;
        }
        if pos.castling.bk {
            flags |= 1 << 3;
        }
        if pos.castling.bq {
            flags |= 1 << 4;
        }

        PositionKey { squares, flags }
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.squares {
            write!(f, "{:016x}", word)?;
        }
        write!(f, "{:02x}", self.flags)
    }
}

impl FromStr for PositionKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 66 || !s.is_ascii() {
            return Err(format!("position key must be 66 hex chars, got {:?}", s));
        }
        let mut squares = [0u64; 4];
        for (i, word) in squares.iter_mut().enumerate() {
            let chunk = &s[i * 16..(i + 1) * 16];
            *word = u64::from_str_radix(chunk, 16)
                .map_err(|e| format!("bad position key word {:?}: {}", chunk, e))?;
        }
        let flags = u8::from_str_radix(&s[64..66], 16)
            .map_err(|e| format!("bad position key flags: {}", e))?;
        if flags & !0x1f != 0 {
            return Err(format!("unknown position key flag bits: {:#x}", flags));
        }
        Ok(PositionKey { squares, flags })
    }
}

impl Serialize for PositionKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PositionKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "key_tests.rs"]
mod key_tests;
