//! Opening book: recorded moves for known positions, persisted as JSON.
//!
//! The book maps a `PositionKey` to the moves recorded for that position.
//! It is loaded once at startup — a missing file just means an empty book —
//! and written back on shutdown when recording mode is enabled. Whether
//! recording is on is the front end's decision, never the engine's.

use std::collections::HashMap;
use std::path::Path;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tactica_core::{Move, PositionKey};

/// A recorded move, stored as bare square indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookMove {
    pub from: u8,
    pub to: u8,
}

impl From<Move> for BookMove {
    fn from(mv: Move) -> Self {
        Self {
            from: mv.from,
            to: mv.to,
        }
    }
}

impl From<BookMove> for Move {
    fn from(bm: BookMove) -> Self {
        Move::new(bm.from, bm.to)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpeningBook {
    moves: HashMap<PositionKey, Vec<BookMove>>,
}

impl OpeningBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a book from a JSON file
    pub fn load(path: &str) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse JSON: {}", e))
    }

    /// Load a book, falling back to an empty one when the backing file is
    /// absent or unreadable.
    pub fn load_or_default(path: &str) -> Self {
        if !Path::new(path).exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(book) => book,
            Err(e) => {
                eprintln!("Warning: ignoring opening book at {}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Save the book to a JSON file
    pub fn save(&self, path: &str) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write file: {}", e))
    }

    /// Record a move for a position, ignoring exact duplicates.
    pub fn record(&mut self, key: PositionKey, mv: Move) {
        let entry = self.moves.entry(key).or_default();
        let bm = BookMove::from(mv);
        if !entry.contains(&bm) {
            entry.push(bm);
        }
    }

    /// Uniformly pick one of the moves recorded for a position, if any.
    pub fn pick(&self, key: &PositionKey, rng: &mut impl Rng) -> Option<Move> {
        self.moves
            .get(key)
            .and_then(|list| list.choose(rng))
            .map(|&bm| bm.into())
    }

    pub fn contains(&self, key: &PositionKey) -> bool {
        self.moves.contains_key(key)
    }

    /// All moves recorded for a position, empty if none.
    pub fn moves_for(&self, key: &PositionKey) -> &[BookMove] {
        self.moves.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of positions with recorded moves
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

#[cfg(test)]
#[path = "book_tests.rs"]
mod book_tests;
