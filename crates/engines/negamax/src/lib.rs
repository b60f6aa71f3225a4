//! Negamax Chess Engine
//!
//! Fixed-depth negamax with alpha-beta pruning, piece-square evaluation, a
//! position-keyed transposition table, and an opening book. Searches run
//! either inline through the `Engine` trait or on a dedicated worker thread
//! through `spawn_search`.

mod book;
mod eval;
mod search;
mod tables;

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::thread::{self, JoinHandle};

use tactica_core::{Engine, Position, SearchResult};

pub use book::{BookMove, OpeningBook};
pub use eval::{MATE_SCORE, evaluate};
pub use search::{TranspositionTable, pick_best_move};

/// Negamax engine with alpha-beta pruning.
///
/// Owns its caches: the opening book, the transposition table, and the
/// random source used to pick among book moves. Exactly one of an engine
/// value or its running search worker exists at a time, so cache access
/// never needs a lock.
#[derive(Debug, Clone)]
pub struct NegamaxEngine {
    book: OpeningBook,
    table: TranspositionTable,
    rng: StdRng,
    nodes: u64,
}

impl NegamaxEngine {
    pub fn new() -> Self {
        Self::with_book(OpeningBook::new())
    }

    pub fn with_book(book: OpeningBook) -> Self {
        Self {
            book,
            table: TranspositionTable::new(),
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Engine with a deterministic random source, for reproducible play.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            book: OpeningBook::new(),
            table: TranspositionTable::new(),
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }

    pub fn book(&self) -> &OpeningBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut OpeningBook {
        &mut self.book
    }

    /// Start a search on a worker thread, taking ownership of the engine and
    /// a snapshot of the position. The caller polls `SearchHandle::is_finished`
    /// and gets the engine back, caches included, from `SearchHandle::join`.
    pub fn spawn_search(mut self, position: Position, depth: u8) -> SearchHandle {
        let handle = thread::spawn(move || {
            let result = self.search(&position, depth);
            (result, self)
        });
        SearchHandle { handle }
    }
}

impl Default for NegamaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for NegamaxEngine {
    fn search(&mut self, pos: &Position, depth: u8) -> SearchResult {
        self.nodes = 0;
        let picked = pick_best_move(
            pos,
            depth,
            &self.book,
            &mut self.table,
            &mut self.rng,
            &mut self.nodes,
        );

        SearchResult {
            best_move: picked.map(|(mv, _)| mv),
            score: picked.map(|(_, s)| s).unwrap_or(0),
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Tactica Negamax v1.0"
    }

    fn new_game(&mut self) {
        self.table.clear();
        self.nodes = 0;
    }
}

/// A running search worker. One search is outstanding at a time; the engine
/// that spawned it travels with the worker and comes back through `join`.
pub struct SearchHandle {
    handle: JoinHandle<(SearchResult, NegamaxEngine)>,
}

impl SearchHandle {
    /// Liveness poll: true once the search has run to completion.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the search completes and hand back the result together
    /// with the engine and its caches.
    pub fn join(self) -> (SearchResult, NegamaxEngine) {
        self.handle.join().expect("search worker panicked")
    }
}
