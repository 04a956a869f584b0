//! Memo table mapping structural state keys to computed scores.
//!
//! Entries carry a [`Bound`] so that results from windowed (alpha-beta)
//! searches are only reused when the stored bound settles the new window.
//! Full-width searches store [`Bound::Exact`] entries exclusively.

use std::collections::HashMap;
use std::hash::Hash;

use tabula_core::Score;
use tracing::trace;

/// How a stored score relates to the true minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The score is the exact value.
    Exact,
    /// The true value is at least the score (failed high).
    Lower,
    /// The true value is at most the score (failed low).
    Upper,
}

/// One memoized result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoEntry {
    pub score: Score,
    pub bound: Bound,
}

impl MemoEntry {
    #[inline]
    pub const fn exact(score: Score) -> MemoEntry {
        MemoEntry {
            score,
            bound: Bound::Exact,
        }
    }

    /// Whether this entry decides a node searched with window `(alpha, beta)`.
    #[inline]
    pub fn cuts(&self, alpha: Score, beta: Score) -> bool {
        match self.bound {
            Bound::Exact => true,
            Bound::Lower => self.score >= beta,
            Bound::Upper => self.score <= alpha,
        }
    }
}

/// Score cache owned by a single strategy and kept across searches.
#[derive(Debug, Clone)]
pub struct MemoTable<K> {
    entries: HashMap<K, MemoEntry>,
    hits: u64,
    misses: u64,
}

impl<K: Eq + Hash> MemoTable<K> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Look up `key`, counting the hit or miss.
    pub fn probe(&mut self, key: &K) -> Option<MemoEntry> {
        let entry = self.entries.get(key).copied();
        if entry.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        entry
    }

    /// Store `entry`, replacing any previous result for `key`.
    pub fn store(&mut self, key: K, entry: MemoEntry) {
        self.entries.insert(key, entry);
    }

    /// Number of stored positions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lifetime probe hits.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lifetime probe misses.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&mut self) {
        trace!(entries = self.entries.len(), "clearing memo table");
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

impl<K: Eq + Hash> Default for MemoTable<K> {
    fn default() -> Self {
        Self::new()
    }
}
