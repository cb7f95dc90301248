//! Transposition cache for one CPU decision
//!
//! The cache maps an exact position key (board encoding plus side to move)
//! to the best score found and the depth it was searched to. It lives only as
//! long as one top-level decision and is cleared before the next.
//!
//! # Example
//!
//! ```
//! use capfill::search::{EntryType, TranspositionCache};
//!
//! let mut cache = TranspositionCache::new();
//! cache.store(42, 3, 100, EntryType::Exact);
//!
//! assert_eq!(cache.probe(42, 3, -1000, 1000), Some(100));
//! // A deeper request cannot reuse a shallower result
//! assert_eq!(cache.probe(42, 4, -1000, 1000), None);
//! ```

use std::collections::HashMap;

/// Entry type for score interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// Exact score - the node was searched inside the window
    Exact,
    /// Lower bound - score >= stored value (beta cutoff)
    LowerBound,
    /// Upper bound - score <= stored value (alpha fail-low)
    UpperBound,
}

/// Cached search result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheEntry {
    /// Remaining depth the score was computed with
    pub depth: u8,
    pub score: i32,
    pub entry_type: EntryType,
}

/// Exact-key transposition cache.
#[derive(Debug, Default)]
pub struct TranspositionCache {
    entries: HashMap<u128, CacheEntry>,
}

impl TranspositionCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe the cache for a position.
    ///
    /// Returns the stored score only when the entry was searched at least as
    /// deep as `depth` and its bound type is conclusive for `[alpha, beta]`.
    #[must_use]
    pub fn probe(&self, key: u128, depth: u8, alpha: i32, beta: i32) -> Option<i32> {
        let entry = self.entries.get(&key)?;
        if entry.depth < depth {
            return None;
        }
        match entry.entry_type {
            EntryType::Exact => Some(entry.score),
            EntryType::LowerBound if entry.score >= beta => Some(entry.score),
            EntryType::UpperBound if entry.score <= alpha => Some(entry.score),
            _ => None,
        }
    }

    /// Store a result, keeping whichever entry was searched deeper.
    pub fn store(&mut self, key: u128, depth: u8, score: i32, entry_type: EntryType) {
        let entry = CacheEntry {
            depth,
            score,
            entry_type,
        };
        self.entries
            .entry(key)
            .and_modify(|e| {
                if e.depth <= depth {
                    *e = entry;
                }
            })
            .or_insert(entry);
    }

    #[must_use]
    pub fn get(&self, key: u128) -> Option<&CacheEntry> {
        self.entries.get(&key)
    }

    /// Clear all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
