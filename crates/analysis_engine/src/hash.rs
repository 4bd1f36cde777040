//! Transposition table keyed by the Zobrist position fingerprint
//!
//! Entries are never evicted: once the table holds `capacity` positions,
//! further stores are dropped. Below the cap a store for a known key
//! overwrites it.

use shakmaty::Move;
use std::collections::HashMap;

/// Cached search result for one position
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranspositionEntry {
    pub score: i32,
    pub depth_searched: i32,
    pub best_move: Option<Move>,
}

/// Fixed-capacity position cache owned by one analysis call
#[derive(Debug)]
pub struct TranspositionTable {
    entries: HashMap<u64, TranspositionEntry>,
    capacity: usize,
}

impl TranspositionTable {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity,
        }
    }

    /// Probe the table (returns a borrow; callers clone what they keep)
    #[inline]
    pub fn probe(&self, key: u64) -> Option<&TranspositionEntry> {
        self.entries.get(&key)
    }

    /// Best move recorded for `key`, if any
    #[inline]
    pub fn best_move(&self, key: u64) -> Option<&Move> {
        self.entries.get(&key).and_then(|e| e.best_move.as_ref())
    }

    /// Store an entry while under capacity (returns whether it was written)
    pub fn store(&mut self, key: u64, entry: TranspositionEntry) -> bool {
        if self.entries.len() >= self.capacity {
            return false;
        }
        self.entries.insert(key, entry);
        true
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(score: i32, depth: i32) -> TranspositionEntry {
        TranspositionEntry {
            score,
            depth_searched: depth,
            best_move: None,
        }
    }

    #[test]
    fn test_store_and_probe() {
        let mut tt = TranspositionTable::new(8);
        assert!(tt.store(42, entry(35, 3)));

        let hit = tt.probe(42).expect("entry stored");
        assert_eq!(hit.score, 35);
        assert_eq!(hit.depth_searched, 3);
        assert!(tt.probe(7).is_none());
    }

    #[test]
    fn test_overwrite_below_capacity() {
        let mut tt = TranspositionTable::new(8);
        tt.store(1, entry(10, 1));
        tt.store(1, entry(-20, 4));

        assert_eq!(tt.len(), 1);
        assert_eq!(tt.probe(1).unwrap().score, -20);
    }

    #[test]
    fn test_full_table_drops_new_entries() {
        let mut tt = TranspositionTable::new(2);
        assert!(tt.store(1, entry(1, 1)));
        assert!(tt.store(2, entry(2, 1)));
        assert!(!tt.store(3, entry(3, 1)));

        assert_eq!(tt.len(), 2);
        assert!(tt.probe(3).is_none());
    }

    #[test]
    fn test_full_table_keeps_existing_entries_unchanged() {
        let mut tt = TranspositionTable::new(1);
        tt.store(9, entry(50, 2));
        assert!(!tt.store(9, entry(-50, 6)));

        assert_eq!(tt.probe(9).unwrap().score, 50);
        assert_eq!(tt.probe(9).unwrap().depth_searched, 2);
    }
}
