// history.rs - Detects a population that has settled into a cycle

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::cells::{CellStore, sorted};

/// Number of generations remembered.
pub const HISTORY_LEN: usize = 10;

/// Order-independent hash of a generation's live cells.
pub fn fingerprint<S: CellStore>(store: &S) -> u64 {
    let mut hasher = DefaultHasher::new();
    for (cell, value) in sorted(store) {
        cell.hash(&mut hasher);
        S::value_bits(value).hash(&mut hasher);
    }
    hasher.finish()
}

/// Fixed ring of the last [`HISTORY_LEN`] fingerprints.
#[derive(Debug, Clone, Default)]
pub struct History {
    seen: [u64; HISTORY_LEN],
    count: usize,
}

impl History {
    /// Records `hash`; returns true if it matches one of the remembered generations.
    pub fn record(&mut self, hash: u64) -> bool {
        let filled = self.count.min(HISTORY_LEN);
        if self.seen[..filled].contains(&hash) {
            return true;
        }
        self.seen[self.count % HISTORY_LEN] = hash;
        self.count += 1;
        false
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn len(&self) -> usize {
        self.count.min(HISTORY_LEN)
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::{IntensityMap, LiveSet};
    use crate::grid::Cell;

    #[test]
    fn test_fingerprint_ignores_insertion_order() {
        let a: LiveSet = [Cell::new(1, 1), Cell::new(2, 2), Cell::new(3, 1)].into_iter().collect();
        let b: LiveSet = [Cell::new(3, 1), Cell::new(1, 1), Cell::new(2, 2)].into_iter().collect();
        assert_eq!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn test_fingerprint_sees_intensity() {
        let a: IntensityMap = [(Cell::new(1, 1), 0.5)].into_iter().collect();
        let b: IntensityMap = [(Cell::new(1, 1), 0.6)].into_iter().collect();
        assert_ne!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn test_repeat_detected() {
        let mut history = History::default();
        assert!(!history.record(1));
        assert!(!history.record(2));
        assert!(history.record(1));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_zero_hash_not_mistaken_for_empty_slot() {
        let mut history = History::default();
        assert!(!history.record(0));
        assert!(history.record(0));
    }

    #[test]
    fn test_old_entries_fall_out() {
        let mut history = History::default();
        for hash in 0..HISTORY_LEN as u64 + 1 {
            assert!(!history.record(hash));
        }
        // 0 was overwritten by the eleventh entry
        assert!(!history.record(0));
        history.reset();
        assert!(history.is_empty());
    }
}
