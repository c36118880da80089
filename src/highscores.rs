//! High score
//!
//! A single integer in the key-value store. Read when the menu is shown,
//! written at most once per game over and only when beaten.

use crate::persistence::KeyValueStore;

/// Store key for the best score
pub const HIGH_SCORE_KEY: &str = "highScore";

/// Best score so far (0 when nothing was stored)
pub fn best(store: &impl KeyValueStore) -> u32 {
    let stored = store.get(HIGH_SCORE_KEY).max(0);
    u32::try_from(stored).unwrap_or(u32::MAX)
}

/// Check if a score beats the stored best
pub fn qualifies(store: &impl KeyValueStore, score: u32) -> bool {
    score > best(store)
}

/// Persist `score` if it beats the stored best.
/// Returns true when a new high score was written.
pub fn record(store: &mut impl KeyValueStore, score: u32) -> bool {
    if !qualifies(&*store, score) {
        return false;
    }

    store.set(HIGH_SCORE_KEY, i64::from(score));
    log::info!("New high score: {}", score);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    fn store_with(best: i64) -> MemoryStore {
        let mut store = MemoryStore::new();
        store.set(HIGH_SCORE_KEY, best);
        store
    }

    #[test]
    fn test_higher_score_replaces_best() {
        let mut store = store_with(50);
        assert!(record(&mut store, 75));
        assert_eq!(store.get(HIGH_SCORE_KEY), 75);
    }

    #[test]
    fn test_lower_score_keeps_best() {
        let mut store = store_with(50);
        assert!(!record(&mut store, 30));
        assert_eq!(store.get(HIGH_SCORE_KEY), 50);
    }

    #[test]
    fn test_equal_score_is_not_a_record() {
        let mut store = store_with(50);
        assert!(!record(&mut store, 50));
    }

    #[test]
    fn test_empty_store() {
        let mut store = MemoryStore::new();
        assert_eq!(best(&store), 0);
        assert!(!record(&mut store, 0));
        assert!(record(&mut store, 1));
        assert_eq!(best(&store), 1);
    }

    #[test]
    fn test_negative_stored_value_reads_as_zero() {
        let store = store_with(-5);
        assert_eq!(best(&store), 0);
    }
}
