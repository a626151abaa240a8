//! Tracks which targets have a mutation outstanding.

use std::collections::HashSet;
use std::hash::Hash;

/// Set of keys with a request in flight; used to drop duplicate submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InFlight<K: Eq + Hash> {
    pending: HashSet<K>,
}

impl<K: Eq + Hash> Default for InFlight<K> {
    fn default() -> Self {
        Self {
            pending: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash + Clone + std::fmt::Debug> InFlight<K> {
    /// Marks `key` as pending. Returns `false` if it already was.
    pub fn begin(&mut self, key: K) -> bool {
        if self.pending.contains(&key) {
            tracing::debug!("duplicate request for {key:?} suppressed");
            return false;
        }
        self.pending.insert(key)
    }

    /// Clears `key`. Returns `false` if it was not pending.
    pub fn finish(&mut self, key: &K) -> bool {
        self.pending.remove(key)
    }

    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.pending.contains(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Copy of the pending keys, for rendering.
    #[must_use]
    pub fn snapshot(&self) -> HashSet<K> {
        self.pending.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_log;

    #[test]
    fn suppressed_duplicate_is_logged_with_its_key() {
        test_log::install();
        let mut inflight = InFlight::default();
        assert!(inflight.begin("hub-4242".to_string()));
        assert!(!inflight.begin("hub-4242".to_string()));
        assert!(test_log::seen("duplicate request for \"hub-4242\" suppressed"));
    }

    #[test]
    fn second_begin_for_same_key_is_refused() {
        let mut inflight = InFlight::default();
        assert!(inflight.begin(1_u32));
        assert!(!inflight.begin(1_u32));
        assert!(inflight.begin(2_u32));
        assert_eq!(inflight.len(), 2);
    }

    #[test]
    fn finish_allows_retry() {
        let mut inflight = InFlight::default();
        inflight.begin("a");
        assert!(inflight.finish(&"a"));
        assert!(!inflight.finish(&"a"));
        assert!(inflight.is_empty());
        assert!(inflight.begin("a"));
    }

    #[test]
    fn snapshot_is_detached() {
        let mut inflight = InFlight::default();
        inflight.begin(5_u8);
        let snapshot = inflight.snapshot();
        inflight.finish(&5);
        assert!(snapshot.contains(&5));
        assert!(!inflight.contains(&5));
    }
}
