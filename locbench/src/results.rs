//! In-memory store of computed statistics, keyed by scenario name.

use crate::stats::Statistics;
use indexmap::IndexMap;

/// Insertion-ordered mapping from scenario name to its latest statistics.
///
/// Re-running a scenario under the same name replaces its entry in place; the
/// store never merges or averages across runs. Written only by the single
/// execution task, so no locking.
#[derive(Clone, Debug, Default)]
pub struct ResultStore {
    entries: IndexMap<String, Statistics>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, name: &str, stats: Statistics) {
        self.entries.insert(name.to_string(), stats);
    }

    pub fn get(&self, name: &str) -> Option<&Statistics> {
        self.entries.get(name)
    }

    /// Entries in original run order.
    pub fn all(&self) -> impl Iterator<Item = (&str, &Statistics)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(avg: f64) -> Statistics {
        Statistics::from_durations(&[avg]).unwrap()
    }

    #[test]
    fn rerun_overwrites_without_merging() {
        let mut store = ResultStore::new();
        store.put("x", stats(10.0));
        store.put("x", stats(99.0));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("x").unwrap().avg, 99.0);
        assert_eq!(store.get("x").unwrap().count, 1);
    }

    #[test]
    fn preserves_run_order_across_overwrites() {
        let mut store = ResultStore::new();
        store.put("a", stats(1.0));
        store.put("b", stats(2.0));
        store.put("c", stats(3.0));
        store.put("a", stats(4.0));

        let names: Vec<_> = store.all().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
