//! Weight table and running total.

use std::collections::HashMap;

/// Effective weight per member name, plus the running sum of all weights.
///
/// `total` is maintained incrementally; [`WeightTable::recomputed_total`]
/// sums the table from scratch so the two can be checked against each other.
#[derive(Clone, Debug, Default)]
pub struct WeightTable {
    weights: HashMap<String, u32>,
    total: u64,
}

impl WeightTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `weight`, returning the weight it replaced.
    pub fn insert(&mut self, name: &str, weight: u32) -> Option<u32> {
        let previous = self.weights.insert(name.to_string(), weight);
        if let Some(old) = previous {
            self.total -= u64::from(old);
        }
        self.total += u64::from(weight);
        previous
    }

    /// Drop `name`, returning its weight if it was present.
    pub fn remove(&mut self, name: &str) -> Option<u32> {
        let weight = self.weights.remove(name)?;
        self.total -= u64::from(weight);
        Some(weight)
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.weights.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.weights.contains_key(name)
    }

    /// Running total.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn recomputed_total(&self) -> u64 {
        self.weights.values().map(|w| u64::from(*w)).sum()
    }

    /// Owned copy of the table.
    pub fn snapshot(&self) -> HashMap<String, u32> {
        self.weights.clone()
    }

    /// Member names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.weights.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.weights.iter().map(|(name, w)| (name.as_str(), *w))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_remove_track_total() {
        let mut table = WeightTable::new();
        assert_eq!(table.insert("a", 1), None);
        assert_eq!(table.insert("b", 3), None);
        assert_eq!(table.total(), 4);

        assert_eq!(table.remove("a"), Some(1));
        assert_eq!(table.total(), 3);
        assert_eq!(table.total(), table.recomputed_total());
    }

    #[test]
    fn test_insert_replaces() {
        let mut table = WeightTable::new();
        table.insert("a", 3);
        assert_eq!(table.insert("a", 5), Some(3));
        assert_eq!(table.total(), 5);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_remove_absent() {
        let mut table = WeightTable::new();
        table.insert("a", 2);
        assert_eq!(table.remove("zzz"), None);
        assert_eq!(table.total(), 2);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut table = WeightTable::new();
        table.insert("a", 2);
        let mut copy = table.snapshot();
        copy.insert("b".to_string(), 9);
        assert!(!table.contains("b"));
        assert_eq!(table.total(), 2);
    }

    #[test]
    fn test_names_sorted() {
        let mut table = WeightTable::new();
        table.insert("c", 1);
        table.insert("a", 1);
        table.insert("b", 1);
        assert_eq!(table.names(), vec!["a", "b", "c"]);
    }
}
