//! Per-label evaluation record

use indexmap::{IndexMap, IndexSet};
use std::hash::Hash;

/// Pass/fail outcome of every label for one evaluated value.
///
/// Labels keep the order in which they were first registered across the
/// chain. Equality ignores order.
///
/// # Example
///
/// ```rust
/// use keyed_validator::Outcomes;
///
/// let outcomes: Outcomes<&str> = [("age", false), ("zoo", true)].into_iter().collect();
///
/// assert!(!outcomes.is_valid());
/// assert_eq!(outcomes.get(&"zoo"), Some(true));
/// assert_eq!(outcomes.invalid_labels().into_iter().collect::<Vec<_>>(), vec!["age"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcomes<K: Hash + Eq> {
    pub(super) results: IndexMap<K, bool>,
}

impl<K: Hash + Eq> Outcomes<K> {
    /// An empty record.
    pub fn new() -> Self {
        Outcomes {
            results: IndexMap::new(),
        }
    }

    /// Record `passed` for `label`, replacing an earlier outcome for the
    /// same label in place.
    pub(crate) fn record(&mut self, label: K, passed: bool) {
        self.results.insert(label, passed);
    }

    /// Whether every label passed. Vacuously true with no labels.
    pub fn is_valid(&self) -> bool {
        self.results.values().all(|passed| *passed)
    }

    /// Outcome of one label, `None` if it was not evaluated.
    pub fn get(&self, label: &K) -> Option<bool> {
        self.results.get(label).copied()
    }

    /// Labels and outcomes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, bool)> + '_ {
        self.results.iter().map(|(label, passed)| (label, *passed))
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether no label was evaluated.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl<K: Hash + Eq + Clone> Outcomes<K> {
    fn partition(&self, wanted: bool) -> IndexSet<K> {
        self.results
            .iter()
            .filter(|(_, passed)| **passed == wanted)
            .map(|(label, _)| label.clone())
            .collect()
    }

    /// Labels whose condition held.
    pub fn valid_labels(&self) -> IndexSet<K> {
        self.partition(true)
    }

    /// Labels whose condition failed.
    pub fn invalid_labels(&self) -> IndexSet<K> {
        self.partition(false)
    }

    /// Every evaluated label.
    pub fn labels(&self) -> IndexSet<K> {
        self.results.keys().cloned().collect()
    }
}

impl<K: Hash + Eq> Default for Outcomes<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq> FromIterator<(K, bool)> for Outcomes<K> {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        let mut outcomes = Outcomes::new();
        for (label, passed) in iter {
            outcomes.record(label, passed);
        }
        outcomes
    }
}
