//! Id sets for favorites and the comparison selection.
//!
//! Both sets hold ship ids, never ships. Membership is plain string equality,
//! so filtered and re-sorted views of the catalog can be checked against the
//! same set without caring about object identity. Insertion order is kept so
//! that the comparison table lays out columns in the order ships were picked,
//! and the persisted favorites array is stable across writes. Equality ignores
//! that order: two sets are equal when they hold the same ids.
//!
//! Every operation returns a new set.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdSet(Vec<String>);

impl PartialEq for IdSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|id| other.contains(id))
    }
}

impl Eq for IdSet {}

impl IdSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|existing| existing == id)
    }

    /// Symmetric difference on a single id.
    pub fn toggled(&self, id: &str) -> IdSet {
        if self.contains(id) {
            self.without(id)
        } else {
            self.with(id)
        }
    }

    pub fn with(&self, id: &str) -> IdSet {
        let mut ids = self.0.clone();
        if !self.contains(id) {
            ids.push(id.to_string());
        }
        IdSet(ids)
    }

    pub fn without(&self, id: &str) -> IdSet {
        IdSet(self.0.iter().filter(|e| *e != id).cloned().collect())
    }

    pub fn cleared(&self) -> IdSet {
        IdSet::new()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for IdSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut ids: Vec<String> = Vec::new();
        for id in iter {
            let id = id.into();
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        IdSet(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let set = IdSet::new().toggled("voyager");
        assert!(set.contains("voyager"));
        let set = set.toggled("voyager");
        assert!(set.is_empty());
    }

    #[test]
    fn toggle_leaves_original_untouched() {
        let original: IdSet = ["a", "b"].into_iter().collect();
        let toggled = original.toggled("a");
        assert!(original.contains("a"));
        assert!(!toggled.contains("a"));
    }

    #[test]
    fn with_is_idempotent_and_keeps_order() {
        let set = IdSet::new().with("b").with("a").with("b");
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn toggling_a_member_twice_gives_an_equal_set() {
        let original: IdSet = ["a", "b"].into_iter().collect();
        let round_trip = original.toggled("a").toggled("a");
        assert_eq!(round_trip, original);
        // Iteration still follows insertion order
        assert_eq!(round_trip.iter().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn equality_needs_the_same_members() {
        let ab: IdSet = ["a", "b"].into_iter().collect();
        let ba: IdSet = ["b", "a"].into_iter().collect();
        let ac: IdSet = ["a", "c"].into_iter().collect();
        let a: IdSet = ["a"].into_iter().collect();
        assert_eq!(ab, ba);
        assert_ne!(ab, ac);
        assert_ne!(ab, a);
        assert_ne!(a, ab);
    }

    #[test]
    fn from_iter_dedups() {
        let set: IdSet = vec!["x", "y", "x"].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn serializes_as_plain_array() {
        let set: IdSet = ["ncc-1701", "nx-01"].into_iter().collect();
        assert_eq!(
            serde_json::to_string(&set).unwrap(),
            r#"["ncc-1701","nx-01"]"#
        );
        let back: IdSet = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert!(back.contains("b"));
    }

    #[test]
    fn cleared_is_empty() {
        let set: IdSet = ["a"].into_iter().collect();
        assert!(set.cleared().is_empty());
    }
}
