//! Additive tag merging.
//!
//! Tag files target shared platform namespaces ("planks", "wooden_doors",
//! ...). Merging is always an additive union: an insert can add ids to a
//! namespace but can never remove or replace what another declaration
//! already put there. Entries are kept sorted for stable output.

use crate::core::types::Slug;
use std::collections::{BTreeMap, BTreeSet};

/// A set of tag namespaces, each holding a sorted, deduplicated id set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagSet {
    namespaces: BTreeMap<String, BTreeSet<Slug>>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Additively merge one id into a namespace.
    pub fn add(&mut self, namespace: &str, id: Slug) {
        self.namespaces
            .entry(namespace.to_string())
            .or_default()
            .insert(id);
    }

    /// Additively merge another tag set into this one.
    pub fn merge(&mut self, other: &TagSet) {
        for (namespace, ids) in &other.namespaces {
            let entry = self.namespaces.entry(namespace.clone()).or_default();
            for id in ids {
                entry.insert(id.clone());
            }
        }
    }

    pub fn get(&self, namespace: &str) -> Option<&BTreeSet<Slug>> {
        self.namespaces.get(namespace)
    }

    /// Iterate namespaces in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<Slug>)> {
        self.namespaces.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_additive_not_destructive() {
        let mut tags = TagSet::new();
        tags.add("planks", Slug::from_text("maple planks"));
        tags.add("planks", Slug::from_text("birch planks"));
        let planks = tags.get("planks").unwrap();
        assert_eq!(planks.len(), 2);
    }

    #[test]
    fn test_merge_unions() {
        let mut a = TagSet::new();
        a.add("planks", Slug::from_text("maple planks"));
        let mut b = TagSet::new();
        b.add("planks", Slug::from_text("ghost planks"));
        b.add("boats", Slug::from_text("ghost boat"));
        a.merge(&b);
        assert_eq!(a.get("planks").unwrap().len(), 2);
        assert_eq!(a.get("boats").unwrap().len(), 1);
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let mut tags = TagSet::new();
        tags.add("planks", Slug::from_text("maple planks"));
        tags.add("planks", Slug::from_text("maple planks"));
        assert_eq!(tags.get("planks").unwrap().len(), 1);
    }
}
