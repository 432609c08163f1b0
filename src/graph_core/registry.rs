//! All-time vertex registry for the co-occurrence graph

use std::collections::{BTreeSet, HashSet};

/// Deduplicated set of every hashtag ever accepted, in arrival order
///
/// The registry only grows: vertices persist even after every record that
/// mentioned them has been evicted from the window. Insertion order is
/// deterministic (record arrival order, tags within a record in sorted
/// order), which keeps runs reproducible.
#[derive(Debug, Default)]
pub struct VertexRegistry {
    seen: HashSet<String>,
    order: Vec<String>,
}

impl VertexRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the tags of an accepted record, skipping those already present
    pub fn extend(&mut self, tags: &BTreeSet<String>) {
        for tag in tags {
            if self.seen.insert(tag.clone()) {
                self.order.push(tag.clone());
            }
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.seen.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Vertices in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.order.iter()
    }
}
