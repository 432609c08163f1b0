//! Edge set derivation from the current window

use super::types::TagPair;
use super::window::SlidingWindow;
use std::collections::HashSet;

/// Builds the deduplicated edge set of the windowed graph
///
/// The edge set is ephemeral: it is rebuilt from scratch from every record
/// still in the window each time a record is accepted. A pair that
/// co-occurs in several retained records contributes a single edge.
pub struct EdgeSetBuilder;

impl EdgeSetBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, window: &SlidingWindow) -> HashSet<TagPair> {
        window
            .iter()
            .flat_map(|record| record.edges.iter().cloned())
            .collect()
    }
}

impl Default for EdgeSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}
