//! Average vertex degree of the windowed co-occurrence graph

use super::registry::VertexRegistry;
use super::types::TagPair;
use std::collections::{HashMap, HashSet};

/// Computes the average degree of the graph snapshot
///
/// The vertex set is the all-time registry, so vertices whose edges have
/// been evicted from the window sit in the graph isolated at degree 0 and
/// still dilute the average. Self-loops and multi-edges cannot occur: edges
/// come from 2-combinations of a record's own deduplicated tag set and the
/// edge set itself is deduplicated.
pub struct DegreeCalculator;

impl DegreeCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Average degree over all registered vertices, rounded to 2 decimals
    ///
    /// An empty registry yields 0 rather than a division error.
    pub fn average_degree(&self, vertices: &VertexRegistry, edges: &HashSet<TagPair>) -> f64 {
        if vertices.is_empty() {
            return 0.0;
        }

        let mut degrees: HashMap<&str, usize> =
            vertices.iter().map(|v| (v.as_str(), 0)).collect();

        for edge in edges {
            let (a, b) = edge.endpoints();
            if let Some(count) = degrees.get_mut(a) {
                *count += 1;
            }
            if let Some(count) = degrees.get_mut(b) {
                *count += 1;
            }
        }

        let total: usize = degrees.values().sum();
        round2(total as f64 / degrees.len() as f64)
    }
}

impl Default for DegreeCalculator {
    fn default() -> Self {
        Self::new()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn registry_of(tags: &[&str]) -> VertexRegistry {
        let mut registry = VertexRegistry::new();
        let tags: BTreeSet<String> = tags.iter().map(|t| t.to_string()).collect();
        registry.extend(&tags);
        registry
    }

    #[test]
    fn test_empty_graph_is_zero() {
        let calculator = DegreeCalculator::new();
        let average = calculator.average_degree(&VertexRegistry::new(), &HashSet::new());
        assert_eq!(average, 0.0);
    }

    #[test]
    fn test_single_edge_pair() {
        let calculator = DegreeCalculator::new();
        let registry = registry_of(&["#cats", "#dogs"]);
        let edges: HashSet<TagPair> = [TagPair::new("#cats", "#dogs")].into_iter().collect();

        assert_eq!(calculator.average_degree(&registry, &edges), 1.0);
    }

    #[test]
    fn test_isolated_vertices_dilute_the_average() {
        // Three registered vertices, one edge: 2/3 rounded to 0.67
        let calculator = DegreeCalculator::new();
        let registry = registry_of(&["#cats", "#dogs", "#birds"]);
        let edges: HashSet<TagPair> = [TagPair::new("#cats", "#birds")].into_iter().collect();

        assert_eq!(calculator.average_degree(&registry, &edges), 0.67);
    }

    #[test]
    fn test_triangle_has_degree_two() {
        let calculator = DegreeCalculator::new();
        let registry = registry_of(&["#a", "#b", "#c"]);
        let edges: HashSet<TagPair> = [
            TagPair::new("#a", "#b"),
            TagPair::new("#a", "#c"),
            TagPair::new("#b", "#c"),
        ]
        .into_iter()
        .collect();

        assert_eq!(calculator.average_degree(&registry, &edges), 2.0);
    }

    #[test]
    fn test_average_matches_handshake_identity() {
        // sum(degree) == 2 * |E|, so the average is 2|E| / |V|
        let calculator = DegreeCalculator::new();
        let registry = registry_of(&["#a", "#b", "#c", "#d", "#e"]);
        let edges: HashSet<TagPair> = [
            TagPair::new("#a", "#b"),
            TagPair::new("#b", "#c"),
            TagPair::new("#c", "#d"),
        ]
        .into_iter()
        .collect();

        let expected = (2.0 * edges.len() as f64) / registry.len() as f64;
        assert_eq!(
            calculator.average_degree(&registry, &edges),
            (expected * 100.0).round() / 100.0
        );
    }
}
