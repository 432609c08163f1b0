//! Per-line processing pipeline for the degree stream

use super::degree::DegreeCalculator;
use super::edges::EdgeSetBuilder;
use super::extractor::RecordExtractor;
use super::registry::VertexRegistry;
use super::window::SlidingWindow;

/// Owns the run-scoped graph state and drives one line at a time
///
/// Vertices accumulate for the whole run while edges are derived only from
/// the trailing window; the two containers are deliberately independent.
/// One accepted line produces exactly one average, in input order.
pub struct DegreePipeline {
    extractor: RecordExtractor,
    registry: VertexRegistry,
    window: SlidingWindow,
    edges: EdgeSetBuilder,
    degrees: DegreeCalculator,
}

impl DegreePipeline {
    pub fn new(window_secs: i64) -> Self {
        Self {
            extractor: RecordExtractor::new(),
            registry: VertexRegistry::new(),
            window: SlidingWindow::new(window_secs),
            edges: EdgeSetBuilder::new(),
            degrees: DegreeCalculator::new(),
        }
    }

    /// Process one input line
    ///
    /// Returns the recomputed average degree for an accepted line, or
    /// `None` when the line is dropped (fewer than two distinct hashtags).
    /// Dropped lines leave the registry and window untouched.
    pub fn process_line(&mut self, line: &str) -> Option<f64> {
        let record = match self.extractor.extract(line) {
            Some(record) => record,
            None => {
                log::debug!("Dropping line without enough distinct hashtags");
                return None;
            }
        };

        self.registry.extend(&record.tags);
        self.window.push(record);

        let edges = self.edges.build(&self.window);
        Some(self.degrees.average_degree(&self.registry, &edges))
    }

    pub fn vertex_count(&self) -> usize {
        self.registry.len()
    }

    pub fn window_len(&self) -> usize {
        self.window.len()
    }
}
