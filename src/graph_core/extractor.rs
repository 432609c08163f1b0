//! Per-line record extraction: hashtags + timestamp annotation → PostRecord

use super::timestamp::TimestampParser;
use super::types::{PostRecord, PostTimestamp};
use regex::Regex;
use std::collections::BTreeSet;

/// Parses one normalized input line into a `PostRecord`
///
/// A line is accepted only when it yields strictly more than one distinct
/// hashtag; everything else is dropped. A missing or unparseable
/// `(timestamp: …)` annotation never rejects a line — the record falls back
/// to `PostTimestamp::Missing` so the stream keeps moving.
pub struct RecordExtractor {
    hashtag: Regex,
    annotation: Regex,
    timestamps: TimestampParser,
}

impl RecordExtractor {
    pub fn new() -> Self {
        Self {
            hashtag: Regex::new(r"#\w+").expect("hashtag pattern is valid"),
            annotation: Regex::new(r"\(timestamp: (.*)\)").expect("annotation pattern is valid"),
            timestamps: TimestampParser::new(),
        }
    }

    /// Extract a record from one line, or `None` if the line is dropped
    pub fn extract(&self, line: &str) -> Option<PostRecord> {
        let tags: BTreeSet<String> = self
            .hashtag
            .find_iter(line)
            .map(|m| m.as_str().to_lowercase())
            .collect();

        if tags.len() <= 1 {
            return None;
        }

        let timestamp = self
            .annotation
            .captures(line)
            .and_then(|caps| caps.get(1))
            .and_then(|raw| self.timestamps.parse(raw.as_str()).ok())
            .map(PostTimestamp::Parsed)
            .unwrap_or(PostTimestamp::Missing);

        Some(PostRecord::new(tags, timestamp))
    }
}

impl Default for RecordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_core::types::TagPair;

    #[test]
    fn test_two_hashtags_produce_one_edge() {
        let extractor = RecordExtractor::new();
        let record = extractor
            .extract("I like #Cats and #dogs today (timestamp: Mon Mar 28 18:40:00 2016 +0000) ")
            .unwrap();

        let tags: Vec<&str> = record.tags.iter().map(String::as_str).collect();
        assert_eq!(tags, vec!["#cats", "#dogs"]);
        assert_eq!(record.edges.len(), 1);
        assert!(record.edges.contains(&TagPair::new("#cats", "#dogs")));
        assert!(record.timestamp.is_parsed());
    }

    #[test]
    fn test_single_hashtag_is_dropped() {
        let extractor = RecordExtractor::new();
        assert!(extractor
            .extract("#only (timestamp: Mon Mar 28 18:40:00 2016 +0000) ")
            .is_none());
    }

    #[test]
    fn test_no_hashtags_is_dropped() {
        let extractor = RecordExtractor::new();
        assert!(extractor
            .extract("nothing here (timestamp: Mon Mar 28 18:40:00 2016 +0000) ")
            .is_none());
    }

    #[test]
    fn test_case_variants_collapse_to_one_tag() {
        // #Spark and #spark are the same vertex, so the line has one
        // distinct hashtag and is dropped
        let extractor = RecordExtractor::new();
        assert!(extractor
            .extract("#Spark loves #spark (timestamp: Mon Mar 28 18:40:00 2016 +0000) ")
            .is_none());
    }

    #[test]
    fn test_missing_annotation_falls_back_to_zero() {
        let extractor = RecordExtractor::new();
        let record = extractor.extract("#cats #dogs and no annotation").unwrap();

        assert_eq!(record.timestamp, PostTimestamp::Missing);
        assert_eq!(record.epoch_secs(), 0);
    }

    #[test]
    fn test_unparseable_annotation_falls_back_to_zero() {
        let extractor = RecordExtractor::new();
        let record = extractor
            .extract("#cats #dogs (timestamp: whenever) ")
            .unwrap();

        assert_eq!(record.timestamp, PostTimestamp::Missing);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let extractor = RecordExtractor::new();
        let line = "#big #data #graphs (timestamp: Mon Mar 28 18:40:00 2016 +0000) ";

        assert_eq!(extractor.extract(line), extractor.extract(line));
    }

    #[test]
    fn test_three_tags_give_three_edges() {
        let extractor = RecordExtractor::new();
        let record = extractor
            .extract("#big #data #graphs (timestamp: Mon Mar 28 18:40:00 2016 +0000) ")
            .unwrap();

        assert_eq!(record.tags.len(), 3);
        assert_eq!(record.edges.len(), 3);
    }
}
