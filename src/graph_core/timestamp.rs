//! Raw post timestamp parsing to epoch seconds

use chrono::{Local, NaiveDateTime, ParseError, TimeZone};
use regex::Regex;

/// Format of the raw timestamp after the offset token is removed,
/// e.g. `Mon Mar 28 18:40:00 2016`
const DATE_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// Parses raw post timestamps into epoch seconds
///
/// Feeds carry a numeric `+`/`-` offset token either before the year
/// (Twitter's `created_at`) or trailing. The offset is structurally present
/// but not applied: it is stripped and the remainder is parsed as a naive
/// local datetime.
pub struct TimestampParser {
    offset: Regex,
}

impl TimestampParser {
    pub fn new() -> Self {
        Self {
            offset: Regex::new(r"[+-][0-9]+").expect("offset pattern is valid"),
        }
    }

    /// Parse a raw timestamp string, returning epoch seconds
    pub fn parse(&self, raw: &str) -> Result<i64, ParseError> {
        let stripped = self.offset.replace_all(raw, "");
        let naive = NaiveDateTime::parse_from_str(stripped.trim(), DATE_FORMAT)?;

        let epoch = Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.timestamp())
            .unwrap_or_else(|| naive.and_utc().timestamp());

        Ok(epoch)
    }
}

impl Default for TimestampParser {
    fn default() -> Self {
        Self::new()
    }
}
