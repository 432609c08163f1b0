//! Trailing window of accepted records with front eviction

use super::types::PostRecord;
use std::collections::VecDeque;

/// Ordered buffer of recently accepted records
///
/// On every push the front is evicted while the newest record is more than
/// `window_secs` ahead of the oldest one AND strictly newer than it. The
/// second half of the guard means a record arriving with an older-or-equal
/// timestamp than the current front never evicts anything, however large
/// the raw difference — the window only moves when time moves forward.
/// That gap under non-monotonic timestamps is the documented contract, not
/// an oversight.
#[derive(Debug)]
pub struct SlidingWindow {
    records: VecDeque<PostRecord>,
    window_secs: i64,
}

impl SlidingWindow {
    pub fn new(window_secs: i64) -> Self {
        Self {
            records: VecDeque::new(),
            window_secs,
        }
    }

    /// Append a record, then evict stale records from the front
    pub fn push(&mut self, record: PostRecord) {
        self.records.push_back(record);

        while self.records.len() >= 2 {
            let newest = self.records.back().map(PostRecord::epoch_secs).unwrap_or(0);
            let oldest = self.records.front().map(PostRecord::epoch_secs).unwrap_or(0);

            if newest - oldest > self.window_secs && newest > oldest {
                self.records.pop_front();
            } else {
                break;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records currently retained, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &PostRecord> {
        self.records.iter()
    }
}
