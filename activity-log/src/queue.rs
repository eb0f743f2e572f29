use std::collections::VecDeque;

use match_error::{MatchError, Result};

use crate::entry::ActivityEntry;

/// How many entries a single user's log retains.
pub const HISTORY_CAPACITY: usize = 10;

/// Bounded per-user activity trail.
///
/// A FIFO queue capped at [`HISTORY_CAPACITY`] entries; enqueueing onto a
/// full log evicts the oldest entry first, so the log always holds the most
/// recent actions. Not internally synchronized; [`crate::ActivityRegistry`]
/// wraps each log in its own lock.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
    capacity: usize,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    /// Log with a non-default capacity, for tests and future tuning
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an entry, evicting the oldest one when the log is full.
    /// Never fails; the log never exceeds its capacity.
    pub fn enqueue(&mut self, entry: ActivityEntry) {
        if self.entries.len() >= self.capacity {
            let evicted = self.entries.pop_front();
            if let Some(old) = evicted {
                log::debug!(
                    "activity log full, evicting oldest entry: {}",
                    old.activity
                );
            }
        }
        self.entries.push_back(entry);
    }

    /// Remove and return the oldest entry
    pub fn dequeue(&mut self) -> Result<ActivityEntry> {
        self.entries.pop_front().ok_or(MatchError::EmptyQueue)
    }

    /// Snapshot of all retained entries, oldest first. Empty log yields
    /// an empty vector.
    pub fn entries(&self) -> Vec<ActivityEntry> {
        self.entries.iter().cloned().collect()
    }

    /// Snapshot in display order, newest first
    pub fn entries_newest_first(&self) -> Vec<ActivityEntry> {
        self.entries.iter().rev().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use match_error::MatchError;
    use quickcheck_macros::quickcheck;

    fn tagged(tag: usize) -> ActivityEntry {
        ActivityEntry {
            time: "2024-07-01 3:04PM".to_string(),
            activity: tag.to_string(),
        }
    }

    #[test]
    fn size_tracks_enqueues_up_to_capacity() {
        let mut history = ActivityLog::new();
        for i in 1..=10 {
            history.enqueue(tagged(i));
            assert_eq!(history.len(), i);
        }
        for i in 11..=14 {
            history.enqueue(tagged(i));
            assert_eq!(history.len(), 10);
        }
    }

    #[test]
    fn eviction_is_oldest_first() {
        let mut history = ActivityLog::new();
        for i in 1..=14 {
            history.enqueue(tagged(i));
        }
        let retained: Vec<String> = history
            .entries()
            .into_iter()
            .map(|e| e.activity)
            .collect();
        let expected: Vec<String> = (5..=14).map(|i| i.to_string()).collect();
        assert_eq!(retained, expected);
    }

    #[test]
    fn dequeue_returns_front_and_shrinks() {
        let mut history = ActivityLog::new();
        for i in 1..=10 {
            history.enqueue(tagged(i));
        }
        for i in 1..=10 {
            let front = history.dequeue().expect("log should not be empty");
            assert_eq!(front.activity, i.to_string());
            assert_eq!(history.len(), 10 - i);
        }
        assert!(history.is_empty());
    }

    #[test]
    fn dequeue_on_empty_fails_repeatably() {
        let mut history = ActivityLog::new();
        assert!(matches!(history.dequeue(), Err(MatchError::EmptyQueue)));
        assert!(matches!(history.dequeue(), Err(MatchError::EmptyQueue)));
    }

    #[test]
    fn empty_log_yields_empty_snapshot() {
        let history = ActivityLog::new();
        assert!(history.entries().is_empty());
        assert!(history.entries_newest_first().is_empty());
    }

    #[test]
    fn snapshot_accumulates_in_insertion_order() {
        let mut history = ActivityLog::new();
        for i in 1..=10 {
            history.enqueue(tagged(i));
            let all = history.entries();
            assert_eq!(all.len(), i);
            assert_eq!(all[i - 1], tagged(i));
        }
    }

    #[test]
    fn newest_first_reverses_insertion_order() {
        let mut history = ActivityLog::new();
        for i in 1..=3 {
            history.enqueue(tagged(i));
        }
        let display: Vec<String> = history
            .entries_newest_first()
            .into_iter()
            .map(|e| e.activity)
            .collect();
        assert_eq!(display, vec!["3", "2", "1"]);
    }

    #[quickcheck]
    fn capacity_invariant(tags: Vec<u32>) -> bool {
        let mut history = ActivityLog::new();
        for tag in &tags {
            history.enqueue(tagged(*tag as usize));
        }
        let expected = tags.len().min(HISTORY_CAPACITY);
        history.len() == expected && history.entries().len() == expected
    }
}
