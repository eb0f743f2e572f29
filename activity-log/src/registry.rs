use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use chrono::Local;

use crate::entry::ActivityEntry;
use crate::queue::ActivityLog;

/// Process-wide collection of activity logs, keyed by username.
///
/// Logs are created lazily on first recorded action and live for the
/// lifetime of the registry. Each log carries its own lock, so two requests
/// touching the same user's log serialize on that log alone instead of on
/// the whole registry.
#[derive(Debug, Default)]
pub struct ActivityRegistry {
    logs: RwLock<HashMap<String, Arc<Mutex<ActivityLog>>>>,
}

impl ActivityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the user's log, creating an empty one on first use
    pub fn log_for(&self, username: &str) -> Arc<Mutex<ActivityLog>> {
        {
            let logs = self.logs.read().expect("registry lock poisoned");
            if let Some(log) = logs.get(username) {
                return Arc::clone(log);
            }
        }
        let mut logs = self.logs.write().expect("registry lock poisoned");
        let log = logs
            .entry(username.to_string())
            .or_insert_with(|| {
                log::debug!("creating activity log for {}", username);
                Arc::new(Mutex::new(ActivityLog::new()))
            });
        Arc::clone(log)
    }

    /// Record an action for the user, stamped with the current local time
    pub fn record(&self, username: &str, activity: impl Into<String>) {
        self.record_entry(username, ActivityEntry::new(activity, Local::now()));
    }

    /// Record a pre-built entry, for callers that stamp their own time
    pub fn record_entry(&self, username: &str, entry: ActivityEntry) {
        let log = self.log_for(username);
        log.lock().expect("activity log lock poisoned").enqueue(entry);
    }

    /// Entries for display, newest first. A user with no log yields an
    /// empty vector and no log is created.
    pub fn entries_newest_first(&self, username: &str) -> Vec<ActivityEntry> {
        let logs = self.logs.read().expect("registry lock poisoned");
        match logs.get(username) {
            Some(log) => log
                .lock()
                .expect("activity log lock poisoned")
                .entries_newest_first(),
            None => Vec::new(),
        }
    }
}
