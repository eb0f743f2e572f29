use std::sync::Arc;

use activity_log::{ActivityEntry, ActivityRegistry};
use match_error::Result;
use profile_filter::{FilterEngine, FilterQuery, ProfileMap};
use tokio::sync::RwLock;

use crate::action::UserAction;
use crate::session::SessionRegistry;
use crate::source::ProfileSource;

/// Everything a request handler needs, constructed once at startup and
/// passed in by handle. Replaces the process-wide registry globals of the
/// original design.
#[derive(Debug, Default)]
pub struct AppContext {
    history: ActivityRegistry,
    sessions: SessionRegistry,
    engine: FilterEngine,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context whose filter passes are bounded by `timeout`
    pub fn with_filter_timeout(timeout: std::time::Duration) -> Self {
        Self {
            engine: FilterEngine::with_timeout(timeout),
            ..Self::default()
        }
    }

    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    /// Record an action into the user's activity log
    pub fn record_action(&self, username: &str, action: UserAction) {
        self.history.record(username, action.to_string());
    }

    /// The user's activity trail in display order, newest first
    pub fn activity_for(&self, username: &str) -> Vec<ActivityEntry> {
        self.history.entries_newest_first(username)
    }

    /// The index-page flow: snapshot the public profiles, apply whichever
    /// criteria the request supplied, and return the filtered listing.
    ///
    /// When at least one criterion was active and a viewer is logged in,
    /// exactly one `Filter: …` entry is appended to the viewer's activity
    /// log. An unfiltered view appends nothing.
    pub async fn browse(
        &self,
        viewer: Option<&str>,
        source: &impl ProfileSource,
        query: &FilterQuery,
    ) -> Result<ProfileMap> {
        let snapshot = source.all_public_profiles()?;
        let criteria = query.criteria();
        if criteria.is_empty() {
            return Ok(snapshot);
        }

        let profiles = Arc::new(RwLock::new(snapshot));
        let summary = self
            .engine
            .run(Arc::clone(&profiles), &criteria)
            .await?;

        if let (Some(viewer), Some(summary)) = (viewer, summary) {
            self.record_action(viewer, UserAction::Filter(summary));
        }

        // all criterion tasks joined, so this is normally the last handle
        let filtered = match Arc::try_unwrap(profiles) {
            Ok(lock) => lock.into_inner(),
            Err(shared) => shared.read().await.clone(),
        };
        Ok(filtered)
    }
}
