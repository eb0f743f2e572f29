use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use itertools::Itertools;
use match_error::{MatchError, Result};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::criteria::FilterCriterion;
use crate::record::ProfileRecord;

/// The working listing a filter pass operates on: one request's snapshot of
/// the public profiles, keyed by username.
pub type ProfileMap = HashMap<String, ProfileRecord>;

/// Runs one filter pass per page view.
///
/// Every active criterion gets its own task; all tasks share the request's
/// profile map behind one `RwLock`. A task scans under the read lock,
/// collects the keys that fail its predicate, then applies the deletions in
/// a single write batch. Criteria are conjunctive and deletions idempotent,
/// so the final membership does not depend on task scheduling.
#[derive(Debug, Default)]
pub struct FilterEngine {
    timeout: Option<Duration>,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self { timeout: None }
    }

    /// Engine that aborts outstanding criterion tasks and fails the pass
    /// when it does not complete within `timeout`
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }

    /// Filter against today's date. See [`Self::run_at`].
    pub async fn run(
        &self,
        profiles: Arc<RwLock<ProfileMap>>,
        criteria: &[FilterCriterion],
    ) -> Result<Option<String>> {
        self.run_at(profiles, criteria, Local::now().date_naive())
            .await
    }

    /// Apply all criteria to the shared map, joining every criterion task
    /// before returning. Yields the activity-summary line for the pass,
    /// built in criteria order, or `None` when no criterion was active.
    ///
    /// `today` is the reference date for the day-count arithmetic.
    pub async fn run_at(
        &self,
        profiles: Arc<RwLock<ProfileMap>>,
        criteria: &[FilterCriterion],
        today: NaiveDate,
    ) -> Result<Option<String>> {
        if criteria.is_empty() {
            return Ok(None);
        }

        let handles: Vec<JoinHandle<()>> = criteria
            .iter()
            .cloned()
            .map(|criterion| {
                let profiles = Arc::clone(&profiles);
                tokio::spawn(async move {
                    match criterion {
                        FilterCriterion::MinDaysUnemployed(min_days) => {
                            scan_unemployed(profiles, min_days, today).await
                        }
                        other => scan(profiles, other).await,
                    }
                })
            })
            .collect();

        let abort_handles: Vec<_> = handles
            .iter()
            .map(|handle| handle.abort_handle())
            .collect();
        let join_all = async move {
            for handle in handles {
                handle.await?;
            }
            Ok::<(), MatchError>(())
        };

        match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, join_all).await {
                Ok(joined) => joined?,
                Err(_) => {
                    for handle in &abort_handles {
                        handle.abort();
                    }
                    log::warn!("filter pass exceeded {:?}, aborted", limit);
                    return Err(MatchError::Timeout);
                }
            },
            None => join_all.await?,
        }

        let summary = criteria.iter().map(FilterCriterion::describe).join(" ");
        Ok(Some(summary))
    }
}

/// Scan-then-delete pass for the predicates that need no date arithmetic
async fn scan(profiles: Arc<RwLock<ProfileMap>>, criterion: FilterCriterion) {
    let doomed: Vec<String> = {
        let listing = profiles.read().await;
        listing
            .iter()
            .filter(|(_, record)| !criterion.keeps(record))
            .map(|(username, _)| username.clone())
            .collect()
    };
    if doomed.is_empty() {
        return;
    }
    let mut listing = profiles.write().await;
    for username in &doomed {
        listing.remove(username);
    }
}

/// Day-count pass: annotates every dated record with the whole days elapsed
/// since its unemployment date and drops those below the threshold.
/// Records with an empty date are employed and pass untouched; a date that
/// fails to parse skips that record only.
async fn scan_unemployed(
    profiles: Arc<RwLock<ProfileMap>>,
    min_days: i64,
    today: NaiveDate,
) {
    let mut day_counts: Vec<(String, i64)> = Vec::new();
    let mut doomed: Vec<String> = Vec::new();
    {
        let listing = profiles.read().await;
        for (username, record) in listing.iter() {
            match record.unemployed_since() {
                Ok(None) => {}
                Ok(Some(since)) => {
                    let days = (today - since).num_days();
                    day_counts.push((username.clone(), days));
                    if days < min_days {
                        doomed.push(username.clone());
                    }
                }
                Err(_) => {
                    log::warn!(
                        "skipping {}: unparseable unemployment date {:?}",
                        username,
                        record.unemployed_date
                    );
                }
            }
        }
    }
    if day_counts.is_empty() {
        return;
    }
    let mut listing = profiles.write().await;
    for (username, days) in day_counts {
        if let Some(record) = listing.get_mut(&username) {
            record.unemployed_days = Some(days);
        }
    }
    for username in &doomed {
        listing.remove(username);
    }
}
