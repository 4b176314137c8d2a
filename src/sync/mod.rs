//! Gap-filling synchronization between the Caixa API and the local store.
//!
//! One run walks the state machine
//! `Idle -> Discovering -> Downloading -> Merging -> Done | PartialFailure`:
//! discover the latest contest, diff `1..=latest` against the store, fetch
//! the missing contests through a bounded pool of concurrent requests, then
//! merge and rewrite the store under an exclusive lock. Contests that fail
//! to fetch stay missing and are picked up by a future run; there is no
//! retry loop.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use futures::stream::{self, StreamExt};
use rand::seq::SliceRandom;

use crate::caixa::FetchDraws;
use crate::cli::types::ContestNumber;
use crate::error::{LotoError, Result};
use crate::store::{Draw, DrawStore};

/// Default size of the concurrent fetch pool.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Receives free-form status messages as the run progresses.
pub type StatusCallback<'a> = dyn FnMut(&str) + 'a;

/// Receives `(percent_complete, contest_number)` after each stored fetch.
pub type ProgressCallback<'a> = dyn FnMut(f64, ContestNumber) + 'a;

/// Final state of a synchronization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// The store holds every contest in `1..=latest`.
    Done,
    /// The API was unreachable, or some contests could not be fetched.
    PartialFailure,
}

/// Outcome of one synchronization run.
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub state: SyncState,
    /// Latest contest the API reported, if discovery succeeded.
    pub latest: Option<ContestNumber>,
    /// How many new draws this run added to the store.
    pub fetched: usize,
    /// Contests still absent after the run, sorted ascending.
    pub still_missing: Vec<ContestNumber>,
}

impl SyncReport {
    fn unreachable_api() -> Self {
        Self {
            state: SyncState::PartialFailure,
            latest: None,
            fetched: 0,
            still_missing: Vec::new(),
        }
    }
}

/// Tunables for a synchronization run.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Upper bound on in-flight requests.
    pub concurrency: usize,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

/// Owns a fetcher and the store and drives runs against them.
///
/// The store sits behind a mutex held across the merge-and-save step, so a
/// `Synchronizer` shared between tasks serializes its rewrites. External
/// readers of the store file get no isolation beyond that.
pub struct Synchronizer<F> {
    fetcher: F,
    store: Mutex<DrawStore>,
}

impl<F: FetchDraws> Synchronizer<F> {
    pub fn new(fetcher: F, store: DrawStore) -> Self {
        Self {
            fetcher,
            store: Mutex::new(store),
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    fn store(&self) -> MutexGuard<'_, DrawStore> {
        // A poisoned lock means a prior save panicked; the store file itself
        // is still usable.
        self.store.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn total(&self) -> usize {
        self.store().total()
    }

    pub fn latest(&self) -> Option<ContestNumber> {
        self.store().latest()
    }

    pub fn all_draws(&self) -> Result<Vec<Draw>> {
        self.store().all_draws()
    }

    /// Run one synchronization with default options.
    pub async fn synchronize(
        &self,
        on_status: &mut StatusCallback<'_>,
        on_progress: &mut ProgressCallback<'_>,
    ) -> Result<SyncReport> {
        self.synchronize_with(&SyncOptions::default(), on_status, on_progress)
            .await
    }

    /// Run one synchronization.
    ///
    /// Returns `Err` only when the store cannot be written (or, under the
    /// strict line policy, cannot be parsed); everything else - unreachable
    /// API, individual fetch failures, an unreadable store file - degrades
    /// into the report and status stream.
    pub async fn synchronize_with(
        &self,
        options: &SyncOptions,
        on_status: &mut StatusCallback<'_>,
        on_progress: &mut ProgressCallback<'_>,
    ) -> Result<SyncReport> {
        // Discovering: the latest contest bounds the expected range.
        on_status("Fetching the latest contest from the draws API...");
        let latest = match self.fetcher.latest().await {
            Ok(latest) => latest,
            Err(e) => {
                on_status(&format!("Cannot reach the draws API: {e}"));
                return Ok(SyncReport::unreachable_api());
            }
        };
        let latest_contest = latest.draw.contest();
        match &latest.draw_date {
            Some(date) => on_status(&format!("Latest contest: {latest_contest} (drawn {date}).")),
            None => on_status(&format!("Latest contest: {latest_contest}.")),
        }

        // An unreadable store degrades to empty; a malformed line under the
        // strict policy aborts before anything is overwritten.
        let existing = match self.store().load_all() {
            Ok(draws) => draws,
            Err(e @ LotoError::MalformedLine { .. }) => return Err(e),
            Err(e) => {
                on_status(&format!(
                    "Could not read the store ({e}); starting from an empty store."
                ));
                BTreeMap::new()
            }
        };

        let mut missing: Vec<ContestNumber> = (1..=latest_contest.as_u32())
            .map(ContestNumber::new)
            .filter(|contest| !existing.contains_key(contest))
            .collect();

        if missing.is_empty() {
            on_status(&format!(
                "Store complete and consistent: {} contests.",
                existing.len()
            ));
            return Ok(SyncReport {
                state: SyncState::Done,
                latest: Some(latest_contest),
                fetched: 0,
                still_missing: Vec::new(),
            });
        }
        on_status(&format!("{} contests missing from the store.", missing.len()));

        // Randomized dispatch order spreads load across the contest range
        // instead of hammering the API in numeric sequence.
        missing.shuffle(&mut rand::rng());

        // Downloading: bounded pool, completion order is not guaranteed.
        let to_fetch = missing.len();
        let mut fetched: BTreeMap<ContestNumber, Draw> = BTreeMap::new();
        let mut processed = 0usize;

        let fetcher = &self.fetcher;
        let mut results = stream::iter(
            missing
                .iter()
                .copied()
                .map(|contest| async move { (contest, fetcher.fetch(contest).await) }),
        )
        .buffer_unordered(options.concurrency.max(1));

        while let Some((contest, result)) = results.next().await {
            processed += 1;
            match result {
                Ok(draw) => {
                    fetched.insert(contest, draw);
                    let percent = processed as f64 / to_fetch as f64 * 100.0;
                    on_progress(percent, contest);
                }
                Err(e) => {
                    on_status(&format!(
                        "Contest {contest} could not be fetched: {e}. Skipping."
                    ));
                }
            }
        }

        // Merging: newly fetched draws win over previously stored ones.
        let fetched_count = fetched.len();
        on_status(&format!(
            "Merging {fetched_count} new draws into the store..."
        ));

        let mut merged = existing;
        merged.extend(fetched);

        {
            let store = self.store();
            store.save(merged.values())?;
        }

        let still_missing: Vec<ContestNumber> = (1..=latest_contest.as_u32())
            .map(ContestNumber::new)
            .filter(|contest| !merged.contains_key(contest))
            .collect();

        let state = if still_missing.is_empty() {
            on_status(&format!(
                "Store complete and consistent: {} contests.",
                merged.len()
            ));
            SyncState::Done
        } else {
            on_status(&format!(
                "Still missing {} contests: {:?}. Run again later to fill them in.",
                still_missing.len(),
                still_missing.iter().map(|c| c.as_u32()).collect::<Vec<_>>()
            ));
            SyncState::PartialFailure
        };

        Ok(SyncReport {
            state,
            latest: Some(latest_contest),
            fetched: fetched_count,
            still_missing,
        })
    }
}
