// ABOUTME: End-to-end pipeline orchestrator with per-user memoization
// ABOUTME: Resolve, fetch, flatten, enrich; repeated runs for a user hit the cache

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pipeline orchestration.
//!
//! [`Pipeline`] owns a [`WorkoutSource`], the exercise reference table, and
//! two memoization maps: username to account id, and account id to the
//! finished run. A repeated request for the same username performs no
//! upstream I/O until the caller invalidates it. Cached outcomes include
//! truncated ones; a partial history is still a history, and re-fetching it
//! automatically would hammer an upstream that just failed. Cancelled runs
//! are never cached.

use crate::config::PipelineConfig;
use crate::enrich::{self, summarize_hard_sets, HardSetSummary};
use crate::errors::Result;
use crate::flatten::flatten;
use crate::models::{AccountId, EnrichedRow};
use crate::reference::ExerciseReference;
use crate::source::{fetch_all_workouts, FetchOptions, FetchStatus, WorkoutSource};
use crate::strengthlevel::StrengthLevelSource;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::info;

/// How a pipeline run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    /// The full history was fetched and enriched.
    Complete,
    /// Pagination stopped early; the rows cover a prefix of the history.
    Partial {
        /// Description of the failure that truncated the fetch.
        error: String,
    },
    /// The run was cancelled between page requests.
    Cancelled,
    /// The account resolved but has no logged workouts.
    NoWorkouts,
}

/// Result of one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// Enriched set-level rows, in upstream order.
    pub rows: Vec<EnrichedRow>,
    /// How the run ended.
    pub status: RunStatus,
    /// Number of workouts the rows were derived from.
    pub workouts: usize,
}

impl PipelineOutcome {
    /// Hard-set summary over this outcome's rows, using the built-in RIR
    /// range.
    #[must_use]
    pub fn hard_sets(&self) -> Vec<HardSetSummary> {
        summarize_hard_sets(&self.rows, crate::constants::formula::HARD_SET_RIR_RANGE)
    }
}

/// Resolve-fetch-flatten-enrich pipeline with per-user memoization.
pub struct Pipeline<S> {
    source: S,
    reference: ExerciseReference,
    options: FetchOptions,
    account_ids: Mutex<HashMap<String, AccountId>>,
    outcomes: Mutex<HashMap<AccountId, PipelineOutcome>>,
}

impl Pipeline<StrengthLevelSource> {
    /// Production pipeline against the live upstream, configured from
    /// `config` with the built-in reference table.
    #[must_use]
    pub fn from_config(config: PipelineConfig) -> Self {
        let options = FetchOptions {
            page_size: config.page_size,
            page_delay: config.page_delay,
            cancel: None,
        };
        Self::new(
            StrengthLevelSource::new(config),
            ExerciseReference::builtin(),
            options,
        )
    }
}

impl<S: WorkoutSource> Pipeline<S> {
    /// Build a pipeline over an arbitrary source. Tests pass fakes here.
    #[must_use]
    pub fn new(source: S, reference: ExerciseReference, options: FetchOptions) -> Self {
        Self {
            source,
            reference,
            options,
            account_ids: Mutex::new(HashMap::new()),
            outcomes: Mutex::new(HashMap::new()),
        }
    }

    /// Run the pipeline for a public username, returning the memoized
    /// outcome when one exists. Complete, partial, and empty outcomes are
    /// memoized; cancelled outcomes are not, so a run after the caller
    /// clears their cancel flag fetches fresh data.
    ///
    /// # Errors
    ///
    /// Fails when the username cannot be resolved to an account id or the
    /// very first history page cannot be fetched. Later page failures
    /// surface as [`RunStatus::Partial`] instead.
    pub fn run(&self, username: &str) -> Result<PipelineOutcome> {
        let account_id = self.account_id_for(username)?;

        if let Some(cached) = self.cached_outcome(&account_id) {
            info!(%username, "serving memoized outcome");
            return Ok(cached);
        }

        let history = fetch_all_workouts(&self.source, &account_id, &self.options)?;
        let workouts = history.workouts.len();
        let rows = enrich::enrich(flatten(&history.workouts), &self.reference);

        let status = match history.status {
            FetchStatus::Complete if workouts == 0 => RunStatus::NoWorkouts,
            FetchStatus::Complete => RunStatus::Complete,
            FetchStatus::Truncated { error } => RunStatus::Partial { error },
            FetchStatus::Cancelled => RunStatus::Cancelled,
        };

        let outcome = PipelineOutcome {
            rows,
            status,
            workouts,
        };
        // Truncated runs are memoized (re-fetching would hammer an upstream
        // that just failed); cancelled runs are not, since cancellation is
        // caller intent and the next run should fetch fresh.
        if outcome.status != RunStatus::Cancelled {
            if let Ok(mut outcomes) = self.outcomes.lock() {
                outcomes.insert(account_id, outcome.clone());
            }
        }
        Ok(outcome)
    }

    /// Drop cached state for one username. The next [`run`](Self::run) for
    /// it re-resolves and re-fetches.
    pub fn invalidate(&self, username: &str) {
        let account_id = match self.account_ids.lock() {
            Ok(mut ids) => ids.remove(username),
            Err(_) => None,
        };
        if let (Some(account_id), Ok(mut outcomes)) = (account_id, self.outcomes.lock()) {
            outcomes.remove(&account_id);
        }
    }

    /// Drop all cached state.
    pub fn clear_cache(&self) {
        if let Ok(mut ids) = self.account_ids.lock() {
            ids.clear();
        }
        if let Ok(mut outcomes) = self.outcomes.lock() {
            outcomes.clear();
        }
    }

    /// Borrow the underlying source. Lets callers inspect fakes in tests
    /// without threading a second handle around.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    fn account_id_for(&self, username: &str) -> Result<AccountId> {
        if let Ok(ids) = self.account_ids.lock() {
            if let Some(id) = ids.get(username) {
                return Ok(id.clone());
            }
        }
        let account_id = self.source.resolve_account_id(username)?;
        if let Ok(mut ids) = self.account_ids.lock() {
            ids.insert(username.to_owned(), account_id.clone());
        }
        Ok(account_id)
    }

    fn cached_outcome(&self, account_id: &AccountId) -> Option<PipelineOutcome> {
        self.outcomes
            .lock()
            .ok()
            .and_then(|outcomes| outcomes.get(account_id).cloned())
    }
}
