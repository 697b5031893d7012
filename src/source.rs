// ABOUTME: Workout source trait and the paginated history fetch driver
// ABOUTME: Handles termination, partial-failure tolerance, politeness delay, and cancellation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Workout source abstraction and pagination.
//!
//! [`WorkoutSource`] is the seam between the pipeline and the upstream
//! service: the production implementation lives in
//! [`crate::strengthlevel`], tests substitute fakes. The pagination driver
//! [`fetch_all_workouts`] is deliberately best-effort: a long history
//! partially fetched is still useful, so a page failure after the first
//! successful page truncates instead of discarding.

use crate::errors::Result;
use crate::models::{AccountId, WorkoutRecord, WorkoutsPage};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Upstream access used by the pipeline.
pub trait WorkoutSource {
    /// Resolve a public username to the internal account identifier.
    ///
    /// # Errors
    ///
    /// Returns a `FetchError` on network failure and a `ParseError` when the
    /// profile page lacks usable bootstrap data. Both are terminal for the
    /// run; no workouts can be identified without an account id.
    fn resolve_account_id(&self, username: &str) -> Result<AccountId>;

    /// Fetch one page of workout history.
    ///
    /// # Errors
    ///
    /// Returns a `FetchError` on network failure and a `ParseError` when the
    /// page body is not the expected JSON shape.
    fn fetch_page(&self, account_id: &AccountId, offset: usize, limit: usize)
        -> Result<WorkoutsPage>;
}

/// Knobs of the pagination loop.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Records requested per page.
    pub page_size: usize,
    /// Politeness delay between consecutive page requests. Zero under test.
    pub page_delay: Duration,
    /// External cancellation signal, checked before each page request.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl FetchOptions {
    /// Options with the given page size and no delay or cancellation.
    #[must_use]
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    fn cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// How a pagination run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    /// Every page was retrieved.
    Complete,
    /// A page failed after at least one successful page; the accumulated
    /// workouts were kept.
    Truncated {
        /// Description of the failure that stopped pagination.
        error: String,
    },
    /// The caller's cancellation flag was raised between pages.
    Cancelled,
}

/// Accumulated result of a pagination run.
#[derive(Debug, Clone)]
pub struct FetchedHistory {
    /// Workouts in server-returned order.
    pub workouts: Vec<WorkoutRecord>,
    /// How the run ended.
    pub status: FetchStatus,
    /// Number of pages successfully fetched.
    pub pages_fetched: usize,
}

/// Retrieve the complete workout history for an account.
///
/// Pagination stops when a page comes back empty or short (fewer records
/// than requested); either condition alone signals the last page, and
/// continuing past one risks looping forever against a backend that echoes
/// its final page. A single failed page ends the run without retry.
///
/// # Errors
///
/// Returns an error only when the very first page fails; afterwards
/// failures are reported through [`FetchStatus::Truncated`].
pub fn fetch_all_workouts(
    source: &dyn WorkoutSource,
    account_id: &AccountId,
    options: &FetchOptions,
) -> Result<FetchedHistory> {
    let limit = options.page_size.max(1);
    let mut workouts: Vec<WorkoutRecord> = Vec::new();
    let mut offset = 0;
    let mut pages_fetched = 0;

    let status = loop {
        if options.cancelled() {
            info!(pages_fetched, "fetch cancelled between pages");
            break FetchStatus::Cancelled;
        }

        if pages_fetched > 0 && !options.page_delay.is_zero() {
            thread::sleep(options.page_delay);
        }

        match source.fetch_page(account_id, offset, limit) {
            Ok(page) => {
                let received = page.data.len();
                debug!(offset, received, "fetched workouts page");
                workouts.extend(page.data);
                pages_fetched += 1;

                if received == 0 || received < limit {
                    break FetchStatus::Complete;
                }
                offset += limit;
            }
            Err(err) => {
                if pages_fetched == 0 {
                    return Err(err);
                }
                warn!(
                    offset,
                    pages_fetched,
                    error = %err,
                    "page fetch failed, keeping partial history"
                );
                break FetchStatus::Truncated {
                    error: err.to_string(),
                };
            }
        }
    };

    info!(
        workouts = workouts.len(),
        pages_fetched,
        complete = matches!(status, FetchStatus::Complete),
        "workout history fetch finished"
    );

    Ok(FetchedHistory {
        workouts,
        status,
        pages_fetched,
    })
}
