// ABOUTME: Error taxonomy for the workout retrieval and enrichment pipeline
// ABOUTME: Distinguishes network failures from page-structure parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pipeline error types.
//!
//! Two failure classes exist: [`FetchError`] for anything network-layer
//! (timeouts, refused connections, non-2xx statuses) and [`ParseError`] for
//! upstream content that no longer matches the expected structure. Missing
//! per-row inputs are not errors at all; the enricher propagates them as
//! `None` columns.

use thiserror::Error;

/// Network-layer failure during profile-page or API retrieval.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be completed (timeout, DNS, connection refused).
    #[error("request to {url} failed")]
    Request {
        /// URL of the failed request.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The upstream answered with a non-success status.
    #[error("{url} returned status {status}")]
    Status {
        /// URL of the failed request.
        url: String,
        /// HTTP status code received.
        status: u16,
        /// Response body, truncated, for diagnostics.
        body: String,
    },
}

/// Upstream content did not match the expected structure.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The profile page no longer embeds the bootstrap assignment.
    #[error("bootstrap data missing")]
    BootstrapMissing,

    /// The bootstrap assignment was found but is not valid JSON.
    #[error("malformed bootstrap JSON")]
    MalformedBootstrap(#[source] serde_json::Error),

    /// No bootstrap entry carried a usable account identifier.
    #[error("account id not found")]
    AccountIdNotFound,

    /// An API page returned a body that is not the expected JSON shape.
    #[error("workouts page at offset {offset} returned non-JSON content")]
    PayloadNotJson {
        /// Pagination offset of the bad page.
        offset: usize,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },
}

/// Any terminal pipeline failure.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Network-layer failure.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Page-structure failure.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PipelineError>;
