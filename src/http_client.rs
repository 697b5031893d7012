// ABOUTME: Blocking HTTP client constructors with explicit timeouts
// ABOUTME: One pooled client per purpose, reused for the lifetime of a pipeline run
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client construction.
//!
//! The pipeline is synchronous by design, so clients come from reqwest's
//! blocking module. Every client carries an explicit request timeout and the
//! configured browser-identifying user agent; timeout expiry surfaces as the
//! same transport error as any other network failure.

use crate::constants::fetch_limits;
use reqwest::blocking::{Client, ClientBuilder};
use std::time::Duration;

/// Build a pooled blocking client with the given timeout and user agent.
///
/// Falls back to a default client if the builder rejects the configuration;
/// a default client still honors per-request behavior, only the tuning is
/// lost.
#[must_use]
pub fn client_with_timeout(timeout: Duration, user_agent: &str) -> Client {
    ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(fetch_limits::CONNECT_TIMEOUT)
        .user_agent(user_agent)
        .build()
        .unwrap_or_else(|_| Client::new())
}
