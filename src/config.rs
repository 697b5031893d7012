// ABOUTME: Pipeline configuration with built-in defaults and environment overrides
// ABOUTME: Controls upstream base URL, pagination, politeness delay, and timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pipeline configuration.
//!
//! Defaults match the observed upstream behavior; every knob can be
//! overridden through `SL_INSIGHTS_*` environment variables so deployments
//! need no configuration files.

use crate::constants::{fetch_limits, upstream};
use std::env;
use std::time::Duration;

/// Configuration for one pipeline instance.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Base URL of the upstream service.
    pub base_url: String,
    /// Browser-identifying user agent sent with every request.
    pub user_agent: String,
    /// Records requested per API page.
    pub page_size: usize,
    /// Politeness delay between consecutive page requests.
    pub page_delay: Duration,
    /// Timeout for the profile page request.
    pub profile_timeout: Duration,
    /// Timeout for a single API page request.
    pub api_timeout: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            base_url: upstream::BASE_URL.to_owned(),
            user_agent: upstream::USER_AGENT.to_owned(),
            page_size: fetch_limits::DEFAULT_PAGE_SIZE,
            page_delay: fetch_limits::DEFAULT_PAGE_DELAY,
            profile_timeout: fetch_limits::PROFILE_TIMEOUT,
            api_timeout: fetch_limits::API_TIMEOUT,
        }
    }
}

impl PipelineConfig {
    /// Load configuration from environment variables over built-in defaults.
    ///
    /// Recognized variables: `SL_INSIGHTS_BASE_URL`, `SL_INSIGHTS_USER_AGENT`,
    /// `SL_INSIGHTS_PAGE_SIZE`, `SL_INSIGHTS_PAGE_DELAY_MS`,
    /// `SL_INSIGHTS_PROFILE_TIMEOUT_SECS`, `SL_INSIGHTS_API_TIMEOUT_SECS`.
    /// Unset or unparsable values fall back to the default.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(base_url) = env::var("SL_INSIGHTS_BASE_URL") {
            if !base_url.is_empty() {
                config.base_url = base_url;
            }
        }
        if let Ok(user_agent) = env::var("SL_INSIGHTS_USER_AGENT") {
            if !user_agent.is_empty() {
                config.user_agent = user_agent;
            }
        }
        if let Some(page_size) = parse_env("SL_INSIGHTS_PAGE_SIZE") {
            if page_size > 0 {
                config.page_size = page_size;
            }
        }
        if let Some(millis) = parse_env("SL_INSIGHTS_PAGE_DELAY_MS") {
            config.page_delay = Duration::from_millis(millis);
        }
        if let Some(secs) = parse_env("SL_INSIGHTS_PROFILE_TIMEOUT_SECS") {
            config.profile_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = parse_env("SL_INSIGHTS_API_TIMEOUT_SECS") {
            config.api_timeout = Duration::from_secs(secs);
        }

        config
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|value| value.parse().ok())
}
