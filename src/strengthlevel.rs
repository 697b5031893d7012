// ABOUTME: StrengthLevel HTTP implementation of the workout source
// ABOUTME: Profile-page bootstrap extraction and paginated workouts API retrieval
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Upstream integration for StrengthLevel.
//!
//! The public workouts page embeds a `window.prefill = [ ... ];` bootstrap
//! array whose entries describe the API requests the page would issue; the
//! entry targeting `/api/workouts` carries the internal `user_id` this
//! crate needs to scope its own API queries. Extraction is a pure function
//! over the page text so it stays testable without a network.

use crate::config::PipelineConfig;
use crate::constants::upstream;
use crate::errors::{FetchError, ParseError, Result};
use crate::http_client;
use crate::models::{AccountId, WorkoutsPage};
use crate::source::WorkoutSource;
use regex::Regex;
use reqwest::blocking::{Client, Response};
use serde_json::Value;
use std::sync::OnceLock;
use tracing::{debug, info};

/// Bootstrap request path whose parameters carry the account identifier.
const WORKOUTS_REQUEST_URL: &str = "/api/workouts";

/// Longest response-body prefix kept in error diagnostics.
const MAX_ERROR_BODY: usize = 500;

/// `window.prefill = [ ... ];` with `[\s\S]` spanning newlines without a flag.
#[allow(clippy::expect_used)] // pattern is a compile-time constant
fn prefill_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"window\.prefill\s*=\s*(\[[\s\S]*?\]);").expect("valid prefill pattern")
    })
}

/// Extract the internal account identifier from profile-page HTML.
///
/// # Errors
///
/// - [`ParseError::BootstrapMissing`] when the page has no prefill
///   assignment (site markup changed).
/// - [`ParseError::MalformedBootstrap`] when the assignment is not valid
///   JSON.
/// - [`ParseError::AccountIdNotFound`] when no entry targets the workouts
///   API with a usable `user_id`.
pub fn parse_account_id(html: &str) -> std::result::Result<AccountId, ParseError> {
    let captures = prefill_regex()
        .captures(html)
        .ok_or(ParseError::BootstrapMissing)?;
    let raw = captures
        .get(1)
        .ok_or(ParseError::BootstrapMissing)?
        .as_str();

    let prefill: Value = serde_json::from_str(raw).map_err(ParseError::MalformedBootstrap)?;

    for entry in prefill.as_array().into_iter().flatten() {
        let request = &entry["request"];
        if request["url"].as_str() != Some(WORKOUTS_REQUEST_URL) {
            continue;
        }
        match &request["params"]["user_id"] {
            Value::String(id) if !id.is_empty() => return Ok(AccountId(id.clone())),
            Value::Number(id) => return Ok(AccountId(id.to_string())),
            _ => {}
        }
    }

    Err(ParseError::AccountIdNotFound)
}

/// Blocking HTTP source backed by the StrengthLevel web application.
pub struct StrengthLevelSource {
    profile_client: Client,
    api_client: Client,
    config: PipelineConfig,
}

impl StrengthLevelSource {
    /// Build a source from pipeline configuration. One pooled client per
    /// request class, reused for the lifetime of the source.
    #[must_use]
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            profile_client: http_client::client_with_timeout(
                config.profile_timeout,
                &config.user_agent,
            ),
            api_client: http_client::client_with_timeout(config.api_timeout, &config.user_agent),
            config,
        }
    }

    fn read_success_body(url: &str, response: Response) -> Result<String> {
        let status = response.status();
        if !status.is_success() {
            let mut body = response.text().unwrap_or_default();
            body.truncate(MAX_ERROR_BODY);
            return Err(FetchError::Status {
                url: url.to_owned(),
                status: status.as_u16(),
                body,
            }
            .into());
        }
        response.text().map_err(|source| {
            FetchError::Request {
                url: url.to_owned(),
                source,
            }
            .into()
        })
    }
}

impl WorkoutSource for StrengthLevelSource {
    fn resolve_account_id(&self, username: &str) -> Result<AccountId> {
        let url = format!("{}/{username}/workouts", self.config.base_url);
        info!(%url, "resolving account id from profile page");

        let response = self
            .profile_client
            .get(&url)
            .send()
            .map_err(|source| FetchError::Request {
                url: url.clone(),
                source,
            })?;
        let html = Self::read_success_body(&url, response)?;

        let account_id = parse_account_id(&html)?;
        debug!(%account_id, "account id resolved");
        Ok(account_id)
    }

    fn fetch_page(
        &self,
        account_id: &AccountId,
        offset: usize,
        limit: usize,
    ) -> Result<WorkoutsPage> {
        let url = format!("{}{}", self.config.base_url, upstream::WORKOUTS_API_PATH);
        let limit_param = limit.to_string();
        let offset_param = offset.to_string();
        let query = [
            ("user_id", account_id.0.as_str()),
            ("workout.fields", upstream::WORKOUT_FIELDS),
            ("workoutexercise.fields", upstream::EXERCISE_FIELDS),
            ("set.fields", upstream::SET_FIELDS),
            ("limit", limit_param.as_str()),
            ("offset", offset_param.as_str()),
        ];

        let response = self
            .api_client
            .get(&url)
            .query(&query)
            .send()
            .map_err(|source| FetchError::Request {
                url: url.clone(),
                source,
            })?;
        let body = Self::read_success_body(&url, response)?;

        let page: WorkoutsPage = serde_json::from_str(&body)
            .map_err(|source| ParseError::PayloadNotJson { offset, source })?;
        Ok(page)
    }
}
