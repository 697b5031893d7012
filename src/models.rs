// ABOUTME: Data model for workout records, flattened set rows, and enriched rows
// ABOUTME: Serde structs matching the upstream API payload plus derived-metric row types
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain model of the pipeline.
//!
//! The nested [`WorkoutRecord`] → [`ExerciseRecord`] → [`SetRecord`] tree
//! mirrors the upstream JSON payload. The flattener turns it into
//! [`SetRow`]s and the enricher widens those into [`EnrichedRow`]s. All
//! fields the upstream may omit are `Option`; a missing input never aborts a
//! run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque internal account identifier used to scope workout API queries.
///
/// Obtained from profile-page bootstrap data, never from a public API
/// contract. Treated as plumbing: it is excluded from emitted rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub String);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// One page of the workouts API response.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkoutsPage {
    /// Workout records on this page.
    #[serde(default)]
    pub data: Vec<WorkoutRecord>,
    /// Page metadata, when the upstream includes it.
    #[serde(default)]
    pub meta: Option<PageMeta>,
}

/// Metadata block attached to an API page.
#[derive(Debug, Clone, Deserialize)]
pub struct PageMeta {
    /// Total record count reported by the upstream. Parsed for callers that
    /// want progress reporting; pagination deliberately never trusts it and
    /// terminates on an empty or short page instead, which stays correct
    /// when the count drifts while paging.
    #[serde(default)]
    pub count: Option<u64>,
}

/// One logged training session.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkoutRecord {
    /// Session date (`YYYY-MM-DD` upstream).
    pub date: NaiveDate,
    /// Body mass at the time of the session, when recorded.
    #[serde(default)]
    pub bodyweight: Option<f64>,
    /// Exercises performed, in logged order.
    #[serde(default)]
    pub exercises: Vec<ExerciseRecord>,
}

/// One exercise performed within a session.
#[derive(Debug, Clone, Deserialize)]
pub struct ExerciseRecord {
    /// Free-text exercise name, the join key against the reference table.
    #[serde(rename = "exercise_name", default)]
    pub name: String,
    /// Sets performed, in logged order.
    #[serde(default)]
    pub sets: Vec<SetRecord>,
}

/// One performed set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetRecord {
    /// External (added) load.
    #[serde(default)]
    pub weight: Option<f64>,
    /// Repetition count.
    #[serde(default)]
    pub reps: Option<u32>,
    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Dropset flag.
    #[serde(default)]
    pub dropset: bool,
    /// Service-provided strength percentile, passed through unmodified.
    #[serde(default)]
    pub percentile: Option<f64>,
    /// Service-provided reps-in-reserve, passed through for hard-set counts.
    #[serde(default)]
    pub rir: Option<f64>,
    /// Duration of a timed set. Presence marks the set as cardio.
    #[serde(default)]
    pub time: Option<f64>,
    /// Distance of a cardio set. Presence marks the set as cardio.
    #[serde(default)]
    pub distance: Option<f64>,
}

impl SetRecord {
    /// A set carrying a time or distance is a cardio/timed entry and must be
    /// excluded from all strength metrics and the flattened strength table.
    #[must_use]
    pub const fn is_cardio(&self) -> bool {
        self.time.is_some() || self.distance.is_some()
    }
}

/// One flat row of the strength table: a (workout, exercise, set) triple.
///
/// Placeholder rows exist for workouts without exercises (empty exercise
/// name) and exercises without sets (null set fields), so no logged session
/// silently disappears.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetRow {
    /// Session date.
    pub date: NaiveDate,
    /// Session bodyweight.
    pub bodyweight: Option<f64>,
    /// Exercise name; empty for workout-level placeholder rows.
    pub exercise: String,
    /// External load.
    pub weight: Option<f64>,
    /// Repetition count.
    pub reps: Option<u32>,
    /// Set notes.
    pub notes: Option<String>,
    /// Dropset flag.
    pub dropset: bool,
    /// Service strength percentile passthrough.
    pub percentile: Option<f64>,
    /// Service reps-in-reserve passthrough.
    pub rir: Option<f64>,
}

impl SetRow {
    /// Placeholder row carrying only session context.
    #[must_use]
    pub fn placeholder(date: NaiveDate, bodyweight: Option<f64>, exercise: &str) -> Self {
        Self {
            date,
            bodyweight,
            exercise: exercise.to_owned(),
            weight: None,
            reps: None,
            notes: None,
            dropset: false,
            percentile: None,
            rir: None,
        }
    }
}

/// A [`SetRow`] widened with every derived metric column.
///
/// Per-set metrics (`estimated_one_rep_max`, `reps_in_reserve`) are `None`
/// whenever a required input is missing. Per-exercise session aggregates
/// (`volume_*`) are broadcast to every row of their (date, exercise) group;
/// they coalesce missing set inputs to zero contributions instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedRow {
    /// Session date.
    pub date: NaiveDate,
    /// Session bodyweight.
    pub bodyweight: Option<f64>,
    /// Exercise name.
    pub exercise: String,
    /// External load.
    pub weight: Option<f64>,
    /// Repetition count.
    pub reps: Option<u32>,
    /// Set notes.
    pub notes: Option<String>,
    /// Dropset flag.
    pub dropset: bool,
    /// Service strength percentile passthrough.
    pub percentile: Option<f64>,
    /// Service reps-in-reserve passthrough.
    pub rir: Option<f64>,
    /// Bodyweight fraction from the reference table.
    pub bodyweight_fraction: Option<f64>,
    /// Fixed equipment weight from the reference table.
    pub equipment_weight: Option<f64>,
    /// `bodyweight × bodyweight_fraction`.
    pub bodyweight_load: Option<f64>,
    /// `bodyweight_load + equipment_weight`.
    pub internal_load: Option<f64>,
    /// Estimated one-rep max for this set, rounded to one decimal.
    pub estimated_one_rep_max: Option<f64>,
    /// Maximum reps theoretically achievable at this set's load.
    pub max_reps_at_load: Option<f64>,
    /// Estimated reps in reserve, rounded to two decimals.
    pub reps_in_reserve: Option<f64>,
    /// Session training volume for this exercise, `Σ weight × reps`.
    pub volume_raw: f64,
    /// Session volume relative to 80 % of the best 1RM.
    pub volume_relative: f64,
    /// Heavy-set points for this exercise session.
    pub volume_heavy: u32,
}

impl EnrichedRow {
    /// Start an enriched row from a flat row, all derived columns unset.
    #[must_use]
    pub fn from_set_row(row: SetRow) -> Self {
        Self {
            date: row.date,
            bodyweight: row.bodyweight,
            exercise: row.exercise,
            weight: row.weight,
            reps: row.reps,
            notes: row.notes,
            dropset: row.dropset,
            percentile: row.percentile,
            rir: row.rir,
            bodyweight_fraction: None,
            equipment_weight: None,
            bodyweight_load: None,
            internal_load: None,
            estimated_one_rep_max: None,
            max_reps_at_load: None,
            reps_in_reserve: None,
            volume_raw: 0.0,
            volume_relative: 0.0,
            volume_heavy: 0,
        }
    }
}
