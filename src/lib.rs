// ABOUTME: Library root wiring the workout ingestion and metric derivation pipeline
// ABOUTME: Re-exports the types callers need for running and testing pipelines

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Workout history ingestion and strength-metric derivation.
//!
//! The crate resolves a public StrengthLevel username to its internal
//! account id, pages through the account's workout history, flattens the
//! nested records into one row per set, and derives load and intensity
//! metrics: internal load, estimated one-rep max, reps in reserve, and the
//! session volume family.
//!
//! ```no_run
//! use strengthlevel_insights::config::PipelineConfig;
//! use strengthlevel_insights::pipeline::Pipeline;
//!
//! # fn main() -> strengthlevel_insights::errors::Result<()> {
//! let pipeline = Pipeline::from_config(PipelineConfig::from_env());
//! let outcome = pipeline.run("some-lifter")?;
//! println!("{} enriched rows", outcome.rows.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod enrich;
pub mod errors;
pub mod flatten;
pub mod http_client;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod reference;
pub mod source;
pub mod strengthlevel;

pub use config::PipelineConfig;
pub use enrich::{enrich, estimate_one_rep_max, max_reps_at_load, HardSetSummary};
pub use errors::{FetchError, ParseError, PipelineError};
pub use flatten::flatten;
pub use models::{AccountId, EnrichedRow, SetRow, WorkoutRecord};
pub use pipeline::{Pipeline, PipelineOutcome, RunStatus};
pub use reference::ExerciseReference;
pub use source::{fetch_all_workouts, FetchOptions, FetchStatus, FetchedHistory, WorkoutSource};
pub use strengthlevel::{parse_account_id, StrengthLevelSource};
