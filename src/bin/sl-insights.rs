// ABOUTME: CLI entry point: fetch a user's workout history and emit enriched rows
// ABOUTME: Rows go to stdout as JSON lines, status and diagnostics to stderr

// SPDX-License-Identifier: MIT OR Apache-2.0

use anyhow::{bail, Context, Result};
use std::io::Write as _;
use strengthlevel_insights::config::PipelineConfig;
use strengthlevel_insights::logging;
use strengthlevel_insights::pipeline::{Pipeline, RunStatus};

fn main() -> Result<()> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let Some(username) = args.next() else {
        bail!("usage: sl-insights <username>");
    };
    if args.next().is_some() {
        bail!("usage: sl-insights <username>");
    }

    let pipeline = Pipeline::from_config(PipelineConfig::from_env());
    let outcome = pipeline
        .run(&username)
        .with_context(|| format!("failed to fetch workout history for '{username}'"))?;

    match &outcome.status {
        RunStatus::Complete => {
            eprintln!(
                "Fetched {} workouts ({} set rows).",
                outcome.workouts,
                outcome.rows.len()
            );
        }
        RunStatus::Partial { error } => {
            eprintln!(
                "Warning: history truncated after {} workouts: {error}",
                outcome.workouts
            );
        }
        RunStatus::Cancelled => {
            eprintln!("Fetch cancelled after {} workouts.", outcome.workouts);
        }
        RunStatus::NoWorkouts => {
            eprintln!("No workouts found for '{username}'.");
            return Ok(());
        }
    }

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    for row in &outcome.rows {
        serde_json::to_writer(&mut handle, row).context("failed to serialize row")?;
        writeln!(handle).context("failed to write row")?;
    }

    let hard_sets = outcome.hard_sets();
    if !hard_sets.is_empty() {
        eprintln!("Hard-set sessions: {}", hard_sets.len());
    }

    Ok(())
}
