// ABOUTME: Flattens nested workout records into one row per (workout, exercise, set)
// ABOUTME: Emits placeholder rows for empty levels and excludes cardio/timed sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flattener.
//!
//! Order is preserved exactly: workouts in server-returned order, exercises
//! and sets in logged order. Nothing is silently dropped except cardio/timed
//! sets, which never belong in the strength table; a workout without
//! exercises and an exercise without sets each still leave one placeholder
//! row behind.

use crate::models::{SetRow, WorkoutRecord};

/// Flatten the workout tree into set-level rows.
#[must_use]
pub fn flatten(workouts: &[WorkoutRecord]) -> Vec<SetRow> {
    let mut rows = Vec::new();

    for workout in workouts {
        if workout.exercises.is_empty() {
            rows.push(SetRow::placeholder(workout.date, workout.bodyweight, ""));
            continue;
        }

        for exercise in &workout.exercises {
            if exercise.sets.is_empty() {
                rows.push(SetRow::placeholder(
                    workout.date,
                    workout.bodyweight,
                    &exercise.name,
                ));
                continue;
            }

            // A non-empty set list that is entirely cardio yields no rows;
            // the placeholder rule covers only genuinely empty lists.
            for set in exercise.sets.iter().filter(|set| !set.is_cardio()) {
                rows.push(SetRow {
                    date: workout.date,
                    bodyweight: workout.bodyweight,
                    exercise: exercise.name.clone(),
                    weight: set.weight,
                    reps: set.reps,
                    notes: set.notes.clone(),
                    dropset: set.dropset,
                    percentile: set.percentile,
                    rir: set.rir,
                });
            }
        }
    }

    rows
}
