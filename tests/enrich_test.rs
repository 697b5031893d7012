// ABOUTME: Tests for the metric enrichment stages and estimation formulas
// ABOUTME: Covers internal load, 1RM, RIR, volume aggregates, heavy points, hard sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use strengthlevel_insights::enrich::{
    enrich, estimate_one_rep_max, max_reps_at_load, summarize_hard_sets,
};
use strengthlevel_insights::models::SetRow;
use strengthlevel_insights::reference::ExerciseReference;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
}

fn row(
    day: u32,
    exercise: &str,
    bodyweight: Option<f64>,
    weight: Option<f64>,
    reps: Option<u32>,
) -> SetRow {
    SetRow {
        date: date(day),
        bodyweight,
        exercise: exercise.to_owned(),
        weight,
        reps,
        notes: None,
        dropset: false,
        percentile: None,
        rir: None,
    }
}

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_formulas_round_trip() {
    for &(reps, internal, weight) in &[
        (5.0, 0.0, 100.0),
        (8.0, 80.0, 0.0),
        (12.0, 48.0, 25.5),
        (1.0, 16.0, 140.0),
    ] {
        let one_rep_max = estimate_one_rep_max(reps, internal, weight).unwrap();
        let recovered = max_reps_at_load(weight, one_rep_max, internal).unwrap();
        assert_close(recovered, reps, 1e-6);
    }
}

#[test]
fn test_non_positive_reps_give_no_estimate() {
    assert!(estimate_one_rep_max(0.0, 80.0, 100.0).is_none());
    assert!(estimate_one_rep_max(-1.0, 80.0, 100.0).is_none());
}

#[test]
fn test_zero_total_load_gives_no_max_reps() {
    assert!(max_reps_at_load(0.0, 100.0, 0.0).is_none());
}

#[test]
fn test_bodyweight_exercise_internal_load_and_estimate() {
    // Pull-ups at bodyweight 80 lift the full bodyweight, no equipment.
    let rows = enrich(
        vec![row(1, "Pull Ups", Some(80.0), Some(0.0), Some(8))],
        &ExerciseReference::builtin(),
    );

    let enriched = &rows[0];
    assert_eq!(enriched.bodyweight_fraction, Some(1.0));
    assert_eq!(enriched.equipment_weight, Some(0.0));
    assert_eq!(enriched.bodyweight_load, Some(80.0));
    assert_eq!(enriched.internal_load, Some(80.0));
    // ((8 + 29) * 3.33 * 80) / 100 - 80, rounded to one decimal.
    assert_eq!(enriched.estimated_one_rep_max, Some(18.6));
    assert_eq!(enriched.max_reps_at_load, Some(8.01));
    assert_eq!(enriched.reps_in_reserve, Some(0.01));
}

#[test]
fn test_missing_weight_is_treated_as_bodyweight_only() {
    let rows = enrich(
        vec![row(1, "Pull Ups", Some(80.0), None, Some(8))],
        &ExerciseReference::builtin(),
    );
    assert_eq!(rows[0].estimated_one_rep_max, Some(18.6));
    // RIR needs an explicit weight; bodyweight-only rows leave it unset.
    assert_eq!(rows[0].reps_in_reserve, None);
}

#[test]
fn test_missing_bodyweight_propagates_to_derived_metrics() {
    let rows = enrich(
        vec![row(1, "Pull Ups", None, Some(10.0), Some(5))],
        &ExerciseReference::builtin(),
    );
    assert_eq!(rows[0].bodyweight_fraction, Some(1.0));
    assert_eq!(rows[0].bodyweight_load, None);
    assert_eq!(rows[0].internal_load, None);
    assert_eq!(rows[0].estimated_one_rep_max, None);
    assert_eq!(rows[0].reps_in_reserve, None);
}

#[test]
fn test_unknown_bodyweight_fraction_blocks_load_metrics() {
    let rows = enrich(
        vec![row(1, "Kettlebell Swing", Some(80.0), Some(24.0), Some(15))],
        &ExerciseReference::builtin(),
    );
    assert_eq!(rows[0].bodyweight_fraction, None);
    assert_eq!(rows[0].equipment_weight, Some(0.0));
    assert_eq!(rows[0].internal_load, None);
    assert_eq!(rows[0].estimated_one_rep_max, None);
}

#[test]
fn test_unmapped_exercise_gets_no_reference_columns() {
    let rows = enrich(
        vec![row(1, "Mystery Movement", Some(80.0), Some(50.0), Some(5))],
        &ExerciseReference::builtin(),
    );
    assert_eq!(rows[0].bodyweight_fraction, None);
    assert_eq!(rows[0].equipment_weight, None);
    assert_eq!(rows[0].internal_load, None);
    assert_eq!(rows[0].estimated_one_rep_max, None);
    assert_eq!(rows[0].volume_heavy, 0);
}

#[test]
fn test_reference_matching_is_case_insensitive() {
    let rows = enrich(
        vec![row(1, "  pull ups ", Some(80.0), Some(0.0), Some(8))],
        &ExerciseReference::builtin(),
    );
    assert_eq!(rows[0].internal_load, Some(80.0));
}

#[test]
fn test_volume_sums_skip_incomplete_sets() {
    // Bench press has fraction 0, so internal load is 0 and the 1RM is a
    // pure function of external weight.
    let rows = enrich(
        vec![
            row(1, "Bench Press", Some(80.0), Some(100.0), Some(5)),
            row(1, "Bench Press", Some(80.0), None, Some(8)),
            row(1, "Bench Press", Some(80.0), Some(50.0), None),
        ],
        &ExerciseReference::builtin(),
    );

    // Only the complete set contributes: 100 * 5.
    for enriched in &rows {
        assert_close(enriched.volume_raw, 500.0, 1e-9);
    }
    // Best 1RM: ((5 + 29) * 3.33 * 100) / 100 = 113.22, rounded 113.2.
    let expected_relative = 500.0 / (113.2 * 0.8);
    for enriched in &rows {
        assert_close(enriched.volume_relative, expected_relative, 1e-9);
    }
}

#[test]
fn test_relative_volume_zero_without_a_best_estimate() {
    let rows = enrich(
        vec![row(1, "Mystery Movement", Some(80.0), Some(100.0), Some(5))],
        &ExerciseReference::builtin(),
    );
    assert_close(rows[0].volume_raw, 500.0, 1e-9);
    assert_close(rows[0].volume_relative, 0.0, 1e-9);
}

#[test]
fn test_heavy_points_use_both_thresholds() {
    // Best 1RM is 113.2 (from the 100 x 5 set); with zero internal load the
    // thresholds are 96.22 and 105.276.
    let rows = enrich(
        vec![
            row(1, "Bench Press", Some(80.0), Some(100.0), Some(5)),
            row(1, "Bench Press", Some(80.0), Some(110.0), Some(1)),
            row(1, "Bench Press", Some(80.0), Some(94.0), Some(2)),
            row(1, "Bench Press", Some(80.0), Some(80.0), Some(10)),
        ],
        &ExerciseReference::builtin(),
    );

    // 100 x 5 clears the 85 % line (5 points); 110 x 1 clears the 93 % line
    // (2 points); the rest earn nothing.
    for enriched in &rows {
        assert_eq!(enriched.volume_heavy, 7);
    }
}

#[test]
fn test_groups_are_per_date_and_exercise() {
    let rows = enrich(
        vec![
            row(1, "Squat", Some(80.0), Some(100.0), Some(5)),
            row(2, "Squat", Some(80.0), Some(60.0), Some(5)),
        ],
        &ExerciseReference::builtin(),
    );
    assert_close(rows[0].volume_raw, 500.0, 1e-9);
    assert_close(rows[1].volume_raw, 300.0, 1e-9);
}

#[test]
fn test_hard_set_summary_counts_and_sorts() {
    let mut first = row(2, "Squat", Some(80.0), Some(100.0), Some(5));
    first.rir = Some(2.0);
    let mut second = row(2, "Squat", Some(80.0), Some(90.0), Some(5));
    second.rir = Some(3.0);
    let mut easy = row(2, "Squat", Some(80.0), Some(60.0), Some(5));
    easy.rir = Some(6.0);
    let mut other_day = row(1, "Bench Press", Some(80.0), Some(80.0), Some(5));
    other_day.rir = Some(1.0);
    let no_rir = row(2, "Deadlift", Some(80.0), Some(140.0), Some(3));

    let rows = enrich(
        vec![first, second, easy, other_day, no_rir],
        &ExerciseReference::builtin(),
    );
    let summaries = summarize_hard_sets(&rows, (1.0, 3.0));

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].date, date(1));
    assert_eq!(summaries[0].exercise, "Bench Press");
    assert_eq!(summaries[0].hard_sets, 1);
    assert_eq!(summaries[1].date, date(2));
    assert_eq!(summaries[1].exercise, "Squat");
    assert_eq!(summaries[1].hard_sets, 2);
    // Best among the hard sets only, not the whole session.
    let best = summaries[1].best_one_rep_max.unwrap();
    let expected = estimate_one_rep_max(5.0, 48.0, 100.0).unwrap();
    assert_close(best, (expected * 10.0).round() / 10.0, 1e-9);
}
