// ABOUTME: Metric enricher deriving internal load, 1RM, RIR, volume, and heavy volume
// ABOUTME: Five composable stages over the flat row set plus the pure estimation formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Metric enrichment.
//!
//! A chain of five stages widens the flat rows with derived columns. Order
//! matters: internal load feeds the 1RM estimate, and the per-session best
//! 1RM feeds reps-in-reserve, relative volume, and heavy volume.
//!
//! Missing inputs always produce missing outputs for per-set metrics. A
//! missing bodyweight must never silently become a zero 1RM; zero
//! coalescing is acceptable only inside the volume sums, where an
//! incomplete set contributing nothing keeps the rest of the aggregate
//! intact.

use crate::constants::formula;
use crate::models::{EnrichedRow, SetRow};
use crate::reference::ExerciseReference;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

/// Estimated one-rep max from a submaximal set, unrounded.
///
/// Inverted Epley-style formula over total resistance (external weight plus
/// bodyweight-equivalent internal load):
/// `((reps + 29) * 3.33 * (weight + internal_load)) / 100 - internal_load`.
/// `None` when `reps` is not positive.
#[must_use]
pub fn estimate_one_rep_max(reps: f64, internal_load: f64, weight: f64) -> Option<f64> {
    if reps <= 0.0 || !reps.is_finite() {
        return None;
    }
    Some(
        ((reps + formula::REP_OFFSET) * formula::LOAD_FACTOR * (weight + internal_load))
            / formula::SCALE
            - internal_load,
    )
}

/// Maximum reps theoretically achievable at a load, unrounded.
///
/// Forward form of the same formula:
/// `100 * (one_rep_max + internal_load) / (3.33 * (weight + internal_load)) - 29`.
/// `None` when the denominator would be zero. Mutually consistent with
/// [`estimate_one_rep_max`]: the two round-trip within floating tolerance.
#[must_use]
pub fn max_reps_at_load(weight: f64, one_rep_max: f64, internal_load: f64) -> Option<f64> {
    let denominator = formula::LOAD_FACTOR * (weight + internal_load);
    if denominator == 0.0 {
        return None;
    }
    Some(formula::SCALE * (one_rep_max + internal_load) / denominator - formula::REP_OFFSET)
}

/// Run all five enrichment stages over the flat rows.
#[must_use]
pub fn enrich(rows: Vec<SetRow>, reference: &ExerciseReference) -> Vec<EnrichedRow> {
    let mut rows: Vec<EnrichedRow> = rows.into_iter().map(EnrichedRow::from_set_row).collect();
    attach_reference_loads(&mut rows, reference);
    attach_one_rep_max(&mut rows);
    attach_reps_in_reserve(&mut rows);
    attach_volume(&mut rows);
    attach_heavy_volume(&mut rows);
    rows
}

/// Stage 1: reference lookup and internal load.
///
/// `bodyweight_load = bodyweight * bodyweight_fraction` and
/// `internal_load = bodyweight_load + equipment_weight`; each is missing
/// whenever an operand is missing.
pub fn attach_reference_loads(rows: &mut [EnrichedRow], reference: &ExerciseReference) {
    for row in rows {
        let Some(entry) = reference.lookup(&row.exercise) else {
            continue;
        };
        row.bodyweight_fraction = entry.bodyweight_fraction;
        row.equipment_weight = Some(entry.equipment_weight);
        row.bodyweight_load = match (row.bodyweight, entry.bodyweight_fraction) {
            (Some(bodyweight), Some(fraction)) => Some(bodyweight * fraction),
            _ => None,
        };
        row.internal_load = row
            .bodyweight_load
            .map(|load| load + entry.equipment_weight);
    }
}

/// Stage 2: per-set estimated 1RM, rounded to one decimal.
///
/// Requires positive reps and a known internal load; a missing external
/// weight means a bodyweight-only set and is treated as zero.
pub fn attach_one_rep_max(rows: &mut [EnrichedRow]) {
    for row in rows {
        row.estimated_one_rep_max = match (row.reps, row.internal_load) {
            (Some(reps), Some(internal)) => {
                estimate_one_rep_max(f64::from(reps), internal, row.weight.unwrap_or(0.0))
                    .map(|value| round_to(value, 1))
            }
            _ => None,
        };
    }
}

/// Stage 3: reps-in-reserve against the session best 1RM.
///
/// `rir = max_reps_at_load - reps`, rounded to two decimals; missing when
/// any input is missing or the load denominator is zero.
pub fn attach_reps_in_reserve(rows: &mut [EnrichedRow]) {
    for group in session_groups(rows) {
        let best = best_one_rep_max(rows, &group);
        for index in group {
            let row = &mut rows[index];
            let (Some(best), Some(weight), Some(reps), Some(internal)) =
                (best, row.weight, row.reps, row.internal_load)
            else {
                continue;
            };
            let Some(max_reps) = max_reps_at_load(weight, best, internal) else {
                continue;
            };
            row.max_reps_at_load = Some(round_to(max_reps, 2));
            row.reps_in_reserve = Some(round_to(max_reps - f64::from(reps), 2));
        }
    }
}

/// Stage 4: per-exercise session volume, broadcast to every row of the group.
///
/// `volume_raw = Σ weight * reps` with incomplete sets contributing zero;
/// `volume_relative` divides each term by 80 % of the session best 1RM and
/// is zero when that best is unknown or non-positive.
pub fn attach_volume(rows: &mut [EnrichedRow]) {
    for group in session_groups(rows) {
        let best = best_one_rep_max(rows, &group);
        let mut raw = 0.0;
        let mut relative = 0.0;
        for &index in &group {
            let row = &rows[index];
            let (Some(weight), Some(reps)) = (row.weight, row.reps) else {
                continue;
            };
            let work = weight * f64::from(reps);
            raw += work;
            if let Some(best) = best.filter(|value| *value > 0.0) {
                relative += work / (best * formula::RELATIVE_VOLUME_FRACTION);
            }
        }
        for index in group {
            rows[index].volume_raw = raw;
            rows[index].volume_relative = relative;
        }
    }
}

/// Stage 5: heavy-set points per exercise session.
///
/// Thresholds `0.85 * (best + w_i) - w_i` and `0.93 * (best + w_i) - w_i`;
/// a set above the 93 % line earns `2 * reps` points, above the 85 % line
/// `reps`. Explicitly zero, not missing, when the best 1RM is unknown or
/// non-positive: the absence of a heavy-lift signal is itself meaningful.
pub fn attach_heavy_volume(rows: &mut [EnrichedRow]) {
    for group in session_groups(rows) {
        let best = best_one_rep_max(rows, &group).filter(|value| *value > 0.0);
        let mut points = 0;
        if let Some(best) = best {
            for &index in &group {
                let row = &rows[index];
                let (Some(weight), Some(reps), Some(internal)) =
                    (row.weight, row.reps, row.internal_load)
                else {
                    continue;
                };
                let threshold_85 =
                    formula::HEAVY_THRESHOLD * (best + internal) - internal;
                let threshold_93 =
                    formula::VERY_HEAVY_THRESHOLD * (best + internal) - internal;
                if weight > threshold_93 {
                    points += 2 * reps;
                } else if weight > threshold_85 {
                    points += reps;
                }
            }
        }
        for index in group {
            rows[index].volume_heavy = points;
        }
    }
}

/// Per-(date, exercise) hard-set summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HardSetSummary {
    /// Session date.
    pub date: NaiveDate,
    /// Exercise display name.
    pub exercise: String,
    /// Number of sets whose service RIR fell within the hard range.
    pub hard_sets: u32,
    /// Best estimated 1RM among the hard sets.
    pub best_one_rep_max: Option<f64>,
}

/// Count hard sets (service-provided RIR within `rir_range`, inclusive) per
/// (date, exercise), with the best estimated 1RM among them. Groups with no
/// hard sets are omitted; output is sorted by date, then exercise.
#[must_use]
pub fn summarize_hard_sets(rows: &[EnrichedRow], rir_range: (f64, f64)) -> Vec<HardSetSummary> {
    let (min_rir, max_rir) = rir_range;
    let mut summaries = Vec::new();

    for group in session_groups(rows) {
        let hard: Vec<&EnrichedRow> = group
            .iter()
            .map(|&index| &rows[index])
            .filter(|row| {
                row.rir
                    .is_some_and(|value| value >= min_rir && value <= max_rir)
            })
            .collect();
        if hard.is_empty() {
            continue;
        }
        let first = hard[0];
        let best = hard
            .iter()
            .filter_map(|row| row.estimated_one_rep_max)
            .fold(None, |acc: Option<f64>, value| {
                Some(acc.map_or(value, |current| current.max(value)))
            });
        summaries.push(HardSetSummary {
            date: first.date,
            exercise: first.exercise.clone(),
            hard_sets: u32::try_from(hard.len()).unwrap_or(u32::MAX),
            best_one_rep_max: best,
        });
    }

    summaries.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.exercise.cmp(&b.exercise)));
    summaries
}

/// Indices of rows belonging to the same (date, normalized exercise)
/// session, in first-appearance order.
fn session_groups(rows: &[EnrichedRow]) -> Vec<Vec<usize>> {
    let mut slots: HashMap<(NaiveDate, String), usize> = HashMap::new();
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        let key = (row.date, row.exercise.trim().to_lowercase());
        let slot = *slots.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(index);
    }
    groups
}

/// Best per-set estimated 1RM within a group.
fn best_one_rep_max(rows: &[EnrichedRow], group: &[usize]) -> Option<f64> {
    group
        .iter()
        .filter_map(|&index| rows[index].estimated_one_rep_max)
        .fold(None, |acc, value| {
            Some(acc.map_or(value, |current: f64| current.max(value)))
        })
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
