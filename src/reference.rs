// ABOUTME: Static exercise reference table mapping names to bodyweight fraction and equipment weight
// ABOUTME: Injected read-only lookup consulted by the metric enricher
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Exercise reference table.
//!
//! Maps an exercise name to the fraction of bodyweight lifted during the
//! movement and the fixed weight of the involved equipment. A `None`
//! fraction means the movement's load model is unknown; such exercises
//! receive no derived load metrics. Lookups are case-insensitive and
//! whitespace-trimmed. The table is injected into the enricher rather than
//! consulted as a global, so tests can substitute fixtures.

use std::collections::HashMap;

/// Load model of one exercise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceEntry {
    /// Fraction of bodyweight lifted; `None` when unknown/not applicable.
    pub bodyweight_fraction: Option<f64>,
    /// Fixed equipment weight added to every set of the exercise.
    pub equipment_weight: f64,
}

/// Read-only exercise lookup keyed by normalized name.
#[derive(Debug, Clone, Default)]
pub struct ExerciseReference {
    entries: HashMap<String, ReferenceEntry>,
}

/// Normalized join key: trimmed, lowercased.
fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

impl ExerciseReference {
    /// Build a table from `(name, fraction, equipment_weight)` triples.
    /// Later duplicates (after normalization) win.
    #[must_use]
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Option<f64>, f64)>,
    {
        let entries = entries
            .into_iter()
            .map(|(name, bodyweight_fraction, equipment_weight)| {
                (
                    normalize(name),
                    ReferenceEntry {
                        bodyweight_fraction,
                        equipment_weight,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// The built-in table covering the exercises observed in real logs.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_ENTRIES.iter().copied())
    }

    /// Look up an exercise by display name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&ReferenceEntry> {
        self.entries.get(&normalize(name))
    }

    /// Number of known exercises.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Built-in load models: `(name, bodyweight fraction, equipment weight)`.
const BUILTIN_ENTRIES: &[(&str, Option<f64>, f64)] = &[
    ("Back Extension", Some(0.4), 0.0),
    ("Balance lunges twist", Some(0.6), 0.0),
    ("Balance squat", Some(0.6), 0.0),
    ("Bench Press", Some(0.0), 0.0),
    ("Cable Overhead Tricep Extension", Some(0.0), 0.0),
    ("Chest Press", Some(0.0), 0.0),
    ("Deadlift", Some(0.2), 0.0),
    ("Decline Sit Up", Some(0.3), 0.0),
    ("Dips", Some(1.0), 0.0),
    ("Dumbbell Bench Press", Some(0.0), 0.0),
    ("Dumbbell Curl", Some(0.0), 0.0),
    ("Dumbbell Finger Curl", Some(0.0), 0.0),
    ("Dumbbell Lunge", Some(0.6), 0.0),
    ("Dumbbell Shoulder Press", Some(0.0), 0.0),
    ("Front lever raise", Some(0.3), 0.0),
    ("Goblet Squat", Some(0.6), 0.0),
    ("Hack Squat", Some(0.6), 0.0),
    ("Hammer Curl", Some(0.0), 0.0),
    ("Hanging Knee Raise", None, 0.0),
    ("Hip Thrust", Some(0.4), 0.0),
    ("Incline Bench Press", Some(0.0), 0.0),
    ("Incline Chest Press", Some(0.0), 0.0),
    ("Incline Dumbbell Bench Press", Some(0.0), 0.0),
    ("Kettlebell Deadlift", Some(0.2), 0.0),
    ("Kettlebell High Pull", None, 0.0),
    ("Kettlebell Swing", None, 0.0),
    ("Leg Curl", Some(0.05), 0.0),
    ("Leg Extension", Some(0.05), 0.0),
    ("Leg Press", Some(0.05), 0.0),
    ("Lower Back Extension", Some(0.3), 0.0),
    ("Lunge", Some(0.6), 0.0),
    ("Lying Leg Raise", Some(0.2), 0.0),
    ("Lying Leg Curl", Some(0.05), 0.0),
    ("Lying leg curl single leg", Some(0.05), 0.0),
    ("Standing Leg Curl", Some(0.05), 0.0),
    ("Machine Lateral Raise", None, 0.0),
    ("Machine Calf Raise", Some(1.0), 0.0),
    ("Military Press", Some(0.0), 0.0),
    ("Neutral grip lat pulldown", Some(0.0), 0.0),
    ("Nordic Hamstring Curl", None, 0.0),
    ("Oblique Side Bends", Some(0.3), 0.0),
    ("One Arm Dumbbell Preacher Curl", Some(0.0), 0.0),
    ("One Arm Incline Dumbbell Lateral Raise", Some(0.0), 0.0),
    ("One leg RDL", Some(0.2), 0.0),
    ("Overhead Press", Some(0.0), 0.0),
    ("Pallof Press", None, 0.0),
    ("Pec fly oblique", None, 0.0),
    ("Plank", Some(1.0), 0.0),
    ("Plank one leg", Some(1.0), 0.0),
    ("Preacher Curl", Some(0.0), 0.0),
    ("Pull Ups", Some(1.0), 0.0),
    ("Push Ups", Some(1.0), 0.0),
    ("Reverse Grip Lat Pulldown", Some(0.0), 0.0),
    ("Roman Chair Side Bend", Some(0.3), 0.0),
    ("Romanian Deadlift", Some(0.2), 0.0),
    ("STRETCH (tempinai virvute i prieki)", None, 0.0),
    ("STRETCH - Virvute", None, 0.0),
    ("Side Plank", Some(1.0), 0.0),
    ("Single Dumbbell Cossack Squat", Some(0.6), 0.0),
    ("Single Leg Press", Some(0.05), 0.0),
    ("Single leg back extension", Some(0.4), 0.0),
    ("Sit Up", Some(0.3), 0.0),
    ("Skull Crusher", Some(0.0), 0.0),
    ("Sled Leg Press", Some(0.1), 0.0),
    ("Smith Machine Incline Close Grip Push Up", Some(1.0), 0.0),
    ("Smith Machine Single Leg Deadlift", Some(0.2), 0.0),
    ("Smith Machine Squat", Some(0.6), 0.0),
    ("Squat", Some(0.6), 0.0),
    ("Tricep Pushdown", Some(0.0), 0.0),
];
