use crate::{Exercise, Goal};

const MAX_REPS_PER_SET: u32 = 15;
const MIN_REPS_PER_SET: u32 = 8;
const TARGET_REPS_PER_SET: u32 = 12;
const MAX_SETS: u32 = 5;

const DEFAULT_SETS: u32 = 3;
const DEFAULT_REPS: u32 = 10;
const DEFAULT_CARDIO_MINUTES: u32 = 20;

/// Brings an exercise's prescription into a consistent form for `goal`.
///
/// Timed exercises are reduced to a single set, high rep counts are split into several working
/// sets, and missing values are filled with goal-specific defaults. The function is idempotent.
#[must_use]
pub fn normalize(exercise: &Exercise, goal: Goal) -> Exercise {
    let mut result = exercise.clone();

    if result.is_timed() {
        result.sets = Some(1);
    } else if let Some(reps) = result.reps.filter(|r| *r > MAX_REPS_PER_SET) {
        let total_reps = reps.saturating_mul(result.sets.unwrap_or(1).max(1));
        let sets = total_reps.div_ceil(TARGET_REPS_PER_SET).min(MAX_SETS);
        result.sets = Some(sets);
        result.reps = Some(
            total_reps
                .div_ceil(sets)
                .clamp(MIN_REPS_PER_SET, MAX_REPS_PER_SET),
        );
    }

    match goal {
        Goal::Strength | Goal::Maintain => {
            if !result.sets.is_some_and(|s| s > 0) {
                result.sets = Some(DEFAULT_SETS);
            }
            if !result.reps.is_some_and(|r| r > 0) {
                result.reps = Some(DEFAULT_REPS);
            }
        }
        Goal::Cardio => {
            if !result.has_duration() {
                result.duration = Some(DEFAULT_CARDIO_MINUTES);
                result.sets = Some(1);
            }
        }
    }

    if result.has_duration() && !result.sets.is_some_and(|s| s > 0) {
        result.sets = Some(1);
    }

    result
}
