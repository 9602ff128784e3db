use std::collections::HashSet;

use log::debug;

use crate::{
    Catalog, Exercise, Focus, GenerationError, Profile, RandomSource, Settings,
    filter_by_equipment, shuffle,
};

#[derive(Debug, Clone, PartialEq)]
pub struct DaySelection {
    pub exercises: Vec<Exercise>,
    pub focus: Focus,
    pub narrowed: bool,
}

impl DaySelection {
    #[must_use]
    pub fn note(&self) -> String {
        self.focus.note(self.narrowed)
    }
}

/// Selects the exercises of a single workout day.
///
/// `day` is the index of the day in the week (0 = today) and determines both the rotation
/// focus and the start of the selection window.
pub fn select_exercises_for_day<S: RandomSource + ?Sized>(
    catalog: &Catalog,
    profile: &Profile,
    day: usize,
    settings: &Settings,
    source: &mut S,
) -> Result<Vec<Exercise>, GenerationError> {
    select_day(catalog, profile, day, settings, source).map(|s| s.exercises)
}

pub fn select_day<S: RandomSource + ?Sized>(
    catalog: &Catalog,
    profile: &Profile,
    day: usize,
    settings: &Settings,
    source: &mut S,
) -> Result<DaySelection, GenerationError> {
    let goal = profile.goal;
    let location = profile.location;
    let experience = profile.experience_level;

    let bucket = catalog.bucket(goal, location, experience).ok_or(
        GenerationError::InvalidCombination {
            goal,
            location,
            experience,
        },
    )?;

    let mut pool = filter_by_equipment(bucket, &profile.equipment);
    if pool.is_empty() {
        debug!(
            "no compatible exercises for {goal} at {location}, trying {}",
            location.opposite()
        );
        pool = catalog
            .bucket(goal, location.opposite(), experience)
            .map(|b| filter_by_equipment(b, &profile.equipment))
            .unwrap_or_default();
    }

    if goal.uses_sets_and_reps() {
        pool.retain(Exercise::has_sets_and_reps);
    }

    if pool.is_empty() {
        return Err(GenerationError::NoCompatibleExercises {
            goal,
            location,
            experience,
        });
    }

    let focus = Focus::for_day(goal, day);
    let matching = pool
        .iter()
        .filter(|e| focus.matches(e))
        .cloned()
        .collect::<Vec<_>>();
    let narrowed = matching.len() >= focus.min_matches();
    if narrowed {
        pool = matching;
    }
    debug!(
        "day {day}: {} candidates, {}",
        pool.len(),
        focus.note(narrowed)
    );

    let num_exercises = pool
        .len()
        .max(settings.min_exercises_per_day)
        .min(settings.max_exercises_per_day);

    shuffle(&mut pool, source);

    Ok(DaySelection {
        exercises: take_window(&pool, (day * 2) % pool.len(), num_exercises),
        focus,
        narrowed,
    })
}

fn take_window(pool: &[Exercise], start: usize, count: usize) -> Vec<Exercise> {
    let mut seen = HashSet::new();
    let mut result = Vec::with_capacity(count);

    for offset in 0..pool.len() {
        if result.len() == count {
            break;
        }
        let exercise = &pool[(start + offset) % pool.len()];
        if seen.insert(exercise.key()) {
            result.push(exercise.clone());
        }
    }

    result
}
