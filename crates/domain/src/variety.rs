use std::collections::BTreeMap;

use log::debug;

use crate::{Catalog, DayEntry, Exercise, Goal, Settings, WeekPlan, normalize};

type Occurrences = BTreeMap<String, u32>;

/// Caps how often an exercise appears in a week and backfills days that end up too short.
///
/// Days are processed in order. An exercise is dropped once it has already been scheduled
/// `max_weekly_occurrences` times. Workout days left with fewer than `min_exercises_per_day`
/// exercises are filled with exercises of the goal that have not been used in the week yet.
/// Day types are never changed.
#[must_use]
pub fn enforce_variety(
    week: &WeekPlan,
    catalog: &Catalog,
    goal: Goal,
    settings: &Settings,
) -> WeekPlan {
    let candidates = catalog
        .exercises_for_goal(goal)
        .filter(|e| !goal.uses_sets_and_reps() || e.has_sets_and_reps())
        .collect::<Vec<_>>();

    week.iter()
        .fold(
            (WeekPlan::new(), Occurrences::new()),
            |(mut result, occurrences), (number, entry)| {
                let (entry, occurrences) =
                    enforce_day(entry, occurrences, &candidates, goal, settings);
                result.insert(*number, entry);
                (result, occurrences)
            },
        )
        .0
}

fn enforce_day(
    entry: &DayEntry,
    mut occurrences: Occurrences,
    candidates: &[&Exercise],
    goal: Goal,
    settings: &Settings,
) -> (DayEntry, Occurrences) {
    let DayEntry::WorkoutDay {
        date,
        exercises,
        notes,
    } = entry
    else {
        return (entry.clone(), occurrences);
    };

    let mut kept = Vec::with_capacity(settings.max_exercises_per_day);
    for exercise in exercises {
        let count = occurrences.entry(exercise.key()).or_insert(0);
        if *count < settings.max_weekly_occurrences {
            *count += 1;
            kept.push(exercise.clone());
        }
    }

    let dropped = exercises.len() - kept.len();
    let mut backfilled = 0;
    for candidate in candidates {
        if kept.len() >= settings.min_exercises_per_day {
            break;
        }
        let key = candidate.key();
        if occurrences.get(&key).copied().unwrap_or(0) == 0 {
            occurrences.insert(key, 1);
            kept.push(normalize(candidate, goal));
            backfilled += 1;
        }
    }

    if dropped > 0 || backfilled > 0 {
        debug!("{date}: dropped {dropped} repeated exercises, backfilled {backfilled}");
    }

    (
        DayEntry::WorkoutDay {
            date: *date,
            exercises: kept,
            notes: notes.clone(),
        },
        occurrences,
    )
}
