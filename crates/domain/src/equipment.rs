use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::Exercise;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    Bodyweight,
    Dumbbells,
    HomeGym,
    FullGym,
}

impl Equipment {
    /// Whether a user owning `self` can perform an exercise tagged with `required`.
    #[must_use]
    pub fn satisfies(self, required: Equipment) -> bool {
        match self {
            Equipment::FullGym => true,
            Equipment::HomeGym => matches!(
                required,
                Equipment::Bodyweight | Equipment::Dumbbells | Equipment::HomeGym
            ),
            Equipment::Dumbbells => {
                matches!(required, Equipment::Bodyweight | Equipment::Dumbbells)
            }
            Equipment::Bodyweight => required == Equipment::Bodyweight,
        }
    }
}

#[must_use]
pub fn is_compatible(exercise: &Exercise, equipment: &BTreeSet<Equipment>) -> bool {
    match exercise.equipment {
        None => true,
        Some(required) => equipment.iter().any(|owned| owned.satisfies(required)),
    }
}

#[must_use]
pub fn filter_by_equipment(exercises: &[Exercise], equipment: &BTreeSet<Equipment>) -> Vec<Exercise> {
    exercises
        .iter()
        .filter(|e| is_compatible(e, equipment))
        .cloned()
        .collect()
}
