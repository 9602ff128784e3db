use crate::{ExperienceLevel, Goal, Location};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("no exercises defined for {goal} at {location} ({experience})")]
    InvalidCombination {
        goal: Goal,
        location: Location,
        experience: ExperienceLevel,
    },
    #[error("no exercises compatible with the available equipment for {goal} at {location} ({experience})")]
    NoCompatibleExercises {
        goal: Goal,
        location: Location,
        experience: ExperienceLevel,
    },
}

impl GenerationError {
    #[must_use]
    pub fn is_invalid_combination(&self) -> bool {
        matches!(self, GenerationError::InvalidCombination { .. })
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("exercises per day must satisfy 1 <= min <= max ({min} > {max} or min = 0)")]
    InvalidExerciseRange { min: usize, max: usize },
    #[error("weekly occurrence cap must be at least 1")]
    ZeroWeeklyOccurrences,
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}
