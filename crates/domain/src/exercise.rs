use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::{Equipment, Goal};

const SECONDS_PER_REP: i64 = 4;
const DEFAULT_REST_SECONDS: u32 = 60;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    /// Minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_time_seconds: Option<u32>,
    #[serde(default, rename = "equipmentTag", skip_serializing_if = "Option::is_none")]
    pub equipment: Option<Equipment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<Intensity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Exercise {
    /// Identity used for weekly variety capping.
    #[must_use]
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    #[must_use]
    pub fn has_duration(&self) -> bool {
        self.duration.is_some_and(|d| d > 0)
    }

    #[must_use]
    pub fn is_run(&self) -> bool {
        self.key().contains("run")
    }

    /// Timed activities are performed as one continuous set.
    #[must_use]
    pub fn is_timed(&self) -> bool {
        self.has_duration() || self.is_run()
    }

    #[must_use]
    pub fn has_sets_and_reps(&self) -> bool {
        self.sets.is_some_and(|s| s > 0) && self.reps.is_some_and(|r| r > 0)
    }

    #[must_use]
    pub fn estimated_duration(&self) -> Duration {
        if let Some(minutes) = self.duration.filter(|d| *d > 0) {
            return Duration::minutes(i64::from(minutes));
        }
        let sets = i64::from(self.sets.unwrap_or(1).max(1));
        let reps = i64::from(self.reps.unwrap_or(0));
        let rest = i64::from(self.rest_time_seconds.unwrap_or(DEFAULT_REST_SECONDS));
        Duration::seconds(sets * (reps * SECONDS_PER_REP + rest))
    }
}

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
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
    Core,
}

impl MuscleGroup {
    pub const ROTATION: [MuscleGroup; 6] = [
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Legs,
        MuscleGroup::Shoulders,
        MuscleGroup::Arms,
        MuscleGroup::Core,
    ];

    #[must_use]
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            MuscleGroup::Chest => &["push", "chest", "bench", "fly"],
            MuscleGroup::Back => &["row", "pull", "lat", "back", "deadlift", "superman"],
            MuscleGroup::Legs => &["squat", "lunge", "leg", "calf", "glute", "step-up"],
            MuscleGroup::Shoulders => &["shoulder", "overhead", "lateral", "pike", "arnold"],
            MuscleGroup::Arms => &["curl", "tricep", "bicep", "dip", "hammer"],
            MuscleGroup::Core => &["plank", "crunch", "twist", "core", "sit-up", "climber"],
        }
    }

    #[must_use]
    pub fn matches(self, exercise: &Exercise) -> bool {
        let name = exercise.key();
        self.keywords().iter().any(|k| name.contains(k))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum CardioType {
    Running,
    Walking,
    Cycling,
    Rowing,
    Elliptical,
    Jumping,
    Climbing,
}

impl CardioType {
    pub const ROTATION: [CardioType; 7] = [
        CardioType::Running,
        CardioType::Walking,
        CardioType::Cycling,
        CardioType::Rowing,
        CardioType::Elliptical,
        CardioType::Jumping,
        CardioType::Climbing,
    ];

    #[must_use]
    pub fn matches(self, exercise: &Exercise) -> bool {
        exercise.key().contains(&self.to_string())
    }
}

/// Category a workout day rotates to, derived from the day index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Muscle(MuscleGroup),
    Cardio(CardioType),
}

impl Focus {
    #[must_use]
    pub fn for_day(goal: Goal, day: usize) -> Self {
        match goal {
            Goal::Strength | Goal::Maintain => {
                Focus::Muscle(MuscleGroup::ROTATION[day % MuscleGroup::ROTATION.len()])
            }
            Goal::Cardio => Focus::Cardio(CardioType::ROTATION[day % CardioType::ROTATION.len()]),
        }
    }

    #[must_use]
    pub fn matches(self, exercise: &Exercise) -> bool {
        match self {
            Focus::Muscle(group) => group.matches(exercise),
            Focus::Cardio(cardio_type) => cardio_type.matches(exercise),
        }
    }

    /// Minimum number of matching exercises required to narrow a pool to this focus.
    #[must_use]
    pub fn min_matches(self) -> usize {
        match self {
            Focus::Muscle(_) => 3,
            Focus::Cardio(_) => 2,
        }
    }

    #[must_use]
    pub fn note(self, narrowed: bool) -> String {
        match (self, narrowed) {
            (Focus::Muscle(group), true) => format!("Focus: {group}"),
            (Focus::Cardio(cardio_type), true) => format!("Focus: {cardio_type}"),
            (Focus::Muscle(_), false) => String::from("Focus: full body"),
            (Focus::Cardio(_), false) => String::from("Focus: mixed cardio"),
        }
    }
}
