use std::{collections::BTreeSet, str::FromStr};

use derive_more::{Display, Into};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::Equipment;

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
pub enum Goal {
    Strength,
    Cardio,
    Maintain,
}

impl Goal {
    /// Maps the broader goal vocabulary of the onboarding flow onto the three generator goals.
    #[must_use]
    pub fn from_onboarding(value: &str) -> Self {
        match normalize_answer(value).as_str() {
            "strength" | "build_muscle" | "gain_strength" | "gain_muscle" => Goal::Strength,
            "cardio" | "lose_weight" | "weight_loss" | "improve_endurance" | "endurance" => {
                Goal::Cardio
            }
            "maintain" | "stay_fit" | "general_fitness" | "stay_healthy" => Goal::Maintain,
            other => {
                warn!("unknown goal \"{other}\", falling back to {}", Goal::Maintain);
                Goal::Maintain
            }
        }
    }

    /// Whether exercises for this goal are prescribed as sets and reps.
    #[must_use]
    pub fn uses_sets_and_reps(self) -> bool {
        matches!(self, Goal::Strength | Goal::Maintain)
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
    strum::EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Gym,
    Home,
}

impl Location {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Location::Gym => Location::Home,
            Location::Home => Location::Gym,
        }
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
    strum::EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(
    Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct DaysPerWeek(u8);

impl DaysPerWeek {
    pub const MAX: u8 = 7;

    pub fn new(value: u8) -> Result<Self, DaysPerWeekError> {
        if !(1..=Self::MAX).contains(&value) {
            return Err(DaysPerWeekError::OutOfRange(value));
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn clamped(value: i64) -> Self {
        Self(u8::try_from(value.clamp(1, i64::from(Self::MAX))).unwrap_or(1))
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for DaysPerWeek {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for DaysPerWeek {
    type Error = DaysPerWeekError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        DaysPerWeek::new(value)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DaysPerWeekError {
    #[error("Days per week must be in the range 1 to 7 ({0})")]
    OutOfRange(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub days_per_week: DaysPerWeek,
    pub experience_level: ExperienceLevel,
    pub goal: Goal,
    pub equipment: BTreeSet<Equipment>,
    pub location: Location,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            days_per_week: DaysPerWeek::default(),
            experience_level: ExperienceLevel::Beginner,
            goal: Goal::Maintain,
            equipment: BTreeSet::from([Equipment::Bodyweight]),
            location: Location::Home,
        }
    }
}

/// Raw answers collected by the onboarding flow.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Onboarding {
    pub days_per_week: Option<i64>,
    pub experience_level: String,
    pub goal: String,
    pub equipment: Vec<String>,
    pub location: String,
}

impl From<&Onboarding> for Profile {
    fn from(value: &Onboarding) -> Self {
        let defaults = Profile::default();

        let days_per_week = value
            .days_per_week
            .map_or(defaults.days_per_week, DaysPerWeek::clamped);

        let experience_level = parse_or(&value.experience_level, defaults.experience_level);
        let location = parse_or(&value.location, defaults.location);

        let mut equipment = value
            .equipment
            .iter()
            .filter_map(|e| match Equipment::from_str(&normalize_answer(e)) {
                Ok(equipment) => Some(equipment),
                Err(_) => {
                    debug!("ignoring unknown equipment \"{e}\"");
                    None
                }
            })
            .collect::<BTreeSet<_>>();
        if equipment.is_empty() {
            equipment = defaults.equipment;
        }

        Profile {
            days_per_week,
            experience_level,
            goal: Goal::from_onboarding(&value.goal),
            equipment,
            location,
        }
    }
}

fn parse_or<T: FromStr + std::fmt::Display>(value: &str, default: T) -> T {
    T::from_str(&normalize_answer(value)).unwrap_or_else(|_| {
        if !value.trim().is_empty() {
            warn!("unknown onboarding answer \"{value}\", falling back to {default}");
        }
        default
    })
}

fn normalize_answer(value: &str) -> String {
    value.trim().to_lowercase().replace([' ', '-'], "_")
}
