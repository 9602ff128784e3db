use serde::{Deserialize, Serialize};

use crate::SettingsError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub min_exercises_per_day: usize,
    pub max_exercises_per_day: usize,
    pub max_weekly_occurrences: u32,
    pub rest_day_note: String,
    pub fallback_rest_day_note: String,
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.min_exercises_per_day == 0 || self.min_exercises_per_day > self.max_exercises_per_day
        {
            return Err(SettingsError::InvalidExerciseRange {
                min: self.min_exercises_per_day,
                max: self.max_exercises_per_day,
            });
        }

        if self.max_weekly_occurrences == 0 {
            return Err(SettingsError::ZeroWeeklyOccurrences);
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_exercises_per_day: 4,
            max_exercises_per_day: 6,
            max_weekly_occurrences: 2,
            rest_day_note: String::from("Rest and recovery day"),
            fallback_rest_day_note: String::from(
                "Rest day: no suitable exercises were found for your profile",
            ),
        }
    }
}
