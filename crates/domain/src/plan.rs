use std::collections::{BTreeMap, BTreeSet};

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use derive_more::Display;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    Catalog, DAYS_IN_WEEK, Equipment, Exercise, ExperienceLevel, GenerationError, Goal, Location,
    Profile, RandomSource, Settings, distribute_workout_days, enforce_variety, normalize,
    select_day,
};

pub type WeekPlan = BTreeMap<DayNumber, DayEntry>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub week_plan: WeekPlan,
    pub metadata: PlanMetadata,
}

impl Plan {
    #[must_use]
    pub fn workout_days(&self) -> usize {
        self.week_plan.values().filter(|d| d.is_workout()).count()
    }

    #[must_use]
    pub fn num_sets(&self) -> u32 {
        self.week_plan.values().map(DayEntry::num_sets).sum()
    }

    #[must_use]
    pub fn estimated_duration(&self) -> Duration {
        self.week_plan
            .values()
            .map(DayEntry::estimated_duration)
            .sum()
    }

    /// Number of times each exercise (by lowercase name) is scheduled in the week.
    #[must_use]
    pub fn exercise_occurrences(&self) -> BTreeMap<String, usize> {
        let mut result = BTreeMap::new();
        for exercise in self.week_plan.values().flat_map(DayEntry::exercises) {
            *result.entry(exercise.key()).or_insert(0) += 1;
        }
        result
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanMetadata {
    pub experience_level: ExperienceLevel,
    pub goal: Goal,
    pub days_per_week: usize,
    pub equipment: BTreeSet<Equipment>,
    pub location: Location,
    pub generated_at: NaiveDateTime,
}

#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[display("Day {_0}")]
#[serde(into = "String", try_from = "String")]
pub struct DayNumber(u8);

impl DayNumber {
    pub fn new(value: u8) -> Result<Self, DayNumberError> {
        if !(1..=7).contains(&value) {
            return Err(DayNumberError::OutOfRange(value));
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl From<DayNumber> for String {
    fn from(value: DayNumber) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for DayNumber {
    type Error = DayNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value
            .strip_prefix("Day ")
            .and_then(|n| n.parse::<u8>().ok())
            .ok_or_else(|| DayNumberError::ParseError(value.clone()))
            .and_then(DayNumber::new)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DayNumberError {
    #[error("Day number must be in the range 1 to 7 ({0})")]
    OutOfRange(u8),
    #[error("Day label must have the form \"Day N\" ({0})")]
    ParseError(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DayEntry {
    #[serde(rename = "rest")]
    RestDay { date: NaiveDate, notes: String },
    #[serde(rename = "workout")]
    WorkoutDay {
        date: NaiveDate,
        exercises: Vec<Exercise>,
        notes: String,
    },
}

impl DayEntry {
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        match self {
            DayEntry::RestDay { date, .. } | DayEntry::WorkoutDay { date, .. } => *date,
        }
    }

    #[must_use]
    pub fn notes(&self) -> &str {
        match self {
            DayEntry::RestDay { notes, .. } | DayEntry::WorkoutDay { notes, .. } => notes,
        }
    }

    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        match self {
            DayEntry::RestDay { .. } => &[],
            DayEntry::WorkoutDay { exercises, .. } => exercises,
        }
    }

    #[must_use]
    pub fn is_workout(&self) -> bool {
        matches!(self, DayEntry::WorkoutDay { .. })
    }

    #[must_use]
    pub fn num_sets(&self) -> u32 {
        self.exercises()
            .iter()
            .map(|e| e.sets.unwrap_or_default())
            .sum()
    }

    #[must_use]
    pub fn estimated_duration(&self) -> Duration {
        self.exercises()
            .iter()
            .map(Exercise::estimated_duration)
            .sum()
    }
}

pub struct PlanGenerator<'a> {
    catalog: &'a Catalog,
    settings: Settings,
}

impl<'a> PlanGenerator<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog, settings: Settings) -> Self {
        Self { catalog, settings }
    }

    /// Generates a plan for the 7 days starting at `today`.
    ///
    /// Fails only if the catalog contains no exercises at all for the profile's goal. A workout
    /// day for which no exercises can be selected becomes a rest day.
    pub fn generate<S: RandomSource + ?Sized>(
        &self,
        profile: &Profile,
        today: NaiveDate,
        generated_at: NaiveDateTime,
        source: &mut S,
    ) -> Result<Plan, GenerationError> {
        if !self.catalog.has_goal(profile.goal) {
            return Err(GenerationError::InvalidCombination {
                goal: profile.goal,
                location: profile.location,
                experience: profile.experience_level,
            });
        }

        let workout_days = distribute_workout_days(profile.days_per_week);

        let week = today
            .iter_days()
            .take(DAYS_IN_WEEK)
            .enumerate()
            .zip((1..).map(DayNumber))
            .map(|((index, date), number)| {
                let entry = if workout_days.contains(&index) {
                    self.workout_day(profile, index, date, source)
                } else {
                    DayEntry::RestDay {
                        date,
                        notes: self.settings.rest_day_note.clone(),
                    }
                };
                (number, entry)
            })
            .collect::<WeekPlan>();

        let week_plan = enforce_variety(&week, self.catalog, profile.goal, &self.settings);

        let plan = Plan {
            metadata: PlanMetadata {
                experience_level: profile.experience_level,
                goal: profile.goal,
                days_per_week: week_plan.values().filter(|d| d.is_workout()).count(),
                equipment: profile.equipment.clone(),
                location: profile.location,
                generated_at,
            },
            week_plan,
        };

        info!(
            "generated {} plan with {} workout days starting {today}",
            profile.goal, plan.metadata.days_per_week
        );

        Ok(plan)
    }

    fn workout_day<S: RandomSource + ?Sized>(
        &self,
        profile: &Profile,
        index: usize,
        date: NaiveDate,
        source: &mut S,
    ) -> DayEntry {
        match select_day(self.catalog, profile, index, &self.settings, source) {
            Ok(selection) => DayEntry::WorkoutDay {
                date,
                notes: selection.note(),
                exercises: selection
                    .exercises
                    .iter()
                    .map(|e| normalize(e, profile.goal))
                    .collect(),
            },
            Err(err) => {
                warn!("{date}: falling back to rest day: {err}");
                DayEntry::RestDay {
                    date,
                    notes: self.settings.fallback_rest_day_note.clone(),
                }
            }
        }
    }
}

/// Generates a plan starting today with the built-in catalog and default settings.
pub fn generate_plan(profile: &Profile) -> Result<Plan, GenerationError> {
    let now = Local::now().naive_local();
    PlanGenerator::new(Catalog::builtin(), Settings::default()).generate(
        profile,
        now.date(),
        now,
        &mut rand::thread_rng(),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{SeedableRng, rngs::StdRng};
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::{DaysPerWeek, random::testing::LastIndex};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn generated_at() -> NaiveDateTime {
        today().and_hms_opt(8, 30, 0).unwrap()
    }

    fn profile(
        days_per_week: u8,
        goal: Goal,
        experience_level: ExperienceLevel,
        location: Location,
        equipment: &[Equipment],
    ) -> Profile {
        Profile {
            days_per_week: DaysPerWeek::new(days_per_week).unwrap(),
            experience_level,
            goal,
            equipment: equipment.iter().copied().collect(),
            location,
        }
    }

    fn generate(profile: &Profile, seed: u64) -> Plan {
        PlanGenerator::new(Catalog::builtin(), Settings::default())
            .generate(
                profile,
                today(),
                generated_at(),
                &mut StdRng::seed_from_u64(seed),
            )
            .unwrap()
    }

    fn all_profiles() -> Vec<Profile> {
        let equipment_sets: [&[Equipment]; 4] = [
            &[Equipment::Bodyweight],
            &[Equipment::Dumbbells],
            &[Equipment::Bodyweight, Equipment::HomeGym],
            &[Equipment::FullGym],
        ];
        let mut result = vec![];
        for days_per_week in 1..=7 {
            for goal in Goal::iter() {
                for experience_level in ExperienceLevel::iter() {
                    for location in Location::iter() {
                        for equipment in equipment_sets {
                            result.push(profile(
                                days_per_week,
                                goal,
                                experience_level,
                                location,
                                equipment,
                            ));
                        }
                    }
                }
            }
        }
        result
    }

    #[test]
    fn test_generate_single_day_strength_at_home() {
        let plan = generate(
            &profile(
                1,
                Goal::Strength,
                ExperienceLevel::Beginner,
                Location::Home,
                &[Equipment::Bodyweight],
            ),
            42,
        );

        for (number, entry) in &plan.week_plan {
            if number.get() == 4 {
                let exercises = entry.exercises();
                assert!(entry.is_workout());
                assert!((4..=6).contains(&exercises.len()));
                assert!(
                    exercises
                        .iter()
                        .all(|e| e.equipment == Some(Equipment::Bodyweight)
                            && e.has_sets_and_reps())
                );
            } else {
                assert_eq!(
                    entry,
                    &DayEntry::RestDay {
                        date: entry.date(),
                        notes: Settings::default().rest_day_note,
                    }
                );
            }
        }
        assert_eq!(plan.metadata.days_per_week, 1);
    }

    #[test]
    fn test_generate_single_day_exact_selection() {
        let plan = PlanGenerator::new(Catalog::builtin(), Settings::default())
            .generate(
                &profile(
                    1,
                    Goal::Strength,
                    ExperienceLevel::Beginner,
                    Location::Home,
                    &[Equipment::Bodyweight],
                ),
                today(),
                generated_at(),
                &mut LastIndex,
            )
            .unwrap();

        let day = &plan.week_plan[&DayNumber::new(4).unwrap()];
        assert_eq!(
            day.exercises()
                .iter()
                .map(|e| e.name.as_str())
                .collect::<Vec<_>>(),
            vec![
                "Tricep Dips",
                "Pike Push-ups",
                "Crunches",
                "Push-ups",
                "Bodyweight Squats",
                "Glute Bridges",
            ]
        );
        assert_eq!(day.notes(), "Focus: full body");
        assert_eq!(day.date(), NaiveDate::from_ymd_opt(2026, 10, 20).unwrap());
        assert_eq!(day.num_sets(), 16);
    }

    #[test]
    fn test_generate_every_day() {
        for goal in Goal::iter() {
            let plan = generate(
                &profile(
                    7,
                    goal,
                    ExperienceLevel::Intermediate,
                    Location::Gym,
                    &[Equipment::FullGym],
                ),
                3,
            );

            assert!(plan.week_plan.values().all(DayEntry::is_workout));
            assert_eq!(plan.workout_days(), 7);
            assert_eq!(plan.metadata.days_per_week, 7);
            assert!(
                plan.week_plan
                    .values()
                    .all(|d| d.exercises().len() >= Settings::default().min_exercises_per_day)
            );
        }
    }

    #[test]
    fn test_generate_cardio_advanced_gym() {
        for seed in 0..10 {
            let plan = generate(
                &profile(
                    5,
                    Goal::Cardio,
                    ExperienceLevel::Advanced,
                    Location::Gym,
                    &[Equipment::FullGym],
                ),
                seed,
            );

            for exercise in plan.week_plan.values().flat_map(DayEntry::exercises) {
                assert!(exercise.has_duration(), "{}", exercise.name);
                assert_eq!(exercise.sets, Some(1), "{}", exercise.name);
            }
        }
    }

    #[test]
    fn test_generate_properties() {
        for (seed, profile) in all_profiles().iter().enumerate() {
            let plan = generate(profile, seed as u64);

            assert_eq!(plan.week_plan.len(), DAYS_IN_WEEK);
            assert_eq!(
                plan.week_plan.keys().map(|n| n.get()).collect::<Vec<_>>(),
                vec![1, 2, 3, 4, 5, 6, 7]
            );
            assert_eq!(
                plan.week_plan
                    .values()
                    .map(DayEntry::date)
                    .collect::<Vec<_>>(),
                today().iter_days().take(DAYS_IN_WEEK).collect::<Vec<_>>()
            );

            assert!(plan.workout_days() <= usize::from(profile.days_per_week.get()));
            assert_eq!(plan.metadata.days_per_week, plan.workout_days());

            for (name, count) in plan.exercise_occurrences() {
                assert!(count <= 2, "{name} appears {count} times");
            }

            for exercise in plan.week_plan.values().flat_map(DayEntry::exercises) {
                if profile.goal.uses_sets_and_reps() {
                    assert!(exercise.has_sets_and_reps(), "{}", exercise.name);
                }
                if exercise.has_duration() {
                    assert_eq!(exercise.sets, Some(1), "{}", exercise.name);
                }
                assert_eq!(&normalize(exercise, profile.goal), exercise);
            }
        }
    }

    #[test]
    fn test_generate_reproducible_with_seed() {
        let profile = profile(
            4,
            Goal::Maintain,
            ExperienceLevel::Advanced,
            Location::Home,
            &[Equipment::Dumbbells],
        );

        assert_eq!(generate(&profile, 11), generate(&profile, 11));
    }

    #[test]
    fn test_generate_missing_bucket_becomes_rest_day() {
        let mut buckets = BTreeMap::new();
        buckets.insert(
            (Goal::Strength, Location::Gym, ExperienceLevel::Advanced),
            vec![Exercise {
                name: "Barbell Deadlift".to_string(),
                sets: Some(5),
                reps: Some(5),
                equipment: Some(Equipment::FullGym),
                ..Exercise::default()
            }],
        );
        let catalog = Catalog::new(buckets);

        let plan = PlanGenerator::new(&catalog, Settings::default())
            .generate(
                &profile(
                    3,
                    Goal::Strength,
                    ExperienceLevel::Beginner,
                    Location::Home,
                    &[Equipment::Bodyweight],
                ),
                today(),
                generated_at(),
                &mut LastIndex,
            )
            .unwrap();

        assert_eq!(plan.workout_days(), 0);
        assert_eq!(plan.metadata.days_per_week, 0);
        for number in [1, 4, 7] {
            assert_eq!(
                plan.week_plan[&DayNumber::new(number).unwrap()].notes(),
                Settings::default().fallback_rest_day_note
            );
        }
        for number in [2, 3, 5, 6] {
            assert_eq!(
                plan.week_plan[&DayNumber::new(number).unwrap()].notes(),
                Settings::default().rest_day_note
            );
        }
    }

    #[test]
    fn test_generate_unknown_goal() {
        let catalog = Catalog::default();

        assert_eq!(
            PlanGenerator::new(&catalog, Settings::default()).generate(
                &Profile::default(),
                today(),
                generated_at(),
                &mut LastIndex,
            ),
            Err(GenerationError::InvalidCombination {
                goal: Goal::Maintain,
                location: Location::Home,
                experience: ExperienceLevel::Beginner,
            })
        );
    }

    #[test]
    fn test_generate_plan_now() {
        let plan = generate_plan(&Profile::default()).unwrap();

        assert_eq!(plan.week_plan.len(), DAYS_IN_WEEK);
        assert_eq!(
            plan.week_plan[&DayNumber::new(1).unwrap()].date(),
            plan.metadata.generated_at.date()
        );
    }

    #[test]
    fn test_plan_metadata() {
        let profile = profile(
            3,
            Goal::Cardio,
            ExperienceLevel::Beginner,
            Location::Home,
            &[Equipment::Bodyweight],
        );
        let plan = generate(&profile, 5);

        assert_eq!(
            plan.metadata,
            PlanMetadata {
                experience_level: ExperienceLevel::Beginner,
                goal: Goal::Cardio,
                days_per_week: 3,
                equipment: BTreeSet::from([Equipment::Bodyweight]),
                location: Location::Home,
                generated_at: generated_at(),
            }
        );
    }

    #[test]
    fn test_plan_summaries() {
        let date = today();
        let plan = Plan {
            week_plan: WeekPlan::from([
                (
                    DayNumber(1),
                    DayEntry::WorkoutDay {
                        date,
                        exercises: vec![
                            Exercise {
                                name: "Push-ups".to_string(),
                                sets: Some(3),
                                reps: Some(10),
                                rest_time_seconds: Some(60),
                                ..Exercise::default()
                            },
                            Exercise {
                                name: "Rowing".to_string(),
                                sets: Some(1),
                                duration: Some(10),
                                ..Exercise::default()
                            },
                        ],
                        notes: String::new(),
                    },
                ),
                (
                    DayNumber(2),
                    DayEntry::RestDay {
                        date,
                        notes: String::new(),
                    },
                ),
                (
                    DayNumber(3),
                    DayEntry::WorkoutDay {
                        date,
                        exercises: vec![Exercise {
                            name: "push-ups".to_string(),
                            sets: Some(2),
                            reps: Some(5),
                            rest_time_seconds: Some(30),
                            ..Exercise::default()
                        }],
                        notes: String::new(),
                    },
                ),
            ]),
            metadata: PlanMetadata {
                experience_level: ExperienceLevel::Beginner,
                goal: Goal::Maintain,
                days_per_week: 2,
                equipment: BTreeSet::new(),
                location: Location::Home,
                generated_at: generated_at(),
            },
        };

        assert_eq!(plan.workout_days(), 2);
        assert_eq!(plan.num_sets(), 6);
        assert_eq!(
            plan.estimated_duration(),
            Duration::seconds(300) + Duration::minutes(10) + Duration::seconds(100)
        );
        assert_eq!(
            plan.exercise_occurrences(),
            BTreeMap::from([("push-ups".to_string(), 2), ("rowing".to_string(), 1)])
        );
    }

    #[rstest]
    #[case(0, Err(DayNumberError::OutOfRange(0)))]
    #[case(1, Ok(DayNumber(1)))]
    #[case(7, Ok(DayNumber(7)))]
    #[case(8, Err(DayNumberError::OutOfRange(8)))]
    fn test_day_number_new(#[case] value: u8, #[case] expected: Result<DayNumber, DayNumberError>) {
        assert_eq!(DayNumber::new(value), expected);
    }

    #[rstest]
    #[case("Day 3", Ok(DayNumber(3)))]
    #[case("Day 9", Err(DayNumberError::OutOfRange(9)))]
    #[case("Monday", Err(DayNumberError::ParseError("Monday".to_string())))]
    fn test_day_number_try_from(
        #[case] value: &str,
        #[case] expected: Result<DayNumber, DayNumberError>,
    ) {
        assert_eq!(DayNumber::try_from(value.to_string()), expected);
    }

    #[test]
    fn test_plan_serialize() {
        let plan = PlanGenerator::new(Catalog::builtin(), Settings::default())
            .generate(
                &profile(
                    2,
                    Goal::Strength,
                    ExperienceLevel::Beginner,
                    Location::Home,
                    &[Equipment::Bodyweight],
                ),
                today(),
                generated_at(),
                &mut LastIndex,
            )
            .unwrap();

        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["weekPlan"]["Day 2"]["type"], "rest");
        assert_eq!(json["weekPlan"]["Day 2"]["date"], "2026-10-18");
        assert_eq!(json["weekPlan"]["Day 1"]["type"], "workout");
        assert_eq!(
            json["weekPlan"]["Day 1"]["exercises"][0]["equipmentTag"],
            "bodyweight"
        );
        assert_eq!(json["metadata"]["daysPerWeek"], 2);
        assert_eq!(json["metadata"]["goal"], "strength");

        let deserialized: Plan = serde_json::from_value(json).unwrap();
        assert_eq!(deserialized, plan);
    }
}
