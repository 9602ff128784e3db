use std::collections::BTreeMap;

use crate::{
    Equipment, Exercise, ExperienceLevel, Goal, Intensity, Location,
    Equipment::{Bodyweight, Dumbbells, FullGym, HomeGym},
    ExperienceLevel::{Advanced, Beginner, Intermediate},
    Intensity::{High, Low, Medium},
};

type BucketKey = (Goal, Location, ExperienceLevel);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    buckets: BTreeMap<BucketKey, Vec<Exercise>>,
}

impl Catalog {
    #[must_use]
    pub fn new(buckets: BTreeMap<BucketKey, Vec<Exercise>>) -> Self {
        Self { buckets }
    }

    #[must_use]
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    #[must_use]
    pub fn bucket(
        &self,
        goal: Goal,
        location: Location,
        experience: ExperienceLevel,
    ) -> Option<&[Exercise]> {
        self.buckets
            .get(&(goal, location, experience))
            .map(Vec::as_slice)
    }

    #[must_use]
    pub fn has_goal(&self, goal: Goal) -> bool {
        self.buckets.keys().any(|(g, _, _)| *g == goal)
    }

    /// All exercises of a goal across locations and experience levels, in scan order.
    pub fn exercises_for_goal(&self, goal: Goal) -> impl Iterator<Item = &Exercise> {
        self.buckets
            .iter()
            .filter(move |((g, _, _), _)| *g == goal)
            .flat_map(|(_, exercises)| exercises.iter())
    }
}

static BUILTIN: std::sync::LazyLock<Catalog> = std::sync::LazyLock::new(|| {
    Catalog::new(
        BUCKETS
            .iter()
            .map(|(goal, location, experience, entries)| {
                (
                    (*goal, *location, *experience),
                    entries.iter().map(Exercise::from).collect(),
                )
            })
            .collect(),
    )
});

#[cfg_attr(test, derive(Debug, PartialEq))]
struct CatalogEntry {
    name: &'static str,
    sets: Option<u32>,
    reps: Option<u32>,
    duration: Option<u32>,
    rest_time_seconds: Option<u32>,
    equipment: Equipment,
    intensity: Option<Intensity>,
    notes: Option<&'static str>,
}

impl CatalogEntry {
    const fn with_notes(mut self, notes: &'static str) -> Self {
        self.notes = Some(notes);
        self
    }
}

impl From<&CatalogEntry> for Exercise {
    fn from(value: &CatalogEntry) -> Self {
        Exercise {
            name: value.name.to_string(),
            sets: value.sets,
            reps: value.reps,
            duration: value.duration,
            rest_time_seconds: value.rest_time_seconds,
            equipment: Some(value.equipment),
            intensity: value.intensity,
            notes: value.notes.map(str::to_string),
        }
    }
}

const fn sets_reps(
    name: &'static str,
    sets: u32,
    reps: u32,
    rest: u32,
    equipment: Equipment,
) -> CatalogEntry {
    CatalogEntry {
        name,
        sets: Some(sets),
        reps: Some(reps),
        duration: None,
        rest_time_seconds: Some(rest),
        equipment,
        intensity: None,
        notes: None,
    }
}

const fn timed(
    name: &'static str,
    minutes: u32,
    equipment: Equipment,
    intensity: Intensity,
) -> CatalogEntry {
    CatalogEntry {
        name,
        sets: None,
        reps: None,
        duration: Some(minutes),
        rest_time_seconds: None,
        equipment,
        intensity: Some(intensity),
        notes: None,
    }
}

const BUCKETS: [(Goal, Location, ExperienceLevel, &[CatalogEntry]); 18] = [
    (
        Goal::Strength,
        Location::Gym,
        Beginner,
        &[
            sets_reps("Machine Chest Press", 3, 10, 90, FullGym),
            sets_reps("Lat Pulldown", 3, 10, 90, FullGym),
            sets_reps("Leg Press", 3, 12, 90, FullGym),
            sets_reps("Seated Cable Row", 3, 10, 90, FullGym),
            sets_reps("Dumbbell Shoulder Press", 3, 10, 90, Dumbbells),
            sets_reps("Dumbbell Bicep Curls", 3, 12, 60, Dumbbells),
            sets_reps("Tricep Pushdowns", 3, 12, 60, FullGym),
            sets_reps("Goblet Squats", 3, 10, 90, Dumbbells),
            sets_reps("Crunches", 3, 15, 45, Bodyweight),
            timed("Plank Hold", 1, Bodyweight, Medium),
        ],
    ),
    (
        Goal::Strength,
        Location::Gym,
        Intermediate,
        &[
            sets_reps("Barbell Bench Press", 4, 8, 120, FullGym),
            sets_reps("Barbell Back Squat", 4, 8, 150, FullGym),
            sets_reps("Bent-Over Barbell Row", 4, 8, 120, FullGym),
            sets_reps("Overhead Press", 4, 8, 120, FullGym),
            sets_reps("Romanian Deadlift", 3, 10, 120, FullGym),
            sets_reps("Pull-ups", 3, 8, 90, FullGym),
            sets_reps("Incline Dumbbell Fly", 3, 12, 60, Dumbbells),
            sets_reps("Hammer Curls", 3, 12, 60, Dumbbells),
            sets_reps("Cable Tricep Extensions", 3, 12, 60, FullGym),
            sets_reps("Walking Lunges", 3, 20, 90, Dumbbells)
                .with_notes("Count each leg as one rep"),
            sets_reps("Hanging Leg Raises", 3, 12, 60, FullGym),
        ],
    ),
    (
        Goal::Strength,
        Location::Gym,
        Advanced,
        &[
            sets_reps("Barbell Deadlift", 5, 5, 180, FullGym),
            sets_reps("Barbell Back Squat", 5, 5, 180, FullGym),
            sets_reps("Weighted Pull-ups", 4, 6, 150, FullGym),
            sets_reps("Barbell Bench Press", 5, 5, 180, FullGym),
            sets_reps("Standing Overhead Press", 5, 5, 150, FullGym),
            sets_reps("Pendlay Row", 4, 6, 120, FullGym),
            sets_reps("Weighted Dips", 4, 8, 120, FullGym),
            sets_reps("Barbell Curls", 3, 10, 90, FullGym),
            sets_reps("Bulgarian Split Squats", 3, 10, 90, Dumbbells),
            sets_reps("Cable Crunches", 3, 15, 60, FullGym),
            timed("Weighted Plank Hold", 2, FullGym, High),
        ],
    ),
    (
        Goal::Strength,
        Location::Home,
        Beginner,
        &[
            sets_reps("Push-ups", 3, 10, 60, Bodyweight),
            sets_reps("Bodyweight Squats", 3, 15, 60, Bodyweight),
            sets_reps("Glute Bridges", 3, 15, 45, Bodyweight),
            sets_reps("Knee Push-ups", 3, 12, 60, Bodyweight),
            sets_reps("Superman Holds", 3, 12, 45, Bodyweight),
            sets_reps("Reverse Lunges", 3, 10, 60, Bodyweight),
            sets_reps("Tricep Dips", 3, 10, 60, Bodyweight).with_notes("Use a sturdy chair"),
            sets_reps("Pike Push-ups", 3, 8, 60, Bodyweight),
            sets_reps("Crunches", 3, 15, 45, Bodyweight),
            sets_reps("Dumbbell Rows", 3, 10, 60, Dumbbells),
            sets_reps("Dumbbell Lateral Raises", 3, 12, 45, Dumbbells),
            timed("Plank Hold", 1, Bodyweight, Medium),
        ],
    ),
    (
        Goal::Strength,
        Location::Home,
        Intermediate,
        &[
            sets_reps("Decline Push-ups", 4, 12, 60, Bodyweight),
            sets_reps("Jump Squats", 4, 12, 60, Bodyweight),
            sets_reps("Dumbbell Floor Press", 4, 10, 90, Dumbbells),
            sets_reps("Dumbbell Romanian Deadlift", 4, 10, 90, Dumbbells),
            sets_reps("Single-Arm Dumbbell Row", 4, 10, 60, Dumbbells),
            sets_reps("Bulgarian Split Squats", 3, 10, 90, Dumbbells),
            sets_reps("Arnold Press", 3, 10, 60, Dumbbells),
            sets_reps("Diamond Push-ups", 3, 12, 60, Bodyweight),
            sets_reps("Bicycle Crunches", 3, 20, 45, Bodyweight),
            sets_reps("Resistance Band Pull-Aparts", 3, 15, 45, HomeGym),
            timed("Plank Hold", 2, Bodyweight, Medium),
        ],
    ),
    (
        Goal::Strength,
        Location::Home,
        Advanced,
        &[
            sets_reps("Archer Push-ups", 4, 8, 90, Bodyweight),
            sets_reps("Pistol Squats", 4, 6, 90, Bodyweight),
            sets_reps("Pull-ups", 4, 8, 90, HomeGym),
            sets_reps("Dumbbell Thrusters", 4, 10, 90, Dumbbells),
            sets_reps("Renegade Rows", 4, 8, 90, Dumbbells),
            sets_reps("Handstand Push-ups", 4, 6, 120, Bodyweight)
                .with_notes("Use a wall for balance"),
            sets_reps("Dumbbell Tricep Extensions", 3, 12, 60, Dumbbells),
            sets_reps("Nordic Hamstring Curls", 3, 6, 120, HomeGym),
            sets_reps("Hanging Knee Raises", 3, 12, 60, HomeGym),
            sets_reps("V-Ups", 3, 15, 60, Bodyweight),
            sets_reps("Weighted Step-ups", 3, 12, 60, Dumbbells),
        ],
    ),
    (
        Goal::Cardio,
        Location::Gym,
        Beginner,
        &[
            timed("Treadmill Walking", 20, FullGym, Low),
            timed("Stationary Cycling", 20, FullGym, Low),
            timed("Elliptical Trainer", 15, FullGym, Low),
            timed("Rowing Machine", 10, FullGym, Medium),
            timed("Easy Treadmill Running", 10, FullGym, Medium),
            timed("Stair Climbing", 10, FullGym, Medium),
            timed("Jumping Jacks", 5, Bodyweight, Medium),
        ],
    ),
    (
        Goal::Cardio,
        Location::Gym,
        Intermediate,
        &[
            timed("Treadmill Running", 25, FullGym, Medium),
            timed("Incline Walking", 20, FullGym, Medium),
            timed("Spin Bike Cycling", 25, FullGym, Medium),
            timed("Rowing Intervals", 15, FullGym, High),
            timed("Elliptical Intervals", 20, FullGym, Medium),
            timed("Stair Climbing", 15, FullGym, High),
            timed("Jumping Lunges", 10, Bodyweight, High),
            timed("Battle Ropes", 10, FullGym, High),
        ],
    ),
    (
        Goal::Cardio,
        Location::Gym,
        Advanced,
        &[
            timed("Interval Running", 30, FullGym, High),
            timed("Hill Walking", 30, FullGym, Medium),
            timed("Assault Bike Cycling", 20, FullGym, High),
            timed("Rowing Machine Sprints", 20, FullGym, High),
            timed("Elliptical HIIT", 25, FullGym, High),
            timed("Jumping Burpees", 10, Bodyweight, High),
            timed("Stair Climbing Intervals", 20, FullGym, High),
            timed("Sled Pushes", 10, FullGym, High).with_notes("Rest as needed between lengths"),
        ],
    ),
    (
        Goal::Cardio,
        Location::Home,
        Beginner,
        &[
            timed("Brisk Walking", 20, Bodyweight, Low),
            timed("Marching in Place", 10, Bodyweight, Low),
            timed("Jumping Jacks", 5, Bodyweight, Medium),
            timed("Stair Climbing", 10, Bodyweight, Medium),
            timed("Low-Impact Cardio Circuit", 15, Bodyweight, Low),
            timed("Shadow Boxing", 10, Bodyweight, Medium),
        ],
    ),
    (
        Goal::Cardio,
        Location::Home,
        Intermediate,
        &[
            timed("Outdoor Running", 25, Bodyweight, Medium),
            timed("Power Walking", 30, Bodyweight, Medium),
            timed("Jumping Jacks", 10, Bodyweight, Medium),
            timed("High Knees", 10, Bodyweight, High),
            timed("Burpees", 10, Bodyweight, High),
            timed("Stationary Cycling", 30, HomeGym, Medium),
            timed("Dance Cardio", 20, Bodyweight, Medium),
            sets_reps("Mountain Climbers", 3, 30, 30, Bodyweight),
        ],
    ),
    (
        Goal::Cardio,
        Location::Home,
        Advanced,
        &[
            timed("Tempo Running", 30, Bodyweight, High),
            timed("Hill Running Sprints", 20, Bodyweight, High),
            timed("Tabata Jumping Squats", 16, Bodyweight, High),
            timed("Burpee Intervals", 15, Bodyweight, High),
            timed("Rowing Machine Intervals", 20, HomeGym, High),
            timed("Stair Climbing Sprints", 15, Bodyweight, High),
            timed("Indoor Cycling", 40, HomeGym, Medium),
        ],
    ),
    (
        Goal::Maintain,
        Location::Gym,
        Beginner,
        &[
            sets_reps("Machine Chest Press", 2, 12, 60, FullGym),
            sets_reps("Seated Cable Row", 2, 12, 60, FullGym),
            sets_reps("Leg Press", 2, 12, 60, FullGym),
            sets_reps("Dumbbell Shoulder Press", 2, 12, 60, Dumbbells),
            sets_reps("Cable Bicep Curls", 2, 12, 45, FullGym),
            sets_reps("Bodyweight Squats", 2, 15, 45, Bodyweight),
            sets_reps("Crunches", 2, 15, 45, Bodyweight),
            timed("Stationary Cycling", 15, FullGym, Low),
        ],
    ),
    (
        Goal::Maintain,
        Location::Gym,
        Intermediate,
        &[
            sets_reps("Dumbbell Bench Press", 3, 12, 60, Dumbbells),
            sets_reps("Lat Pulldown", 3, 12, 60, FullGym),
            sets_reps("Goblet Squats", 3, 12, 60, Dumbbells),
            sets_reps("Cable Face Pulls", 3, 15, 45, FullGym),
            sets_reps("Dumbbell Lateral Raises", 3, 15, 45, Dumbbells),
            sets_reps("Tricep Rope Pushdowns", 3, 12, 45, FullGym),
            sets_reps("Russian Twists", 3, 20, 45, Bodyweight),
            sets_reps("Walking Lunges", 3, 12, 60, Dumbbells),
        ],
    ),
    (
        Goal::Maintain,
        Location::Gym,
        Advanced,
        &[
            sets_reps("Barbell Bench Press", 3, 10, 90, FullGym),
            sets_reps("Trap Bar Deadlift", 3, 8, 120, FullGym),
            sets_reps("Front Squats", 3, 8, 120, FullGym),
            sets_reps("Chin-ups", 3, 10, 90, FullGym),
            sets_reps("Push Press", 3, 8, 90, FullGym),
            sets_reps("EZ-Bar Curls", 3, 12, 60, FullGym),
            sets_reps("Cable Woodchoppers", 3, 12, 60, FullGym),
            sets_reps("Hanging Leg Raises", 3, 12, 60, FullGym),
        ],
    ),
    (
        Goal::Maintain,
        Location::Home,
        Beginner,
        &[
            sets_reps("Wall Push-ups", 2, 12, 45, Bodyweight),
            sets_reps("Chair Squats", 2, 12, 45, Bodyweight),
            sets_reps("Glute Bridges", 2, 15, 45, Bodyweight),
            sets_reps("Bird Dogs", 2, 10, 45, Bodyweight),
            sets_reps("Standing Calf Raises", 2, 15, 45, Bodyweight),
            sets_reps("Dead Bugs", 2, 10, 45, Bodyweight),
            sets_reps("Dumbbell Bicep Curls", 2, 12, 45, Dumbbells),
        ],
    ),
    (
        Goal::Maintain,
        Location::Home,
        Intermediate,
        &[
            sets_reps("Push-ups", 3, 12, 60, Bodyweight),
            sets_reps("Bodyweight Squats", 3, 20, 60, Bodyweight),
            sets_reps("Reverse Lunges", 3, 12, 60, Bodyweight),
            sets_reps("Dumbbell Rows", 3, 12, 60, Dumbbells),
            sets_reps("Dumbbell Overhead Press", 3, 10, 60, Dumbbells),
            sets_reps("Plank Shoulder Taps", 3, 20, 45, Bodyweight),
            sets_reps("Bicycle Crunches", 3, 15, 45, Bodyweight),
            sets_reps("Superman Holds", 3, 12, 45, Bodyweight),
        ],
    ),
    (
        Goal::Maintain,
        Location::Home,
        Advanced,
        &[
            sets_reps("Decline Push-ups", 3, 15, 60, Bodyweight),
            sets_reps("Jump Squats", 3, 15, 60, Bodyweight),
            sets_reps("Single-Leg Glute Bridges", 3, 12, 45, Bodyweight),
            sets_reps("Renegade Rows", 3, 10, 60, Dumbbells),
            sets_reps("Pike Push-ups", 3, 10, 60, Bodyweight),
            sets_reps("Dumbbell Hammer Curls", 3, 12, 45, Dumbbells),
            sets_reps("V-Ups", 3, 15, 45, Bodyweight),
            sets_reps("Lateral Lunges", 3, 12, 45, Bodyweight),
        ],
    ),
];
