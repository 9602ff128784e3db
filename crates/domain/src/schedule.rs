use std::collections::BTreeSet;

use crate::DaysPerWeek;

pub const DAYS_IN_WEEK: usize = 7;

const MIDWEEK: usize = 3;

/// Returns the indices (0 = today) of the workout days in a 7-day week.
///
/// Workout days are spread evenly by rounding `i * 6 / (n - 1)`. Rounding collisions are not
/// corrected, so the result may contain fewer days than requested.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn distribute_workout_days(days_per_week: DaysPerWeek) -> BTreeSet<usize> {
    let workout_days = usize::from(days_per_week.get()).min(DAYS_IN_WEEK);

    match workout_days {
        DAYS_IN_WEEK => (0..DAYS_IN_WEEK).collect(),
        0 | 1 => BTreeSet::from([MIDWEEK]),
        _ => {
            let step = (DAYS_IN_WEEK - 1) as f64 / (workout_days - 1) as f64;
            (0..workout_days)
                .map(|i| (i as f64 * step).round() as usize)
                .collect()
        }
    }
}
