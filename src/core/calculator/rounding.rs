//! Snap raw clock times to canonical boundaries.

use crate::models::rounding_policy::RoundingPolicy;
use crate::models::time_of_day::{RoundedTime, TimeOfDay};

/// Map a raw minute (0-59) to its snapped minute. The flag is set when the
/// result reaches the next hour.
pub fn round_minute(minute: u32, policy: RoundingPolicy) -> (u32, bool) {
    let m = minute.min(59);

    let snapped = match policy {
        RoundingPolicy::Standard => match m {
            0..=7 => 0,
            8..=22 => 15,
            23..=37 => 30,
            38..=52 => 45,
            _ => 60,
        },
        RoundingPolicy::Nearest5 => to_nearest(m, 5),
        RoundingPolicy::Nearest10 => to_nearest(m, 10),
        RoundingPolicy::Nearest30 => match m {
            0..=14 => 0,
            15..=44 => 30,
            _ => 60,
        },
        RoundingPolicy::Ceiling => m.div_ceil(15) * 15,
        RoundingPolicy::Floor => m / 15 * 15,
    };

    if snapped == 60 { (0, true) } else { (snapped, false) }
}

/// Remainders below half the step round down, the rest round up.
fn to_nearest(m: u32, step: u32) -> u32 {
    let rem = m % step;
    // rem < step / 2, compared on doubled values to keep 2.5 exact
    if rem * 2 < step { m - rem } else { m - rem + step }
}

/// Round a clock time under `policy`. Seconds never exist on TimeOfDay so
/// the result is always on a whole minute. A carry past 23:59 wraps to
/// 00:00 and marks the result as belonging to the next day.
pub fn round_time(time: TimeOfDay, policy: RoundingPolicy) -> RoundedTime {
    let (minute, carry) = round_minute(time.minute(), policy);
    let mut hour = time.hour();
    let mut next_day = false;

    if carry {
        hour += 1;
        if hour == 24 {
            hour = 0;
            next_day = true;
        }
    }

    match TimeOfDay::new(hour, minute) {
        Some(t) => RoundedTime { time: t, next_day },
        // unreachable by construction: hour < 24 and minute < 60
        None => RoundedTime::same_day(time),
    }
}
