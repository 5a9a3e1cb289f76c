//! Meal break resolution and overlap rules.

use crate::config::{BreakSetting, DayBreaks};
use crate::models::break_window::BreakWindow;
use crate::models::day_type::{BreakKind, DayType};
use crate::models::time_of_day::{RoundedTime, TimeOfDay};
use serde::Serialize;

/// Deduction used when a configured break cannot be parsed.
pub fn default_deduction(kind: BreakKind, day: DayType) -> i64 {
    match (kind, day) {
        (BreakKind::Lunch, DayType::Weekday) => 45,
        _ => 30,
    }
}

const LUNCH_START: TimeOfDay = TimeOfDay::at(13, 0);
const DINNER_START: TimeOfDay = TimeOfDay::at(19, 0);

/// Start used for the overlap test when the configured start is unusable.
pub fn default_start(kind: BreakKind) -> TimeOfDay {
    match kind {
        BreakKind::Lunch => LUNCH_START,
        BreakKind::Dinner => DINNER_START,
    }
}

/// A break ready to be tested against the worked interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedBreak {
    pub kind: BreakKind,
    pub start: TimeOfDay,
    pub minutes: i64,
    pub fallback: bool,
}

/// A break that was subtracted from the gross duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreakDeduction {
    pub kind: BreakKind,
    pub minutes: i64,
    pub fallback: bool,
}

/// Turn a raw setting into a testable break; `None` when disabled.
/// Malformed times never fail: the default deduction replaces them.
pub fn resolve_break(kind: BreakKind, day: DayType, setting: &BreakSetting) -> Option<ResolvedBreak> {
    if !setting.enabled {
        return None;
    }

    match BreakWindow::from_setting(setting) {
        Ok(window) => Some(ResolvedBreak {
            kind,
            start: window.start,
            minutes: window.duration_minutes(),
            fallback: false,
        }),
        Err(e) => {
            let start = TimeOfDay::parse(&setting.start_time).unwrap_or_else(|_| default_start(kind));
            let minutes = default_deduction(kind, day);
            tracing::warn!(
                break_kind = kind.as_str(),
                day_type = day.as_str(),
                error = %e,
                default_minutes = minutes,
                "break configuration unusable, applying default deduction"
            );
            Some(ResolvedBreak {
                kind,
                start,
                minutes,
                fallback: true,
            })
        }
    }
}

/// A break counts only when its start lies in `[entry, exit)`. The end
/// is never looked at, so a break is deducted whole or not at all.
pub fn overlaps(start: TimeOfDay, entry: RoundedTime, exit: RoundedTime) -> bool {
    let s = start.minutes_since_midnight();
    entry.minute_offset() <= s && s < exit.minute_offset()
}

/// Breaks of `day` deducted from the `[entry, exit)` interval, lunch first.
pub fn applicable_breaks(
    day: DayType,
    breaks: &DayBreaks,
    entry: RoundedTime,
    exit: RoundedTime,
) -> Vec<BreakDeduction> {
    BreakKind::ORDER
        .into_iter()
        .filter_map(|kind| resolve_break(kind, day, breaks.get(kind)))
        .filter(|b| overlaps(b.start, entry, exit))
        .map(|b| BreakDeduction {
            kind: b.kind,
            minutes: b.minutes,
            fallback: b.fallback,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> RoundedTime {
        RoundedTime::same_day(TimeOfDay::new(h, m).unwrap())
    }

    #[test]
    fn documented_defaults_equal_fallbacks() {
        for day in [DayType::Weekday, DayType::Weekend] {
            let breaks = match day {
                DayType::Weekday => DayBreaks::weekday_defaults(),
                DayType::Weekend => DayBreaks::weekend_defaults(),
            };
            for kind in BreakKind::ORDER {
                let r = resolve_break(kind, day, breaks.get(kind)).unwrap();
                assert_eq!(r.minutes, default_deduction(kind, day));
                assert_eq!(r.start, default_start(kind));
                assert!(!r.fallback);
            }
        }
    }

    #[test]
    fn overlap_is_half_open_on_start() {
        let lunch = TimeOfDay::new(13, 0).unwrap();
        assert!(overlaps(lunch, at(13, 0), at(17, 0)));
        assert!(overlaps(lunch, at(8, 0), at(13, 15)));
        assert!(!overlaps(lunch, at(8, 0), at(13, 0)));
        assert!(!overlaps(lunch, at(13, 15), at(17, 0)));
        // exit before entry never contains anything
        assert!(!overlaps(lunch, at(17, 0), at(8, 0)));
    }

    #[test]
    fn break_ending_inside_shift_is_ignored_when_start_is_before_entry() {
        let breaks = DayBreaks {
            lunch: BreakSetting::new("12:30", "13:30", true),
            dinner: BreakSetting::new("19:00", "19:30", true),
        };
        let applied = applicable_breaks(DayType::Weekday, &breaks, at(13, 0), at(18, 0));
        assert!(applied.is_empty());
    }

    #[test]
    fn disabled_breaks_are_skipped_even_when_malformed() {
        let s = BreakSetting::new("garbage", "", false);
        assert_eq!(resolve_break(BreakKind::Lunch, DayType::Weekday, &s), None);
    }

    #[test]
    fn malformed_end_keeps_configured_start() {
        let s = BreakSetting::new("12:00", "twelve-thirty", true);
        let r = resolve_break(BreakKind::Lunch, DayType::Weekend, &s).unwrap();
        assert_eq!(r.start.to_string(), "12:00");
        assert_eq!(r.minutes, 30);
        assert!(r.fallback);
    }

    #[test]
    fn malformed_start_uses_default_start() {
        let s = BreakSetting::new("7pm", "19:30", true);
        let r = resolve_break(BreakKind::Dinner, DayType::Weekday, &s).unwrap();
        assert_eq!(r.start.to_string(), "19:00");
        assert_eq!(r.minutes, 30);
        assert!(r.fallback);
    }
}
