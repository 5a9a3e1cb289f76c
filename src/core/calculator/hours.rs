use crate::config::DayBreaks;
use crate::core::calculator::breaks::{BreakDeduction, applicable_breaks};
use crate::core::calculator::rounding::round_time;
use crate::errors::AppResult;
use crate::models::day_type::DayType;
use crate::models::rounding_policy::RoundingPolicy;
use crate::models::time_of_day::{RoundedTime, TimeOfDay};
use crate::utils::time::minutes_to_hours;

/// Outcome of one entry/exit calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    pub day_type: DayType,
    pub policy: RoundingPolicy,
    pub rounded_entry: RoundedTime,
    pub rounded_exit: RoundedTime,
    pub gross_minutes: i64,
    pub break_minutes: i64,
    pub net_minutes: i64,
    pub deductions: Vec<BreakDeduction>,
}

impl CalculationResult {
    /// Net duration in hours, two decimals.
    pub fn net_hours(&self) -> f64 {
        minutes_to_hours(self.net_minutes)
    }

    /// Exit before entry; not an error, the caller decides how to report it.
    pub fn is_negative(&self) -> bool {
        self.net_minutes < 0
    }
}

/// Compute net working time between two "HH:MM" strings.
///
/// Both ends are rounded under `policy`, then every enabled break of
/// `day` whose start falls in `[entry, exit)` is subtracted in full.
/// Only malformed entry/exit literals fail; break problems fall back to
/// default deductions.
pub fn calculate(
    entry: &str,
    exit: &str,
    day: DayType,
    policy: RoundingPolicy,
    breaks: &DayBreaks,
) -> AppResult<CalculationResult> {
    let entry_t = TimeOfDay::parse(entry)?;
    let exit_t = TimeOfDay::parse(exit)?;

    let rounded_entry = round_time(entry_t, policy);
    let rounded_exit = round_time(exit_t, policy);

    let gross_minutes = rounded_exit.minute_offset() - rounded_entry.minute_offset();

    let deductions = applicable_breaks(day, breaks, rounded_entry, rounded_exit);
    let break_minutes: i64 = deductions.iter().map(|d| d.minutes).sum();

    let net_minutes = gross_minutes - break_minutes;

    tracing::debug!(
        %entry_t,
        %exit_t,
        rounded_entry = %rounded_entry,
        rounded_exit = %rounded_exit,
        policy = policy.as_str(),
        day_type = day.as_str(),
        gross_minutes,
        break_minutes,
        net_minutes,
        "work hours calculated"
    );

    Ok(CalculationResult {
        day_type: day,
        policy,
        rounded_entry,
        rounded_exit,
        gross_minutes,
        break_minutes,
        net_minutes,
        deductions,
    })
}
