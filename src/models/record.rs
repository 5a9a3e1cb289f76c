use super::time_of_day::TimeOfDay;
use crate::core::calculator::hours::CalculationResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One saved calculation, as stored in the JSON record file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub badge: String,      // ⇔ worker badge number
    pub date: NaiveDate,    // ⇔ "YYYY-MM-DD"
    pub entry: TimeOfDay,   // ⇔ rounded entry "HH:MM"
    pub exit: TimeOfDay,    // ⇔ rounded exit "HH:MM"
    pub net_hours: f64,     // ⇔ 2-decimal net hours
}

impl Record {
    /// Build a record from a finished calculation.
    pub fn from_result(badge: &str, date: NaiveDate, result: &CalculationResult) -> Self {
        Self {
            badge: badge.trim().to_string(),
            date,
            entry: result.rounded_entry.time,
            exit: result.rounded_exit.time,
            net_hours: result.net_hours(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Exact-match key used by deletion.
    pub fn matches(&self, badge: &str, date: NaiveDate, entry: TimeOfDay, exit: TimeOfDay) -> bool {
        self.badge == badge && self.date == date && self.entry == entry && self.exit == exit
    }
}
