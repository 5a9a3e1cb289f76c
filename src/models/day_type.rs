use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

/// Selects which break configuration applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    Weekday,
    Weekend,
}

impl DayType {
    pub fn from_flag(weekend: bool) -> Self {
        if weekend {
            DayType::Weekend
        } else {
            DayType::Weekday
        }
    }

    /// Saturday and Sunday are weekend days.
    pub fn from_date(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => DayType::Weekend,
            _ => DayType::Weekday,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayType::Weekday => "weekday",
            DayType::Weekend => "weekend",
        }
    }
}

/// Named break slot within a day type, evaluated lunch first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakKind {
    Lunch,
    Dinner,
}

impl BreakKind {
    pub const ORDER: [BreakKind; 2] = [BreakKind::Lunch, BreakKind::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            BreakKind::Lunch => "lunch",
            BreakKind::Dinner => "dinner",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekend_detection_from_date() {
        let sat = NaiveDate::from_ymd_opt(2025, 3, 8).unwrap();
        let sun = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        let mon = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert_eq!(DayType::from_date(sat), DayType::Weekend);
        assert_eq!(DayType::from_date(sun), DayType::Weekend);
        assert_eq!(DayType::from_date(mon), DayType::Weekday);
    }
}
