use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Wall-clock time with minute precision (no date, no timezone).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    /// Build from components, rejecting out-of-range values.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    /// Constructor for known-good literals, checked at compile time when
    /// used in a const item.
    pub const fn at(hour: u32, minute: u32) -> Self {
        assert!(hour < 24 && minute < 60, "time of day out of range");
        Self { hour, minute }
    }

    /// Parse a strict "HH:MM" literal.
    pub fn parse(s: &str) -> AppResult<Self> {
        let raw = s.trim();
        let Some((h, m)) = raw.split_once(':') else {
            return Err(AppError::InvalidTimeFormat(s.to_string()));
        };

        // chrono accepts single-digit fields; keep the literal two-digit
        if h.len() != 2 || m.len() != 2 {
            return Err(AppError::InvalidTimeFormat(s.to_string()));
        }

        let t = NaiveTime::parse_from_str(raw, "%H:%M")
            .map_err(|_| AppError::InvalidTimeFormat(s.to_string()))?;

        Ok(Self {
            hour: t.hour(),
            minute: t.minute(),
        })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn minutes_since_midnight(&self) -> i64 {
        i64::from(self.hour) * 60 + i64::from(self.minute)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A rounded clock time. Rounding 23:53 up lands on 00:00 of the next
/// day; `next_day` keeps that carry so durations stay correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RoundedTime {
    pub time: TimeOfDay,
    pub next_day: bool,
}

impl RoundedTime {
    pub fn same_day(time: TimeOfDay) -> Self {
        Self {
            time,
            next_day: false,
        }
    }

    /// Position on a minute axis starting at midnight of the working day.
    pub fn minute_offset(&self) -> i64 {
        let carry = if self.next_day { MINUTES_PER_DAY } else { 0 };
        self.time.minutes_since_midnight() + carry
    }
}

impl fmt::Display for RoundedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.time, f)
    }
}
