use crate::config::BreakSetting;
use crate::errors::{AppError, AppResult};
use crate::models::time_of_day::TimeOfDay;

/// A parsed meal break for one day type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub enabled: bool,
}

impl BreakWindow {
    pub fn duration_minutes(&self) -> i64 {
        self.end.minutes_since_midnight() - self.start.minutes_since_midnight()
    }

    /// Parse the raw configured strings. An end before the start is
    /// rejected like a malformed literal.
    pub fn from_setting(setting: &BreakSetting) -> AppResult<Self> {
        let start = TimeOfDay::parse(&setting.start_time)
            .map_err(|_| AppError::BreakConfig(format!("start_time '{}'", setting.start_time)))?;
        let end = TimeOfDay::parse(&setting.end_time)
            .map_err(|_| AppError::BreakConfig(format!("end_time '{}'", setting.end_time)))?;

        if end < start {
            return Err(AppError::BreakConfig(format!(
                "end_time {} is before start_time {}",
                end, start
            )));
        }

        Ok(Self {
            start,
            end,
            enabled: setting.enabled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setting(start: &str, end: &str) -> BreakSetting {
        BreakSetting::new(start, end, true)
    }

    #[test]
    fn parses_configured_window() {
        let w = BreakWindow::from_setting(&setting("13:00", "13:45")).unwrap();
        assert_eq!(w.start.to_string(), "13:00");
        assert_eq!(w.duration_minutes(), 45);
        assert!(w.enabled);
    }

    #[test]
    fn reports_which_field_is_malformed() {
        let err = BreakWindow::from_setting(&setting("13:00", "1345")).unwrap_err();
        assert!(err.to_string().contains("end_time"));

        let err = BreakWindow::from_setting(&setting("noon", "13:45")).unwrap_err();
        assert!(err.to_string().contains("start_time"));
    }

    #[test]
    fn rejects_reversed_window() {
        assert!(matches!(
            BreakWindow::from_setting(&setting("13:45", "13:00")),
            Err(AppError::BreakConfig(_))
        ));
    }
}
