use crate::core::calculator::hours::CalculationResult;
use crate::errors::{AppError, AppResult};
use crate::models::record::Record;
use crate::store::RecordStore;
use chrono::NaiveDate;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Persist a finished calculation under `badge` and `date`.
    pub fn apply(
        store: &RecordStore,
        badge: &str,
        date: NaiveDate,
        result: &CalculationResult,
    ) -> AppResult<Record> {
        let badge = badge.trim();
        if badge.is_empty() {
            return Err(AppError::InvalidBadge(badge.to_string()));
        }

        let record = Record::from_result(badge, date, result);
        store.append(record.clone())?;

        tracing::info!(
            badge,
            date = %record.date,
            entry = %record.entry,
            exit = %record.exit,
            net_hours = record.net_hours,
            path = %store.path().display(),
            "record saved"
        );

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::logic::Core;
    use crate::models::day_type::DayType;

    #[test]
    fn saves_rounded_times_and_net_hours() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("work.json"));
        let result = Core::calculate("08:05", "17:10", DayType::Weekday, &Config::default(), None)
            .unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();

        let saved = AddLogic::apply(&store, " 1042 ", date, &result).unwrap();
        assert_eq!(saved.badge, "1042");
        assert_eq!(saved.entry.to_string(), "08:00");
        assert_eq!(saved.exit.to_string(), "17:15");
        assert_eq!(saved.net_hours, 8.5);
        assert_eq!(store.load().unwrap(), vec![saved]);
    }

    #[test]
    fn blank_badge_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("work.json"));
        let result = Core::calculate("08:00", "17:00", DayType::Weekday, &Config::default(), None)
            .unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();

        assert!(matches!(
            AddLogic::apply(&store, "   ", date, &result),
            Err(AppError::InvalidBadge(_))
        ));
        assert!(!store.path().exists());
    }
}
