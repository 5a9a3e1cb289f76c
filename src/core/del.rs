use crate::errors::{AppError, AppResult};
use crate::models::time_of_day::TimeOfDay;
use crate::store::RecordStore;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete the records matching badge, date, entry and exit exactly.
    pub fn apply(
        store: &RecordStore,
        badge: &str,
        date: NaiveDate,
        entry: TimeOfDay,
        exit: TimeOfDay,
    ) -> AppResult<usize> {
        let badge = badge.trim();
        let removed = store.delete(badge, date, entry, exit)?;

        if removed == 0 {
            return Err(AppError::RecordNotFound {
                badge: badge.to_string(),
                date: date.format("%Y-%m-%d").to_string(),
                entry: entry.to_string(),
                exit: exit.to_string(),
            });
        }

        tracing::info!(badge, %date, %entry, %exit, removed, "records deleted");
        Ok(removed)
    }
}
