use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::store::{RecordStore, filter_by_badge};
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the records of `store`, optionally only those of `badge`.
    /// Returns the number of records written.
    pub fn export(
        store: &RecordStore,
        format: ExportFormat,
        out: &Path,
        badge: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        if out == store.path() {
            return Err(AppError::Export(
                "output file must differ from the record file".into(),
            ));
        }

        let all = store.load()?;
        let records = match badge {
            Some(b) => filter_by_badge(&all, b),
            None => all,
        };

        if records.is_empty() {
            warning("No records found to export.");
            return Ok(0);
        }

        ensure_writable(out, force)?;

        match format {
            ExportFormat::Csv => export_csv(&records, out)?,
            ExportFormat::Json => export_json(&records, out)?,
        }

        tracing::info!(
            format = format.as_str(),
            count = records.len(),
            path = %out.display(),
            "records exported"
        );

        Ok(records.len())
    }
}
