use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::record::Record;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(records: &[Record], path: &Path) -> AppResult<()> {
    tracing::debug!(path = %path.display(), count = records.len(), "exporting JSON");

    let json_data = serde_json::to_string_pretty(records)?;
    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", records.len(), path);
    Ok(())
}

/// Export CSV, header row derived from the record fields.
pub(crate) fn export_csv(records: &[Record], path: &Path) -> AppResult<()> {
    tracing::debug!(path = %path.display(), count = records.len(), "exporting CSV");

    let mut wtr = csv::Writer::from_path(path)?;
    for item in records {
        wtr.serialize(item)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", records.len(), path);
    Ok(())
}
