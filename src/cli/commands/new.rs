use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::export::ensure_writable;
use crate::store::RecordStore;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;

/// Create an empty record file at the given path.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::New { path, force } = cmd {
        let target = expand_tilde(path);
        ensure_writable(&target, *force)?;

        let store = RecordStore::create_new(&target)?;
        success(format!("New record file created: {}", store.path().display()));
        info(format!(
            "Use it with --file {} or `workhours config --set records_file={}`",
            store.path().display(),
            store.path().display()
        ));
    }
    Ok(())
}
