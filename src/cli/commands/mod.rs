pub mod add;
pub mod calc;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod new;

use crate::config::Config;
use crate::store::RecordStore;

/// Record store at the effective record file location.
pub(crate) fn open_store(cfg: &Config) -> RecordStore {
    RecordStore::new(cfg.records_path())
}
