//! Persistence of calculated records.

pub mod json_store;

pub use json_store::{RecordStore, filter_by_badge};
