use model::core::kind::DatabaseKind;
use serde::Serialize;
use std::path::PathBuf;

/// Outcome of one load run, printed as JSON by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub engine: DatabaseKind,
    pub csv_path: PathBuf,
    pub table: String,
    pub columns: Vec<String>,
    pub rows_read: usize,
    pub rows_inserted: u64,
    pub connected: bool,
    pub table_created: bool,
}
