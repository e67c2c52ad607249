use crate::{core::identifiers::TableName, records::columns::ColumnSet};
use serde::{Deserialize, Serialize};

/// Name of the surrogate primary key prepended to every created table.
pub const SURROGATE_KEY: &str = "id";

/// Target table plus the CSV columns it holds. The surrogate key is implied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDescriptor {
    pub name: TableName,
    pub columns: ColumnSet,
}

impl TableDescriptor {
    pub fn new(name: TableName, columns: ColumnSet) -> Self {
        TableDescriptor { name, columns }
    }

    /// First CSV column whose name collides with the surrogate key, if any.
    /// `case_sensitive` follows the destination engine's identifier rules.
    pub fn surrogate_conflict(&self, case_sensitive: bool) -> Option<&str> {
        self.columns.iter().find(|c| {
            if case_sensitive {
                *c == SURROGATE_KEY
            } else {
                c.eq_ignore_ascii_case(SURROGATE_KEY)
            }
        })
    }
}
