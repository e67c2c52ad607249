//! Defines the AST for an INSERT statement.

use crate::query::ast::common::TableRef;

/// Single-row INSERT with one bind parameter per column.
///
/// A batched load prepares this once and the driver executes it per row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Insert {
    pub table: TableRef,
    pub columns: Vec<String>,
}
