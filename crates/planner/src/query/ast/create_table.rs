//! Defines the AST for a CREATE TABLE statement.

use crate::query::ast::common::TableRef;

/// Represents a complete CREATE TABLE statement.
#[derive(Debug, Clone, Default)]
pub struct CreateTable {
    pub table: TableRef,
    pub columns: Vec<ColumnDef>,
    pub if_not_exists: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub column_type: ColumnType,
    pub is_primary_key: bool,
}

/// The only column types a loaded table ever carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Auto-generated integer surrogate key.
    Serial,
    /// Free-form text.
    Text,
}
