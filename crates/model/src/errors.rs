use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// The same header name appears more than once.
    #[error("Duplicate column name in header: {0}")]
    DuplicateColumn(String),

    /// A header cell is empty or whitespace only.
    #[error("Blank column name at position {0}")]
    BlankColumn(usize),

    #[error("Unknown database kind: {0}")]
    UnknownDatabaseKind(String),

    #[error("Invalid table name: {0}")]
    InvalidTableName(String),
}
