//! Defines common, reusable AST nodes for building SQL queries.

/// A table addressed by its bare name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableRef {
    pub name: String,
}
