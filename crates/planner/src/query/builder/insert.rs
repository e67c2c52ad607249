//! Provides a fluent builder for constructing `Insert` ASTs.

use crate::query::ast::{common::TableRef, insert::Insert};

#[derive(Debug, Clone)]
pub struct InsertBuilder {
    ast: Insert,
}

impl InsertBuilder {
    pub fn new(table: TableRef) -> Self {
        Self {
            ast: Insert {
                table,
                ..Default::default()
            },
        }
    }

    pub fn columns(mut self, columns: &[String]) -> Self {
        self.ast.columns = columns.to_vec();
        self
    }

    pub fn build(self) -> Insert {
        self.ast
    }
}
