//! Defines the core rendering trait and context for converting AST to SQL.

use crate::query::{ast::common::TableRef, dialect::Dialect};

pub mod create_table;
pub mod insert;

/// A trait for any AST node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the SQL string and counts bind parameters, and provides
/// access to the dialect for syntax-specific details.
pub struct Renderer<'a> {
    pub sql: String,
    pub placeholders: usize,
    pub dialect: &'a dyn Dialect,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            sql: String::new(),
            placeholders: 0,
            dialect,
        }
    }

    /// Consumes the renderer and returns the final SQL string and the number
    /// of placeholders it contains.
    pub fn finish(self) -> (String, usize) {
        (self.sql, self.placeholders)
    }

    pub fn add_placeholder(&mut self) {
        let placeholder = self.dialect.get_placeholder(self.placeholders);
        self.placeholders += 1;
        self.sql.push_str(&placeholder);
    }

    pub fn render_table_ref(&mut self, table: &TableRef) {
        self.sql.push_str(&self.dialect.quote_identifier(&table.name));
    }
}
