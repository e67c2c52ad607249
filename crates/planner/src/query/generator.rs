//! Turns table descriptors into the DDL and DML text a load executes.

use crate::query::{
    builder::{create_table::CreateTableBuilder, insert::InsertBuilder},
    dialect::Dialect,
    renderer::{Render, Renderer},
};
use crate::table_ref;
use model::records::table::{SURROGATE_KEY, TableDescriptor};

pub struct QueryGenerator<'a> {
    dialect: &'a dyn Dialect,
}

impl<'a> QueryGenerator<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self { dialect }
    }

    /// `CREATE TABLE IF NOT EXISTS` with the surrogate key first and every
    /// CSV column typed as text.
    pub fn create_table(&self, table: &TableDescriptor) -> String {
        let builder = CreateTableBuilder::new(table_ref!(table.name))
            .if_not_exists()
            .surrogate_key(SURROGATE_KEY);

        let ast = table
            .columns
            .iter()
            .fold(builder, |builder, column| builder.text_column(column))
            .build();

        self.render_ast(ast).0
    }

    /// Parameterized single-row insert, executed once per row by the caller.
    pub fn insert(&self, table: &str, columns: &[String]) -> (String, usize) {
        let ast = InsertBuilder::new(table_ref!(table))
            .columns(columns)
            .build();

        self.render_ast(ast)
    }

    fn render_ast(&self, ast: impl Render) -> (String, usize) {
        let mut renderer = Renderer::new(self.dialect);
        ast.render(&mut renderer);
        renderer.finish()
    }
}
