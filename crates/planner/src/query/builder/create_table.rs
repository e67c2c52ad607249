//! Provides a fluent builder for constructing `CreateTable` ASTs.

use crate::query::ast::{
    common::TableRef,
    create_table::{ColumnDef, ColumnType, CreateTable},
};

#[derive(Debug, Clone)]
pub struct CreateTableBuilder {
    ast: CreateTable,
}

impl CreateTableBuilder {
    pub fn new(table: TableRef) -> Self {
        Self {
            ast: CreateTable {
                table,
                ..Default::default()
            },
        }
    }

    pub fn if_not_exists(mut self) -> Self {
        self.ast.if_not_exists = true;
        self
    }

    /// Adds the auto-generated integer primary key.
    pub fn surrogate_key(mut self, name: &str) -> Self {
        self.ast.columns.push(ColumnDef {
            name: name.to_string(),
            column_type: ColumnType::Serial,
            is_primary_key: true,
        });
        self
    }

    pub fn text_column(mut self, name: &str) -> Self {
        self.ast.columns.push(ColumnDef {
            name: name.to_string(),
            column_type: ColumnType::Text,
            is_primary_key: false,
        });
        self
    }

    pub fn build(self) -> CreateTable {
        self.ast
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table_ref;

    #[test]
    fn test_build_keeps_column_order() {
        let ast = CreateTableBuilder::new(table_ref!("people"))
            .if_not_exists()
            .surrogate_key("id")
            .text_column("name")
            .text_column("age")
            .build();

        assert!(ast.if_not_exists);
        let names: Vec<_> = ast.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["id", "name", "age"]);
        assert_eq!(ast.columns[0].column_type, ColumnType::Serial);
        assert!(ast.columns[0].is_primary_key);
        assert!(ast.columns[1..].iter().all(|c| c.column_type == ColumnType::Text));
    }
}
