use crate::query::{
    ast::create_table::{ColumnDef, CreateTable},
    renderer::{Render, Renderer},
};

impl Render for CreateTable {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("CREATE TABLE ");
        if self.if_not_exists {
            r.sql.push_str("IF NOT EXISTS ");
        }
        r.render_table_ref(&self.table);
        r.sql.push_str(" (");

        let num_cols = self.columns.len();
        for (i, col) in self.columns.iter().enumerate() {
            r.sql.push_str("\n\t");
            col.render(r);
            if i + 1 < num_cols {
                r.sql.push(',');
            }
        }

        r.sql.push_str("\n)");
    }
}

impl Render for ColumnDef {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str(&r.dialect.quote_identifier(&self.name));
        r.sql.push(' ');
        r.sql
            .push_str(&r.dialect.render_column_type(self.column_type));

        if self.is_primary_key {
            r.sql.push_str(" PRIMARY KEY");
        }
    }
}
