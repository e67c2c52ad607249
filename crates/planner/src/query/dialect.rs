//! Defines the `Dialect` trait for database-specific SQL syntax.

use crate::query::ast::create_table::ColumnType;
use model::core::kind::DatabaseKind;

pub trait Dialect: Send + Sync {
    /// Wraps an identifier (like a table or column name) in the correct
    /// quotation marks for the dialect. Embedded quote characters are doubled.
    ///
    /// - PostgreSQL uses double quotes: `"my_column"`
    /// - MySQL uses backticks: `` `my_column` ``
    fn quote_identifier(&self, ident: &str) -> String;

    /// Returns the placeholder for a parameterized query.
    ///
    /// - PostgreSQL uses `$1`, `$2`, etc.
    /// - MySQL uses `?`
    fn get_placeholder(&self, index: usize) -> String;

    /// Whether two quoted identifiers differing only in ASCII case name
    /// different columns.
    fn case_sensitive_identifiers(&self) -> bool;

    /// Column type of the auto-generated surrogate key.
    fn auto_increment_clause(&self) -> &'static str;

    fn render_column_type(&self, column_type: ColumnType) -> String {
        match column_type {
            ColumnType::Serial => self.auto_increment_clause().to_string(),
            ColumnType::Text => "TEXT".to_string(),
        }
    }

    /// Returns the name of the dialect (e.g., "PostgreSQL", "MySQL").
    fn name(&self) -> String;
}

/// Picks the dialect matching a destination engine.
pub fn for_kind(kind: DatabaseKind) -> &'static dyn Dialect {
    match kind {
        DatabaseKind::MySql => &MySql,
        DatabaseKind::Postgres => &Postgres,
    }
}

#[derive(Debug, Clone)]
pub struct Postgres;

impl Dialect for Postgres {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{}""#, ident.replace('"', r#""""#))
    }

    fn get_placeholder(&self, index: usize) -> String {
        // PostgreSQL uses $1, $2, etc.
        format!("${}", index + 1)
    }

    fn case_sensitive_identifiers(&self) -> bool {
        true
    }

    fn auto_increment_clause(&self) -> &'static str {
        "SERIAL"
    }

    fn name(&self) -> String {
        "PostgreSQL".into()
    }
}

#[derive(Debug, Clone)]
pub struct MySql;

impl Dialect for MySql {
    fn quote_identifier(&self, ident: &str) -> String {
        format!("`{}`", ident.replace('`', "``"))
    }

    fn get_placeholder(&self, _index: usize) -> String {
        // MySQL uses ?
        "?".into()
    }

    fn case_sensitive_identifiers(&self) -> bool {
        // column names never differ by case alone
        false
    }

    fn auto_increment_clause(&self) -> &'static str {
        "INT AUTO_INCREMENT"
    }

    fn name(&self) -> String {
        "MySQL".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_identifier_escapes_quote_char() {
        assert_eq!(Postgres.quote_identifier("first name"), r#""first name""#);
        assert_eq!(Postgres.quote_identifier(r#"a"b"#), r#""a""b""#);
        assert_eq!(MySql.quote_identifier("age"), "`age`");
        assert_eq!(MySql.quote_identifier("a`b"), "`a``b`");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(Postgres.get_placeholder(0), "$1");
        assert_eq!(Postgres.get_placeholder(4), "$5");
        assert_eq!(MySql.get_placeholder(4), "?");
    }

    #[test]
    fn test_column_types() {
        assert_eq!(Postgres.render_column_type(ColumnType::Serial), "SERIAL");
        assert_eq!(
            MySql.render_column_type(ColumnType::Serial),
            "INT AUTO_INCREMENT"
        );
        assert_eq!(MySql.render_column_type(ColumnType::Text), "TEXT");
    }

    #[test]
    fn test_identifier_case_rules() {
        assert!(Postgres.case_sensitive_identifiers());
        assert!(!MySql.case_sensitive_identifiers());
    }

    #[test]
    fn test_for_kind() {
        assert_eq!(for_kind(DatabaseKind::MySql).name(), "MySQL");
        assert_eq!(for_kind(DatabaseKind::Postgres).name(), "PostgreSQL");
    }
}
