use serde::{Deserialize, Serialize};

/// A single cell: header name and its raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValue {
    pub name: String,
    pub value: String,
}

impl FieldValue {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        FieldValue {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One CSV record keyed by header name, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub field_values: Vec<FieldValue>,
}

impl Row {
    pub fn new(field_values: Vec<FieldValue>) -> Self {
        Row { field_values }
    }

    /// Builds a row from `(column, value)` pairs, keeping their order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let field_values = pairs
            .into_iter()
            .map(|(name, value)| FieldValue::new(name, value))
            .collect();
        Row { field_values }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.field_values
            .iter()
            .find(|f| f.name == column)
            .map(|f| f.value.as_str())
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.field_values.iter().map(|f| f.name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.field_values.iter().map(|f| f.value.as_str())
    }

    /// Returns true when the row's keys are exactly `columns`, in the same order.
    pub fn has_columns(&self, columns: &[String]) -> bool {
        self.field_values.len() == columns.len()
            && self
                .field_values
                .iter()
                .zip(columns)
                .all(|(field, column)| field.name == *column)
    }

    pub fn into_values(self) -> Vec<String> {
        self.field_values.into_iter().map(|f| f.value).collect()
    }

    pub fn len(&self) -> usize {
        self.field_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.field_values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_keeps_header_order() {
        let row = Row::from_pairs([("name", "Alice"), ("age", "30")]);

        assert_eq!(row.columns().collect::<Vec<_>>(), vec!["name", "age"]);
        assert_eq!(row.values().collect::<Vec<_>>(), vec!["Alice", "30"]);
        assert_eq!(row.get("age"), Some("30"));
        assert_eq!(row.get("missing"), None);
    }

    #[test]
    fn test_has_columns_is_order_sensitive() {
        let row = Row::from_pairs([("name", "Alice"), ("age", "30")]);
        let expected = vec!["name".to_string(), "age".to_string()];
        let swapped = vec!["age".to_string(), "name".to_string()];

        assert!(row.has_columns(&expected));
        assert!(!row.has_columns(&swapped));
        assert!(!row.has_columns(&expected[..1]));
    }
}
