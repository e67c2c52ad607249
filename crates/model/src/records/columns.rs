use crate::errors::ModelError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered, duplicate-free list of header names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSet(Vec<String>);

impl ColumnSet {
    pub fn from_headers<I, S>(headers: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut columns = Vec::new();

        for (idx, header) in headers.into_iter().enumerate() {
            let name = header.as_ref().trim();
            if name.is_empty() {
                return Err(ModelError::BlankColumn(idx + 1));
            }
            if !seen.insert(name.to_string()) {
                return Err(ModelError::DuplicateColumn(name.to_string()));
            }
            columns.push(name.to_string());
        }

        Ok(ColumnSet(columns))
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, column: &str) -> bool {
        self.0.iter().any(|c| c == column)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a ColumnSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
