use crate::errors::ModelError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, sync::Arc};

/// Validated destination table name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TableName(Arc<str>);

impl TableName {
    pub fn new(name: impl Into<String>) -> Result<Self, ModelError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() || trimmed.chars().any(|c| c.is_control()) {
            return Err(ModelError::InvalidTableName(name));
        }
        Ok(Self(Arc::from(trimmed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TableName {
    type Error = ModelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl FromStr for TableName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<TableName> for String {
    fn from(name: TableName) -> Self {
        name.0.to_string()
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_name_trims() {
        let name = TableName::new("  people ").unwrap();
        assert_eq!(name.as_str(), "people");
    }

    #[test]
    fn test_table_name_rejects_empty() {
        assert!(TableName::new("   ").is_err());
        assert!("bad\nname".parse::<TableName>().is_err());
    }
}
