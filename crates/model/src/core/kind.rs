use crate::errors::ModelError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Supported destination engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DatabaseKind {
    MySql,
    Postgres,
}

impl DatabaseKind {
    pub fn default_port(&self) -> u16 {
        match self {
            DatabaseKind::MySql => 3306,
            DatabaseKind::Postgres => 5432,
        }
    }

    /// Human readable engine name used in log lines.
    pub fn display_name(&self) -> &'static str {
        match self {
            DatabaseKind::MySql => "MySQL",
            DatabaseKind::Postgres => "PostgreSQL",
        }
    }
}

impl FromStr for DatabaseKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(DatabaseKind::MySql),
            "pg" | "postgres" | "postgresql" => Ok(DatabaseKind::Postgres),
            other => Err(ModelError::UnknownDatabaseKind(other.to_string())),
        }
    }
}

impl TryFrom<String> for DatabaseKind {
    type Error = ModelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DatabaseKind> for String {
    fn from(kind: DatabaseKind) -> Self {
        kind.to_string()
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseKind::MySql => write!(f, "mysql"),
            DatabaseKind::Postgres => write!(f, "postgres"),
        }
    }
}
