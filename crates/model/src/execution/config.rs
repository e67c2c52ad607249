use crate::{
    core::{identifiers::TableName, kind::DatabaseKind},
    execution::connection::{ConnectionParams, SslMode},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What to do when the database cannot be reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectFailurePolicy {
    /// Abort the run with an error.
    #[default]
    Fail,
    /// Log, skip every database step and finish without loading anything.
    Skip,
}

/// One load run: which CSV goes into which table of which database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadConfig {
    pub engine: DatabaseKind,
    pub host: String,
    pub user: String,
    /// Optional so it can be supplied through the environment instead.
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    pub database: String,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub ssl_mode: Option<SslMode>,
    pub csv_path: PathBuf,
    pub table_name: TableName,
    #[serde(default)]
    pub on_connect_failure: ConnectFailurePolicy,
}

impl LoadConfig {
    pub fn connection_params(&self) -> ConnectionParams {
        ConnectionParams {
            host: self.host.clone(),
            user: self.user.clone(),
            password: self.password.clone().unwrap_or_default(),
            database: self.database.clone(),
            port: self.port,
            ssl_mode: self.ssl_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_config() {
        let json = r#"{
            "engine": "postgres",
            "host": "localhost",
            "user": "postgres",
            "password": "root",
            "database": "kaggle",
            "csv_path": "data/cricket/bowler_player_stats.csv",
            "table_name": "bowler"
        }"#;

        let config: LoadConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.engine, DatabaseKind::Postgres);
        assert_eq!(config.port, None);
        assert_eq!(config.table_name.as_str(), "bowler");
        assert_eq!(config.on_connect_failure, ConnectFailurePolicy::Fail);

        let params = config.connection_params();
        assert_eq!(params.password, "root");
        assert_eq!(params.effective_port(config.engine), 5432);
    }

    #[test]
    fn test_deserialize_full_config() {
        let json = r#"{
            "engine": "mariadb",
            "host": "db.internal",
            "user": "akki",
            "database": "conv_crm",
            "port": 3307,
            "ssl_mode": "disable",
            "csv_path": "data/people_wiki.csv",
            "table_name": "wikipedia",
            "on_connect_failure": "skip"
        }"#;

        let config: LoadConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.engine, DatabaseKind::MySql);
        assert_eq!(config.password, None);
        assert_eq!(config.ssl_mode, Some(SslMode::Disable));
        assert_eq!(config.on_connect_failure, ConnectFailurePolicy::Skip);
        assert_eq!(config.connection_params().password, "");
    }

    #[test]
    fn test_reject_unknown_engine() {
        let json = r#"{
            "engine": "oracle",
            "host": "h", "user": "u", "database": "d",
            "csv_path": "a.csv", "table_name": "t"
        }"#;
        assert!(serde_json::from_str::<LoadConfig>(json).is_err());
    }
}
