use crate::core::kind::DatabaseKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// TLS negotiation policy for Postgres connections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SslMode {
    Disable,
    #[default]
    Prefer,
    Require,
}

/// Everything needed to open one database connection.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionParams {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub ssl_mode: Option<SslMode>,
}

impl ConnectionParams {
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        ConnectionParams {
            host: host.into(),
            user: user.into(),
            password: password.into(),
            database: database.into(),
            port: None,
            ssl_mode: None,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn effective_port(&self, kind: DatabaseKind) -> u16 {
        self.port.unwrap_or_else(|| kind.default_port())
    }

    /// `user@host:port/database`, safe to log.
    pub fn redacted(&self, kind: DatabaseKind) -> String {
        format!(
            "{}@{}:{}/{}",
            self.user,
            self.host,
            self.effective_port(kind),
            self.database
        )
    }
}

impl fmt::Debug for ConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionParams")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"******")
            .field("database", &self.database)
            .field("port", &self.port)
            .field("ssl_mode", &self.ssl_mode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_port_falls_back_to_engine_default() {
        let params = ConnectionParams::new("localhost", "postgres", "root", "kaggle");
        assert_eq!(params.effective_port(DatabaseKind::Postgres), 5432);
        assert_eq!(params.effective_port(DatabaseKind::MySql), 3306);

        let params = params.with_port(6543);
        assert_eq!(params.effective_port(DatabaseKind::Postgres), 6543);
    }

    #[test]
    fn test_debug_hides_password() {
        let params = ConnectionParams::new("localhost", "akki", "s3cret", "crm");
        let printed = format!("{params:?}");
        assert!(!printed.contains("s3cret"));
        assert_eq!(params.redacted(DatabaseKind::MySql), "akki@localhost:3306/crm");
    }
}
