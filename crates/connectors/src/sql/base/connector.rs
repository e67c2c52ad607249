use crate::sql::base::{adapter::SqlAdapter, error::ConnectorError};
use model::{core::kind::DatabaseKind, execution::connection::ConnectionParams};
use planner::query::dialect::{self, Dialect};
use tracing::{debug, error, info, warn};

/// Holds connection parameters and at most one live connection.
///
/// The handle stays unset until [`DbConnector::connect`] succeeds and is
/// released exactly once by [`DbConnector::close`].
pub struct DbConnector<A: SqlAdapter> {
    kind: DatabaseKind,
    params: ConnectionParams,
    connection: Option<A>,
}

impl<A: SqlAdapter> DbConnector<A> {
    pub fn new(kind: DatabaseKind, params: ConnectionParams) -> Self {
        DbConnector {
            kind,
            params,
            connection: None,
        }
    }

    /// Opens the connection. On failure the error is logged, the handle is
    /// left unset and the error is handed back for the caller to act on.
    pub async fn connect(&mut self) -> Result<(), ConnectorError> {
        if self.connection.is_some() {
            debug!("Reconnecting to {}", self.kind.display_name());
            self.close().await;
        }

        match A::connect(&self.params).await {
            Ok(connection) => {
                info!(
                    "Connected to {} database successfully ({})",
                    self.kind.display_name(),
                    self.params.redacted(self.kind)
                );
                self.connection = Some(connection);
                Ok(())
            }
            Err(err) => {
                error!("Error connecting to {}: {}", self.kind.display_name(), err);
                self.connection = None;
                Err(err)
            }
        }
    }

    pub fn get_connection(&self) -> Option<&A> {
        self.connection.as_ref()
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    pub fn kind(&self) -> DatabaseKind {
        self.kind
    }

    pub fn dialect(&self) -> &'static dyn Dialect {
        dialect::for_kind(self.kind)
    }

    /// Releases the handle if present; a no-op otherwise.
    pub async fn close(&mut self) {
        let Some(connection) = self.connection.take() else {
            return;
        };

        match connection.close().await {
            Ok(()) => info!("{} connection closed.", self.kind.display_name()),
            Err(err) => warn!(
                "Error while closing {} connection: {}",
                self.kind.display_name(),
                err
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{REJECTED_PASSWORD, Recorded, RecordingAdapter};
    use tracing_test::traced_test;

    fn params(database: &str, password: &str) -> ConnectionParams {
        ConnectionParams::new("localhost", "akki", password, database)
    }

    #[tokio::test]
    async fn test_connect_sets_handle() {
        let mut connector =
            DbConnector::<RecordingAdapter>::new(DatabaseKind::MySql, params("conn_ok", "pw"));
        assert!(connector.get_connection().is_none());

        connector.connect().await.unwrap();
        assert!(connector.is_connected());
        assert_eq!(connector.dialect().name(), "MySQL");
    }

    #[traced_test]
    #[tokio::test]
    async fn test_failed_connect_leaves_handle_unset() {
        let mut connector = DbConnector::<RecordingAdapter>::new(
            DatabaseKind::Postgres,
            params("conn_rejected", REJECTED_PASSWORD),
        );

        let result = connector.connect().await;
        assert!(matches!(result, Err(ConnectorError::Refused(_))));
        assert!(connector.get_connection().is_none());
        assert!(logs_contain("Error connecting to PostgreSQL"));
    }

    #[tokio::test]
    async fn test_close_is_idempotent() {
        let mut connector =
            DbConnector::<RecordingAdapter>::new(DatabaseKind::Postgres, params("conn_close", "pw"));
        connector.close().await;

        connector.connect().await.unwrap();
        let journal = RecordingAdapter::journal("conn_close");
        connector.close().await;
        connector.close().await;

        assert!(!connector.is_connected());
        let closes = journal
            .statements()
            .into_iter()
            .filter(|s| *s == Recorded::Close)
            .count();
        assert_eq!(closes, 1);
    }
}
