use crate::sql::base::error::{ConnectorError, DbError};
use async_trait::async_trait;
use model::execution::connection::ConnectionParams;

/// A live connection to one database engine.
///
/// Implementations own the driver handle; [`DbConnector`] owns the adapter.
///
/// [`DbConnector`]: crate::sql::base::connector::DbConnector
#[async_trait]
pub trait SqlAdapter: Send + Sync {
    async fn connect(params: &ConnectionParams) -> Result<Self, ConnectorError>
    where
        Self: Sized;

    /// Runs a statement without parameters in auto-commit mode.
    async fn exec(&self, query: &str) -> Result<(), DbError>;

    /// Runs `query` once per row inside one transaction and commits once.
    /// Returns the number of rows written.
    async fn exec_batch(&self, query: &str, rows: Vec<Vec<String>>) -> Result<u64, DbError>;

    /// Round-trips `SELECT 1`.
    async fn ping(&self) -> Result<(), DbError>;

    /// Releases the driver connection.
    async fn close(self) -> Result<(), DbError>
    where
        Self: Sized;
}
