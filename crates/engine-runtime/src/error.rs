use connectors::sql::base::error::{ConnectorError, DbError, RepositoryError};
use thiserror::Error;

/// Top-level errors for a load run.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The database could not be reached and the run is configured to fail.
    #[error("{engine} is unavailable at {target}: {source}")]
    ConnectionUnavailable {
        engine: String,
        target: String,
        #[source]
        source: ConnectorError,
    },

    /// Creating the table or writing rows failed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Database error: {0}")]
    Database(#[from] DbError),
}
