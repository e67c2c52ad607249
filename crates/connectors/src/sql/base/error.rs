use thiserror::Error;

/// All errors coming from the database/query layer.
#[derive(Debug, Error)]
pub enum DbError {
    /// MySQL driver error.
    #[error("MySQL error: {0}")]
    MySqlError(#[from] mysql_async::Error),

    /// PostgreSQL driver error.
    #[error("PostgreSQL error: {0}")]
    PgError(#[from] tokio_postgres::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Errors happening during connection setup.
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("MySQL connection failed: {0}")]
    MySql(#[from] mysql_async::Error),

    #[error("PostgreSQL connection failed: {0}")]
    Connection(#[from] tokio_postgres::Error),

    #[error("TLS configuration error: {0}")]
    TlsConfig(#[from] native_tls::Error),

    /// The server refused the session (bad credentials, unknown database).
    #[error("Connection refused: {0}")]
    Refused(String),
}

/// Errors raised while creating the destination table or writing rows.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A row's keys differ from the first row's, in names or order.
    #[error("Row {row} has columns {found:?}, expected {expected:?}")]
    ColumnMismatch {
        row: usize,
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// A CSV column collides with the generated surrogate key.
    #[error("Column '{0}' collides with the generated primary key")]
    SurrogateKeyConflict(String),

    #[error("Cannot create table '{0}' without columns")]
    NoColumns(String),

    #[error("Database error: {0}")]
    Database(#[from] DbError),
}
