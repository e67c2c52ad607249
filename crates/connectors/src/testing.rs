//! In-memory [`SqlAdapter`] that journals every call instead of talking to a
//! server. Journals are registered per database name so a test can inspect
//! what a connector did after the connector itself is gone.

use crate::sql::base::{
    adapter::SqlAdapter,
    error::{ConnectorError, DbError},
};
use async_trait::async_trait;
use model::execution::connection::ConnectionParams;
use std::{
    collections::HashMap,
    sync::{Arc, LazyLock, Mutex},
};

/// Connecting with this password is refused, like bad credentials.
pub const REJECTED_PASSWORD: &str = "invalid";

/// Every statement against this database fails.
pub const BROKEN_DATABASE: &str = "broken";

static JOURNALS: LazyLock<Mutex<HashMap<String, Journal>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recorded {
    Exec(String),
    Batch { sql: String, rows: Vec<Vec<String>> },
    Ping,
    Close,
}

#[derive(Debug, Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<Recorded>>>);

impl Journal {
    fn push(&self, entry: Recorded) {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).push(entry);
    }

    pub fn statements(&self) -> Vec<Recorded> {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of `CREATE TABLE` statements executed.
    pub fn creates(&self) -> usize {
        self.statements()
            .iter()
            .filter(|s| matches!(s, Recorded::Exec(sql) if sql.starts_with("CREATE TABLE")))
            .count()
    }

    pub fn batches(&self) -> usize {
        self.statements()
            .iter()
            .filter(|s| matches!(s, Recorded::Batch { .. }))
            .count()
    }

    pub fn is_closed(&self) -> bool {
        self.statements().contains(&Recorded::Close)
    }
}

pub struct RecordingAdapter {
    journal: Journal,
    broken: bool,
}

impl RecordingAdapter {
    /// Journal of the most recent connection to `database`, or an empty one.
    pub fn journal(database: &str) -> Journal {
        JOURNALS
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(database)
            .cloned()
            .unwrap_or_default()
    }

    fn check(&self) -> Result<(), DbError> {
        if self.broken {
            return Err(DbError::Unknown("statement rejected by test server".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl SqlAdapter for RecordingAdapter {
    async fn connect(params: &ConnectionParams) -> Result<Self, ConnectorError> {
        if params.password == REJECTED_PASSWORD {
            return Err(ConnectorError::Refused(format!(
                "access denied for user '{}'",
                params.user
            )));
        }

        let journal = Journal::default();
        JOURNALS
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(params.database.clone(), journal.clone());

        Ok(RecordingAdapter {
            journal,
            broken: params.database == BROKEN_DATABASE,
        })
    }

    async fn exec(&self, query: &str) -> Result<(), DbError> {
        self.check()?;
        self.journal.push(Recorded::Exec(query.to_string()));
        Ok(())
    }

    async fn exec_batch(&self, query: &str, rows: Vec<Vec<String>>) -> Result<u64, DbError> {
        self.check()?;
        let written = rows.len() as u64;
        self.journal.push(Recorded::Batch {
            sql: query.to_string(),
            rows,
        });
        Ok(written)
    }

    async fn ping(&self) -> Result<(), DbError> {
        self.check()?;
        self.journal.push(Recorded::Ping);
        Ok(())
    }

    async fn close(self) -> Result<(), DbError> {
        self.journal.push(Recorded::Close);
        Ok(())
    }
}
