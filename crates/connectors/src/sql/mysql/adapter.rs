use crate::sql::{
    base::{
        adapter::SqlAdapter,
        error::{ConnectorError, DbError},
    },
    mysql::params::MySqlParamStore,
};
use async_trait::async_trait;
use model::{core::kind::DatabaseKind, execution::connection::ConnectionParams};
use mysql_async::{Conn, OptsBuilder, TxOpts, prelude::Queryable};
use tokio::sync::Mutex;
use tracing::debug;

pub struct MySqlAdapter {
    conn: Mutex<Conn>,
}

fn opts(params: &ConnectionParams) -> OptsBuilder {
    OptsBuilder::default()
        .ip_or_hostname(params.host.clone())
        .tcp_port(params.effective_port(DatabaseKind::MySql))
        .user(Some(params.user.clone()))
        .pass(Some(params.password.clone()))
        .db_name(Some(params.database.clone()))
}

#[async_trait]
impl SqlAdapter for MySqlAdapter {
    async fn connect(params: &ConnectionParams) -> Result<Self, ConnectorError> {
        let conn = Conn::new(opts(params)).await?;
        Ok(MySqlAdapter {
            conn: Mutex::new(conn),
        })
    }

    async fn exec(&self, query: &str) -> Result<(), DbError> {
        let mut conn = self.conn.lock().await;
        conn.query_drop(query).await?;
        Ok(())
    }

    async fn exec_batch(&self, query: &str, rows: Vec<Vec<String>>) -> Result<u64, DbError> {
        let total = rows.len() as u64;
        let params = rows
            .into_iter()
            .map(|row| MySqlParamStore::from_values(&row).into_params());

        let mut conn = self.conn.lock().await;
        let mut tx = conn.start_transaction(TxOpts::default()).await?;
        tx.exec_batch(query, params).await?;
        tx.commit().await?;

        debug!("Committed {} rows", total);
        Ok(total)
    }

    async fn ping(&self) -> Result<(), DbError> {
        let mut conn = self.conn.lock().await;
        let val: Option<i32> = conn.query_first("SELECT 1").await?;
        match val {
            Some(1) => Ok(()),
            other => Err(DbError::Unknown(format!(
                "MySQL ping returned unexpected result: {other:?}"
            ))),
        }
    }

    async fn close(self) -> Result<(), DbError> {
        self.conn.into_inner().disconnect().await?;
        Ok(())
    }
}
