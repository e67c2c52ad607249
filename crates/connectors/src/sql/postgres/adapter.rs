use crate::sql::{
    base::{
        adapter::SqlAdapter,
        error::{ConnectorError, DbError},
    },
    postgres::{
        params::PgParamStore,
        utils::{build_config, connect_client},
    },
};
use async_trait::async_trait;
use model::execution::connection::ConnectionParams;
use tokio::sync::Mutex;
use tokio_postgres::Client;
use tracing::debug;

pub struct PgAdapter {
    client: Mutex<Client>,
}

#[async_trait]
impl SqlAdapter for PgAdapter {
    async fn connect(params: &ConnectionParams) -> Result<Self, ConnectorError> {
        let client = connect_client(build_config(params)).await?;
        Ok(PgAdapter {
            client: Mutex::new(client),
        })
    }

    async fn exec(&self, query: &str) -> Result<(), DbError> {
        let client = self.client.lock().await;
        client.batch_execute(query).await?;
        Ok(())
    }

    async fn exec_batch(&self, query: &str, rows: Vec<Vec<String>>) -> Result<u64, DbError> {
        let mut client = self.client.lock().await;
        let tx = client.transaction().await?;
        let statement = tx.prepare(query).await?;

        let mut written = 0;
        for row in rows {
            let bindings = PgParamStore::from_values(row);
            written += tx.execute(&statement, &bindings.as_refs()).await?;
        }

        tx.commit().await?;
        debug!("Committed {} rows", written);
        Ok(written)
    }

    async fn ping(&self) -> Result<(), DbError> {
        let client = self.client.lock().await;
        let row = client.query_one("SELECT 1", &[]).await?;
        let val: i32 = row.get(0);
        if val != 1 {
            return Err(DbError::Unknown(format!(
                "Postgres ping returned unexpected result: {val}"
            )));
        }
        Ok(())
    }

    async fn close(self) -> Result<(), DbError> {
        // Dropping the client ends the background connection task.
        drop(self.client.into_inner());
        Ok(())
    }
}
