use crate::{error::LoadError, execution::summary::LoadSummary};
use connectors::{
    file::csv::reader::{CsvReader, CsvTable},
    sql::{
        base::{
            adapter::SqlAdapter,
            connector::DbConnector,
            repository::{DataRepository, LoadOutcome},
        },
        mysql::adapter::MySqlAdapter,
        postgres::adapter::PgAdapter,
    },
};
use model::{
    core::kind::DatabaseKind,
    execution::config::{ConnectFailurePolicy, LoadConfig},
};
use tracing::{info, warn};

/// Loads `config.csv_path` into `config.table_name` on the configured engine.
pub async fn run(config: &LoadConfig) -> Result<LoadSummary, LoadError> {
    match config.engine {
        DatabaseKind::MySql => load::<MySqlAdapter>(config).await,
        DatabaseKind::Postgres => load::<PgAdapter>(config).await,
    }
}

/// connect, read, create, insert, close. The connection is closed even when a
/// statement fails.
pub async fn load<A: SqlAdapter>(config: &LoadConfig) -> Result<LoadSummary, LoadError> {
    let params = config.connection_params();
    let mut connector = DbConnector::<A>::new(config.engine, params.clone());

    if let Err(source) = connector.connect().await {
        match config.on_connect_failure {
            ConnectFailurePolicy::Fail => {
                return Err(LoadError::ConnectionUnavailable {
                    engine: config.engine.display_name().to_string(),
                    target: params.redacted(config.engine),
                    source,
                });
            }
            ConnectFailurePolicy::Skip => {
                warn!("Continuing without a database connection, nothing will be loaded");
            }
        }
    }

    let table = CsvReader::new().read_table(&config.csv_path);
    let result = load_into(&connector, config, &table).await;
    connector.close().await;

    let outcome = result?;
    let summary = LoadSummary {
        engine: config.engine,
        csv_path: config.csv_path.clone(),
        table: config.table_name.to_string(),
        columns: table.columns.names().to_vec(),
        rows_read: table.rows.len(),
        rows_inserted: outcome.load.rows_inserted,
        connected: outcome.connected,
        table_created: outcome.load.table_created,
    };

    info!(
        "Loaded {}/{} rows from {} into '{}'",
        summary.rows_inserted,
        summary.rows_read,
        config.csv_path.display(),
        summary.table
    );
    Ok(summary)
}

struct RunOutcome {
    load: LoadOutcome,
    connected: bool,
}

async fn load_into<A: SqlAdapter>(
    connector: &DbConnector<A>,
    config: &LoadConfig,
    table: &CsvTable,
) -> Result<RunOutcome, LoadError> {
    let connected = connector.is_connected();
    if table.is_empty() {
        warn!(
            "Nothing to load from {}, skipping database steps",
            config.csv_path.display()
        );
        return Ok(RunOutcome {
            load: LoadOutcome::default(),
            connected,
        });
    }

    let repository = DataRepository::new(connector, config.table_name.clone());
    let load = repository.load(table).await?;

    Ok(RunOutcome { load, connected })
}

/// Connects with `config`, runs `SELECT 1` and disconnects.
pub async fn check_connection(config: &LoadConfig) -> Result<(), LoadError> {
    match config.engine {
        DatabaseKind::MySql => ping::<MySqlAdapter>(config).await,
        DatabaseKind::Postgres => ping::<PgAdapter>(config).await,
    }
}

pub async fn ping<A: SqlAdapter>(config: &LoadConfig) -> Result<(), LoadError> {
    let params = config.connection_params();
    let target = params.redacted(config.engine);
    let mut connector = DbConnector::<A>::new(config.engine, params);

    connector
        .connect()
        .await
        .map_err(|source| LoadError::ConnectionUnavailable {
            engine: config.engine.display_name().to_string(),
            target: target.clone(),
            source,
        })?;

    let result = match connector.get_connection() {
        Some(connection) => connection.ping().await.map_err(LoadError::from),
        None => Ok(()),
    };
    connector.close().await;
    result?;

    info!("{} ping to {} succeeded", config.engine.display_name(), target);
    Ok(())
}
