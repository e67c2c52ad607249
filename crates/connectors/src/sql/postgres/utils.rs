use crate::sql::base::error::ConnectorError;
use model::{
    core::kind::DatabaseKind,
    execution::connection::{ConnectionParams, SslMode},
};
use native_tls::TlsConnector;
use postgres_native_tls::MakeTlsConnector;
use tokio_postgres::{Client, Config, NoTls, config::SslMode as PgSslMode};
use tracing::{error, warn};

pub(crate) fn build_config(params: &ConnectionParams) -> Config {
    let ssl_mode = match params.ssl_mode.unwrap_or_default() {
        SslMode::Disable => PgSslMode::Disable,
        SslMode::Prefer => PgSslMode::Prefer,
        SslMode::Require => PgSslMode::Require,
    };

    let mut config = Config::new();
    config
        .host(params.host.as_str())
        .port(params.effective_port(DatabaseKind::Postgres))
        .user(params.user.as_str())
        .password(params.password.as_str())
        .dbname(params.database.as_str())
        .ssl_mode(ssl_mode);
    config
}

pub(crate) async fn connect_client(config: Config) -> Result<Client, ConnectorError> {
    match config.get_ssl_mode() {
        PgSslMode::Disable => connect_without_tls(config).await,
        PgSslMode::Prefer => match connect_with_tls(config.clone()).await {
            Ok(client) => Ok(client),
            Err(error) => {
                warn!(%error, "Postgres TLS handshake failed, retrying without TLS");
                connect_without_tls(config).await
            }
        },
        _ => connect_with_tls(config).await,
    }
}

pub(crate) async fn connect_with_tls(config: Config) -> Result<Client, ConnectorError> {
    let connector = TlsConnector::builder().build()?;
    let tls = MakeTlsConnector::new(connector);
    let (client, connection) = config.connect(tls).await?;
    tokio::spawn(async move {
        if let Err(err) = connection.await {
            error!(%err, "Postgres connection error");
        }
    });
    Ok(client)
}

pub(crate) async fn connect_without_tls(config: Config) -> Result<Client, ConnectorError> {
    let (client, connection) = config.connect(NoTls).await?;
    tokio::spawn(async move {
        if let Err(err) = connection.await {
            error!(%err, "Postgres connection error");
        }
    });
    Ok(client)
}
