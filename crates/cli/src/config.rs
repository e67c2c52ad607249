use crate::{commands::ConfigArgs, env::EnvManager, error::CliError};
use model::{core::identifiers::TableName, execution::config::LoadConfig};
use std::path::PathBuf;
use tracing::debug;

/// Environment variable consulted when the config file has no password.
pub const PASSWORD_ENV_VAR: &str = "CSVLOAD_DB_PASSWORD";

/// Reads the JSON config and applies command line overrides and secrets.
pub async fn load_config(args: &ConfigArgs) -> Result<LoadConfig, CliError> {
    let source = tokio::fs::read_to_string(&args.config).await?;
    let config: LoadConfig = serde_json::from_str(&source)?;

    let mut env = EnvManager::new();
    if let Some(path) = &args.env_file {
        env.load_from_file(path)?;
    }

    apply_overrides(config, args, &env)
}

fn apply_overrides(
    mut config: LoadConfig,
    args: &ConfigArgs,
    env: &EnvManager,
) -> Result<LoadConfig, CliError> {
    if let Some(csv) = &args.csv {
        config.csv_path = PathBuf::from(csv);
    }
    if let Some(table) = &args.table {
        config.table_name = TableName::new(table.as_str())?;
    }
    if config.password.is_none() {
        debug!("No password in config, reading {}", PASSWORD_ENV_VAR);
        config.password = env.get(PASSWORD_ENV_VAR).map(str::to_string);
    }

    Ok(config)
}

/// Commands that connect need a password from the file or the environment.
pub fn ensure_password(config: &LoadConfig) -> Result<(), CliError> {
    if config.password.is_none() {
        return Err(CliError::Config(format!(
            "no password in the config file and {PASSWORD_ENV_VAR} is not set"
        )));
    }
    Ok(())
}
