use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use connectors::file::csv::reader::CsvReader;
use engine_runtime::execution::executor;
use model::{execution::config::LoadConfig, records::table::TableDescriptor};
use planner::query::{dialect, generator::QueryGenerator};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod env;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "csvload",
    version = "0.1.0",
    about = "Load a CSV file into a MySQL or PostgreSQL table"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Initialize logger
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Load { source, output } => {
            let config = config::load_config(&source).await?;
            config::ensure_password(&config)?;
            info!(
                "Loading {} into {} table '{}'",
                config.csv_path.display(),
                config.engine.display_name(),
                config.table_name
            );

            let summary = executor::run(&config).await?;
            match output {
                Some(path) => output::write_report(&summary, path).await?,
                None => output::print_report(&summary)?,
            }
        }
        Commands::Preview { source } => {
            let config = config::load_config(&source).await?;
            preview(&config)?;
        }
        Commands::TestConn { source } => {
            let config = config::load_config(&source).await?;
            config::ensure_password(&config)?;
            executor::check_connection(&config).await?;
        }
    }

    Ok(())
}

fn preview(config: &LoadConfig) -> Result<(), CliError> {
    let table = CsvReader::new()
        .try_read(&config.csv_path)
        .map_err(|e| CliError::Config(format!("cannot read {}: {e}", config.csv_path.display())))?;

    let descriptor = TableDescriptor::new(config.table_name.clone(), table.columns);
    if descriptor.columns.is_empty() {
        return Err(CliError::Config(format!(
            "{} has no header row",
            config.csv_path.display()
        )));
    }
    let dialect = dialect::for_kind(config.engine);
    if let Some(column) = descriptor.surrogate_conflict(dialect.case_sensitive_identifiers()) {
        return Err(CliError::Config(format!(
            "column '{column}' collides with the generated primary key"
        )));
    }

    let generator = QueryGenerator::new(dialect);
    let (insert, _) = generator.insert(descriptor.name.as_str(), descriptor.columns.names());

    println!("{};", generator.create_table(&descriptor));
    println!("{insert};");
    println!("-- {} rows", table.rows.len());
    Ok(())
}
