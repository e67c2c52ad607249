use crate::error::CliError;
use engine_runtime::execution::summary::LoadSummary;

fn generate_report_json(summary: &LoadSummary) -> Result<String, CliError> {
    serde_json::to_string_pretty(summary).map_err(CliError::JsonSerialize)
}

pub async fn write_report(summary: &LoadSummary, path: String) -> Result<(), CliError> {
    let report_json = generate_report_json(summary)?;
    tokio::fs::write(path, report_json).await?;
    Ok(())
}

pub fn print_report(summary: &LoadSummary) -> Result<(), CliError> {
    let report_json = generate_report_json(summary)?;
    println!("{report_json}");
    Ok(())
}
