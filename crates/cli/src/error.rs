use engine_runtime::error::LoadError;
use model::errors::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read the configuration file: {0}")]
    ConfigFileRead(#[from] std::io::Error),

    #[error("Failed to deserialize the configuration file: {0}")]
    ConfigDeserialize(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid value: {0}")]
    InvalidValue(#[from] ModelError),

    #[error("Failed to run the load: {0}")]
    Runner(#[from] LoadError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),
}
