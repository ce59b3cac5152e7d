use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to read input file '{path}': {source}")]
    InputError {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid JSON in '{path}': {source}")]
    JsonError {
        path: String,
        source: serde_json::Error,
    },

    #[error("Schema error: {message}")]
    SchemaError { message: String },

    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        source: std::io::Error,
    },

    #[error("YAML serialization error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid configuration value for '{field}': {reason}")]
    ConfigError { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
