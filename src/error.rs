use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrdError {
    #[error("Missing required column '{column}' in {source_name}")]
    MissingColumn { column: String, source_name: String },

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unterminated quoted field starting on line {line} of {source_name}")]
    UnterminatedQuote { line: usize, source_name: String },

    #[error("Failed to set up log file: {0}")]
    Logging(#[from] tracing_appender::rolling::InitError),

    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("Failed to move rendered page into '{}': {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DrdError>;
