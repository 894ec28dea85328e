use std::path::PathBuf;
use supermultiplet::core::shells::ShellError;
use supermultiplet::engine::error::EngineError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Shell(#[from] ShellError),

    #[error("Failed to write export file '{path}': {source}", path = path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid irrep row list '{value}': expected comma-separated integers")]
    InvalidIrrep { value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
