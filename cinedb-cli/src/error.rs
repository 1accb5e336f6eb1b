use cinedb_db::{OperationError, ReturnValue};
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Opening or migrating the database failed
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// A write or seed operation did not succeed
    #[error("{code}: {source}")]
    Operation {
        code: ReturnValue,
        source: OperationError,
    },
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<OperationError> for CliError {
    fn from(source: OperationError) -> Self {
        Self::Operation {
            code: source.return_value(),
            source,
        }
    }
}
