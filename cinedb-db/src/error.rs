//! Error classification at the SQLite boundary.
//!
//! Every driver error funnels through `From<rusqlite::Error>`, which sorts
//! constraint failures into the outcomes callers care about. Operations
//! never inspect driver errors themselves.

use std::fmt;

use rusqlite::{ffi, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    /// A NOT NULL or CHECK constraint rejected the values.
    #[error("Bad parameters: {0}")]
    BadParams(String),

    /// A primary key or unique constraint collided with an existing row.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// The target row is missing, or a referenced row is.
    #[error("Does not exist: {0}")]
    NotExists(String),

    #[error("Seed file error: {0}")]
    Seed(#[from] cinedb_catalog::YamlError),

    #[error("SQLite error: {0}")]
    Sqlite(rusqlite::Error),
}

impl OperationError {
    pub(crate) fn not_exists(what: impl Into<String>) -> Self {
        Self::NotExists(what.into())
    }

    /// The result code this error is reported as.
    pub fn return_value(&self) -> ReturnValue {
        match self {
            Self::BadParams(_) => ReturnValue::BadParams,
            Self::AlreadyExists(_) => ReturnValue::AlreadyExists,
            Self::NotExists(_) => ReturnValue::NotExists,
            Self::Seed(_) | Self::Sqlite(_) => ReturnValue::Error,
        }
    }
}

impl From<rusqlite::Error> for OperationError {
    fn from(err: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(failure, message) = &err {
            if failure.code == ErrorCode::ConstraintViolation {
                let detail = message.clone().unwrap_or_else(|| failure.to_string());
                match failure.extended_code {
                    ffi::SQLITE_CONSTRAINT_NOTNULL | ffi::SQLITE_CONSTRAINT_CHECK => {
                        return Self::BadParams(detail);
                    }
                    ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                        return Self::AlreadyExists(detail);
                    }
                    ffi::SQLITE_CONSTRAINT_FOREIGNKEY => {
                        return Self::NotExists(detail);
                    }
                    _ => {}
                }
            }
        }
        Self::Sqlite(err)
    }
}

/// Outcome code of a write operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnValue {
    Ok,
    BadParams,
    AlreadyExists,
    NotExists,
    Error,
}

impl ReturnValue {
    /// Collapse an operation result onto its result code.
    pub fn of<T>(result: &Result<T, OperationError>) -> Self {
        match result {
            Ok(_) => Self::Ok,
            Err(e) => e.return_value(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::BadParams => "BAD_PARAMS",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::NotExists => "NOT_EXISTS",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for ReturnValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
