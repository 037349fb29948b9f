//! Unified application error type.
//! All modules (data, core, cli, ui) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Standard input reached end-of-file while a validated answer was required.
    #[error("Input closed")]
    InputClosed,

    // ---------------------------
    // Dataset errors
    // ---------------------------
    #[error("Cannot read data source '{source_name}': {reason}")]
    DataSource { source_name: String, reason: String },

    #[error("Unknown city in configuration: {0}")]
    UnknownCity(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

impl AppError {
    /// Shorthand for a `DataSource` error.
    pub fn data_source(source_name: impl Into<String>, reason: impl ToString) -> Self {
        AppError::DataSource {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
