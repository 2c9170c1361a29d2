//! Unified application error type.
//! Config, store, form and export code all return AppError so the CLI
//! reports every failure the same way. The settlement calculator itself
//! never fails.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store
    // ---------------------------
    #[error("Store error: {0}")]
    Store(#[from] serde_json::Error),

    // ---------------------------
    // Parsing / form validation
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid session key: {0}")]
    InvalidSessionKey(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Unknown member: {0}")]
    UnknownMember(String),

    #[error("Invalid driver: {0}")]
    InvalidDriver(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No ride sessions found for {0}")]
    NoSessionsFor(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
