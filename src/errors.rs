//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
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

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid punch kind: {0}")]
    InvalidKind(String),

    #[error("Invalid location code: {0}")]
    InvalidLocation(String),

    // ---------------------------
    // Ledger errors
    // ---------------------------
    /// A punch was rejected by a business-rule guard. No mutation occurred;
    /// the action is safely re-invocable once the blocking condition clears.
    #[error("{0}")]
    GuardRejected(String),

    /// Another punch submission is still in flight on this ledger.
    #[error("Another punch is still being processed; retry in a moment")]
    Busy,

    /// Derived state violates a ledger invariant. Fatal: never repaired.
    #[error("Ledger corruption: {0}")]
    Ledger(String),

    #[error("Ambiguous adjustment: {0}")]
    AmbiguousAdjustment(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
