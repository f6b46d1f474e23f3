// File: crates/chart-data/src/error.rs
// Summary: Error type for parsing, loading and export. Derivation itself never fails.

use thiserror::Error;

use crate::mode::Mode;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown mode '{0}' (expected simple, linear or logarithmic)")]
    UnknownMode(String),

    #[error("{0} mode needs numeric values on the x axis")]
    ModeUnavailable(Mode),

    #[error("csv export: {0}")]
    Csv(#[from] csv::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
