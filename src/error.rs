//! Fatal error types for trajectory loading.
//!
//! Every variant names the offending path; parse errors carry the 1-based
//! row number. Errors propagate straight to main, which logs and exits
//! before any window appears.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ViewError>;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("cannot list directory {}: {source}", .dir.display())]
    ListDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot open {}: {source}", .path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}: row {row}: expected 3 columns, found {found}", .path.display())]
    ColumnCount {
        path: PathBuf,
        row: usize,
        found: usize,
    },

    #[error("{}: row {row}: non-numeric value {value:?}", .path.display())]
    NonNumeric {
        path: PathBuf,
        row: usize,
        value: String,
    },
}
