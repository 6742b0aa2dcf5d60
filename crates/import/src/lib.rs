//! Spreadsheet (CSV) import/export for the inventory view.
//!
//! Import is deliberately forgiving: header matching tolerates naming
//! variation, malformed cells coerce to defaults, and only a file that cannot
//! be read at all (or has no recognizable header) is an error.

pub mod columns;
pub mod vehicles;

use thiserror::Error;

pub use columns::{ColumnMap, Field};
pub use vehicles::{ImportOutcome, export_vehicles, import_vehicles};

/// Import/export failure.
///
/// Per-cell problems are never errors (they coerce); these are whole-file
/// conditions where the caller keeps its existing data unchanged.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read spreadsheet: {0}")]
    Read(#[from] csv::Error),

    #[error("failed to write spreadsheet: {0}")]
    Write(#[from] std::io::Error),

    #[error("spreadsheet has no recognizable columns")]
    NoUsableHeader,

    #[error(transparent)]
    Domain(#[from] fleetstock_core::DomainError),
}
