//! Dashboard component state: the glue between the domain crates and a
//! rendering surface.
//!
//! Mirrors the original's two views: the inventory table (time frame,
//! lead-time edits, import/export, persistence) and the procurement table
//! (filters over a record set).

pub mod inventory_board;
pub mod procurement_board;
pub mod render;

use thiserror::Error;

pub use inventory_board::{InventoryBoard, InventoryRow};
pub use procurement_board::ProcurementBoard;

/// Failure surfaced by a board operation.
///
/// Recomputation itself is infallible; errors come only from the store, the
/// spreadsheet boundary, or addressing a vehicle that does not exist.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Store(#[from] fleetstock_store::StoreError),

    #[error(transparent)]
    Import(#[from] fleetstock_import::ImportError),

    #[error(transparent)]
    Domain(#[from] fleetstock_core::DomainError),
}
