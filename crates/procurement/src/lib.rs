//! Procurement tracking domain module.
//!
//! Records one row per ordered vehicle (who it is for, which leaseco, every
//! milestone date) and implements the tabular view's filter engine.

pub mod filter;
pub mod record;
pub mod sample;

pub use filter::{DateRange, ProcurementFilter};
pub use record::{DealerInfo, LeasecoDates, ProcurementRecord, TrackerDates, distinct_values};
