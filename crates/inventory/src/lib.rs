//! Vehicle inventory domain module.
//!
//! This crate contains the stock model and the depletion forecast rules,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod forecast;
pub mod item;
pub mod sample;
pub mod time_frame;

pub use forecast::{Depletion, Forecast, OrderAdvice, StatusThresholds, StockStatus, forecast};
pub use item::{LeadTimeEdit, VehicleItem, parse_lead_time_input};
pub use time_frame::TimeFrame;
