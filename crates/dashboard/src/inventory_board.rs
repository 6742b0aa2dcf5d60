//! Inventory view state.

use std::io::{Read, Write};
use std::sync::Arc;

use chrono::NaiveDate;

use fleetstock_core::{DomainError, Entity, VehicleId};
use fleetstock_import::{ImportOutcome, export_vehicles, import_vehicles};
use fleetstock_inventory::{
    Forecast, StatusThresholds, TimeFrame, VehicleItem, forecast, sample::sample_fleet,
};
use fleetstock_store::{InventoryState, KeyValueStore, load_state, save_state};

use crate::DashboardError;

/// Store key holding the selected time frame.
pub const TIME_FRAME_KEY: &str = "inventory.time_frame";

/// One rendered line of the inventory table.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRow<'a> {
    pub item: &'a VehicleItem,
    pub forecast: Forecast,
}

/// The inventory table's component state.
///
/// Owns the item collection, the selected time frame, the lead-time memory
/// and a store handle. Every mutation persists; every read recomputes, so the
/// view is always a pure function of current state.
pub struct InventoryBoard {
    store: Arc<dyn KeyValueStore>,
    state: InventoryState,
    time_frame: TimeFrame,
    thresholds: StatusThresholds,
}

impl InventoryBoard {
    /// Open the board against a store, seeding sample data on first run.
    pub fn open(store: Arc<dyn KeyValueStore>) -> Result<Self, DashboardError> {
        let state = match load_state(store.as_ref())? {
            Some(state) => state,
            None => {
                tracing::info!("no persisted inventory; seeding sample fleet");
                let state = InventoryState::new(sample_fleet());
                save_state(store.as_ref(), &state)?;
                state
            }
        };
        let time_frame = store
            .get(TIME_FRAME_KEY)?
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();
        Ok(Self {
            store,
            state,
            time_frame,
            thresholds: StatusThresholds::default(),
        })
    }

    pub fn with_thresholds(mut self, thresholds: StatusThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn items(&self) -> &[VehicleItem] {
        &self.state.items
    }

    pub fn time_frame(&self) -> TimeFrame {
        self.time_frame
    }

    pub fn set_time_frame(&mut self, time_frame: TimeFrame) -> Result<(), DashboardError> {
        self.time_frame = time_frame;
        self.store.set(TIME_FRAME_KEY, time_frame.key())?;
        Ok(())
    }

    /// Apply a raw lead-time edit to one vehicle.
    ///
    /// Invalid input (negative, non-numeric) is silently rejected and the
    /// stored value retained, per the original's edit rules; only an unknown
    /// id is an error. Returns whether anything changed.
    pub fn edit_lead_time(&mut self, id: VehicleId, raw: &str) -> Result<bool, DashboardError> {
        let item = self
            .state
            .items
            .iter_mut()
            .find(|item| *item.id() == id)
            .ok_or(DomainError::NotFound)?;

        if !item.apply_lead_time_input(raw) {
            return Ok(false);
        }

        let key = item.model_key();
        match item.factory_lead_time() {
            Some(weeks) => {
                self.state.lead_times.insert(key, weeks);
            }
            // A cleared value is forgotten, so a re-import will not resurrect it.
            None => {
                self.state.lead_times.remove(&key);
            }
        }
        save_state(self.store.as_ref(), &self.state)?;
        Ok(true)
    }

    /// Import a spreadsheet, replacing the collection wholesale on success.
    ///
    /// Remembered lead times are reapplied to rows sharing a model key. On
    /// failure the existing data is left untouched.
    pub fn import_csv<R: Read>(&mut self, reader: R) -> Result<ImportOutcome, DashboardError> {
        let outcome = import_vehicles(reader)?;
        self.state.items = outcome.items.clone();
        self.state.reapply_lead_times();
        save_state(self.store.as_ref(), &self.state)?;
        Ok(outcome)
    }

    pub fn export_csv<W: Write>(&self, writer: W) -> Result<(), DashboardError> {
        export_vehicles(writer, &self.state.items)?;
        Ok(())
    }

    /// The table rows under the current time frame, as of `today`.
    pub fn rows(&self, today: NaiveDate) -> Vec<InventoryRow<'_>> {
        self.state
            .items
            .iter()
            .map(|item| InventoryRow {
                item,
                forecast: forecast(item, self.time_frame, &self.thresholds, today),
            })
            .collect()
    }
}
