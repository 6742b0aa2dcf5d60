//! Typed persistence layer over the raw key-value store.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use fleetstock_core::ModelKey;
use fleetstock_inventory::VehicleItem;

use crate::kv::{KeyValueStore, StoreError};

/// Store key holding the serialized item collection.
pub const ITEMS_KEY: &str = "inventory.items";
/// Store key holding the model-key -> lead-time-weeks map.
pub const LEAD_TIMES_KEY: &str = "inventory.lead_times";

/// Everything the inventory view persists across sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryState {
    pub items: Vec<VehicleItem>,
    /// Lead times previously entered, keyed by model, so a re-import does not
    /// lose them.
    pub lead_times: HashMap<ModelKey, u32>,
}

impl InventoryState {
    pub fn new(items: Vec<VehicleItem>) -> Self {
        let mut state = Self {
            items,
            lead_times: HashMap::new(),
        };
        state.remember_current_lead_times();
        state
    }

    /// Record every known lead time into the memory map.
    pub fn remember_current_lead_times(&mut self) {
        for item in &self.items {
            if let Some(weeks) = item.factory_lead_time() {
                self.lead_times.insert(item.model_key(), weeks);
            }
        }
    }

    /// Re-apply remembered lead times to items sharing a model key.
    ///
    /// Freshly imported rows carry no lead time; this is what makes an
    /// entered value survive a spreadsheet re-import.
    pub fn reapply_lead_times(&mut self) {
        for item in &mut self.items {
            if let Some(weeks) = self.lead_times.get(&item.model_key()) {
                item.set_factory_lead_time(Some(*weeks));
            }
        }
    }
}

/// Persist the inventory state under its well-known keys.
pub fn save_state(store: &dyn KeyValueStore, state: &InventoryState) -> Result<(), StoreError> {
    store.set(ITEMS_KEY, &serde_json::to_string(&state.items)?)?;
    store.set(LEAD_TIMES_KEY, &serde_json::to_string(&state.lead_times)?)?;
    tracing::debug!(items = state.items.len(), "persisted inventory state");
    Ok(())
}

/// Load the inventory state, `None` when nothing was ever persisted.
pub fn load_state(store: &dyn KeyValueStore) -> Result<Option<InventoryState>, StoreError> {
    let Some(raw_items) = store.get(ITEMS_KEY)? else {
        return Ok(None);
    };
    let items: Vec<VehicleItem> = serde_json::from_str(&raw_items)?;
    let lead_times = match store.get(LEAD_TIMES_KEY)? {
        Some(raw) => serde_json::from_str(&raw)?,
        None => HashMap::new(),
    };
    Ok(Some(InventoryState { items, lead_times }))
}
