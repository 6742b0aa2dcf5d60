//! Key-value persistence for dashboard state.
//!
//! Models the browser's local storage as an explicit store interface
//! (get/set/subscribe) with an in-memory implementation for tests and a
//! JSON-file implementation for real sessions.

pub mod json_file;
pub mod kv;
pub mod memory;
pub mod state;

pub use json_file::JsonFileStore;
pub use kv::{KeyValueStore, StoreChange, StoreError, Subscription};
pub use memory::MemoryStore;
pub use state::{InventoryState, load_state, save_state};
