//! Key-value persistence for the option list and global settings.

mod store;
mod types;

pub use store::{KeyValueStore, MemoryStore, StateStore, default_state_dir};
pub use types::{GlobalSettings, ITEMS_KEY, SETTINGS_KEY, StoredOption};
