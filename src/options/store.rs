use std::rc::Rc;
use tracing::{info, warn};

use super::{OptionId, OptionList, WheelOption};
use crate::state::{ITEMS_KEY, KeyValueStore, StoredOption};

/// Option list bound to its persistence.
///
/// Every successful mutation writes the whole list under [`ITEMS_KEY`].
/// Write failures are logged and swallowed so a read-only state directory
/// never blocks the wheel.
pub struct OptionStore {
    list: OptionList,
    kv: Rc<dyn KeyValueStore>,
}

impl OptionStore {
    /// Load the list from `kv`, falling back to the default set.
    ///
    /// A missing key, unreadable store or corrupted JSON all yield the six
    /// default options. Nothing is surfaced to the caller.
    pub fn load(kv: Rc<dyn KeyValueStore>, default_prefix: &str) -> Self {
        let list = match kv.get(ITEMS_KEY) {
            Ok(Some(content)) => match serde_json::from_str::<Vec<StoredOption>>(&content) {
                Ok(records) => OptionList::from_stored(records),
                Err(e) => {
                    warn!(error = %e, "corrupted option list, using defaults");
                    OptionList::defaults(default_prefix)
                }
            },
            Ok(None) => OptionList::defaults(default_prefix),
            Err(e) => {
                warn!(error = %e, "failed to read option list, using defaults");
                OptionList::defaults(default_prefix)
            }
        };
        Self { list, kv }
    }

    /// Wrap an existing list without touching the store.
    pub fn with_list(kv: Rc<dyn KeyValueStore>, list: OptionList) -> Self {
        Self { list, kv }
    }

    pub fn list(&self) -> &OptionList {
        &self.list
    }

    pub fn items(&self) -> &[WheelOption] {
        self.list.items()
    }

    pub fn active(&self) -> Vec<WheelOption> {
        self.list.active()
    }

    pub fn add(&mut self, text: &str) -> Option<OptionId> {
        let id = self.list.add(text)?;
        info!(len = self.list.len(), "store:add");
        self.persist();
        Some(id)
    }

    pub fn delete(&mut self, index: usize) -> Option<WheelOption> {
        let removed = self.list.delete(index)?;
        info!(index, len = self.list.len(), "store:delete");
        self.persist();
        Some(removed)
    }

    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let enabled = self.list.toggle(index)?;
        info!(index, enabled, "store:toggle");
        self.persist();
        Some(enabled)
    }

    pub fn reactivate_all(&mut self) -> usize {
        let revived = self.list.reactivate_all();
        info!(revived, "store:reactivate_all");
        self.persist();
        revived
    }

    pub fn set_enabled(&mut self, id: OptionId, value: bool) -> bool {
        if !self.list.set_enabled(id, value) {
            return false;
        }
        info!(?id, value, "store:set_enabled");
        self.persist();
        true
    }

    pub fn set_enabled_by_text(&mut self, text: &str, value: bool) -> usize {
        let matched = self.list.set_enabled_by_text(text, value);
        if matched > 0 {
            info!(matched, value, "store:set_enabled_by_text");
            self.persist();
        }
        matched
    }

    /// Write the full list to the store.
    fn persist(&self) {
        let result = serde_json::to_string(&self.list.to_stored())
            .map_err(anyhow::Error::from)
            .and_then(|content| self.kv.set(ITEMS_KEY, &content));
        if let Err(e) = result {
            warn!(error = %e, "failed to persist option list");
        }
    }
}
