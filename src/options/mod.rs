//! The ordered list of wheel options.
//!
//! [`OptionList`] is the pure in-memory model; [`OptionStore`] wraps it and
//! writes a full snapshot to a [`KeyValueStore`](crate::state::KeyValueStore)
//! after every mutation.

mod store;

pub use store::OptionStore;

use serde::Serialize;
use tracing::{debug, warn};

use crate::state::StoredOption;

/// Hard cap on the number of options in the list.
pub const MAX_OPTIONS: usize = 40;

/// Longest option text accepted by `add`, in characters.
pub const MAX_TEXT_CHARS: usize = 30;

/// Number of options that must be active for a spin.
pub const MIN_ACTIVE_TO_SPIN: usize = 2;

/// Stable identity of an option for the lifetime of a loaded list.
///
/// Two options with identical text are still distinct entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct OptionId(u64);

/// A labeled, toggleable option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelOption {
    pub id: OptionId,
    pub text: String,
    pub enabled: bool,
}

/// Ordered collection of options. Order determines slice position.
#[derive(Debug, Clone, Default)]
pub struct OptionList {
    items: Vec<WheelOption>,
    next_id: u64,
}

impl OptionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from persisted records, assigning fresh ids.
    ///
    /// Records with blank text are dropped and anything past
    /// [`MAX_OPTIONS`] is ignored, so a hand-edited file cannot break the
    /// list's limits.
    pub fn from_stored(records: Vec<StoredOption>) -> Self {
        let mut list = Self::new();
        let total = records.len();
        for record in records {
            if record.text.trim().is_empty() {
                warn!("skipping stored option with blank text");
                continue;
            }
            if list.is_full() {
                warn!(total, max = MAX_OPTIONS, "stored option list too long, truncating");
                break;
            }
            let id = list.allocate_id();
            list.items.push(WheelOption {
                id,
                text: record.text,
                enabled: record.enabled,
            });
        }
        list
    }

    /// The six-entry starter list (`<prefix> 1` … `<prefix> 6`).
    pub fn defaults(prefix: &str) -> Self {
        Self::from_stored(
            (1..=6)
                .map(|n| StoredOption {
                    text: format!("{prefix} {n}"),
                    enabled: true,
                })
                .collect(),
        )
    }

    /// Persistable snapshot of the list.
    pub fn to_stored(&self) -> Vec<StoredOption> {
        self.items
            .iter()
            .map(|item| StoredOption {
                text: item.text.clone(),
                enabled: item.enabled,
            })
            .collect()
    }

    fn allocate_id(&mut self) -> OptionId {
        let id = OptionId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn items(&self) -> &[WheelOption] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&WheelOption> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX_OPTIONS
    }

    /// Enabled options, in list order.
    pub fn active(&self) -> Vec<WheelOption> {
        self.items.iter().filter(|i| i.enabled).cloned().collect()
    }

    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|i| i.enabled).count()
    }

    pub fn hidden_count(&self) -> usize {
        self.items.len() - self.active_count()
    }

    pub fn can_spin(&self) -> bool {
        self.active_count() >= MIN_ACTIVE_TO_SPIN
    }

    /// Append a new enabled option.
    ///
    /// The text is trimmed and cut to [`MAX_TEXT_CHARS`]. Blank text or a full
    /// list is a silent no-op. Returns the new id when something was added.
    pub fn add(&mut self, text: &str) -> Option<OptionId> {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.is_full() {
            debug!(len = self.items.len(), "options:add rejected");
            return None;
        }
        let text: String = trimmed.chars().take(MAX_TEXT_CHARS).collect();
        let text = text.trim_end().to_string();
        let id = self.allocate_id();
        self.items.push(WheelOption {
            id,
            text,
            enabled: true,
        });
        Some(id)
    }

    /// Remove the option at `index`.
    pub fn delete(&mut self, index: usize) -> Option<WheelOption> {
        if !self.check_index(index) {
            return None;
        }
        Some(self.items.remove(index))
    }

    /// Flip `enabled` on the option at `index`. Returns the new value.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        if !self.check_index(index) {
            return None;
        }
        let item = &mut self.items[index];
        item.enabled = !item.enabled;
        Some(item.enabled)
    }

    /// Enable every option. Returns how many were hidden before.
    pub fn reactivate_all(&mut self) -> usize {
        let hidden = self.hidden_count();
        for item in &mut self.items {
            item.enabled = true;
        }
        hidden
    }

    /// Set `enabled` on the option with this id. Returns false if the id is
    /// no longer in the list.
    pub fn set_enabled(&mut self, id: OptionId, value: bool) -> bool {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.enabled = value;
                true
            }
            None => false,
        }
    }

    /// Set `enabled` on every option whose text equals `text`.
    ///
    /// Duplicate labels are all affected. Returns how many matched.
    pub fn set_enabled_by_text(&mut self, text: &str, value: bool) -> usize {
        let mut matched = 0;
        for item in self.items.iter_mut().filter(|i| i.text == text) {
            item.enabled = value;
            matched += 1;
        }
        matched
    }

    /// Out-of-range indices are a wiring bug: loud in debug, ignored in release.
    fn check_index(&self, index: usize) -> bool {
        let in_range = index < self.items.len();
        debug_assert!(
            in_range,
            "option index {index} out of range (len {})",
            self.items.len()
        );
        if !in_range {
            warn!(index, len = self.items.len(), "options: index out of range");
        }
        in_range
    }
}
