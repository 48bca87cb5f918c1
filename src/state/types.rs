//! Persisted record shapes.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::store::KeyValueStore;
use crate::i18n::Language;
use crate::theme::Theme;

/// Key under which the option list is stored.
pub const ITEMS_KEY: &str = "wheel_items";

/// Key under which [`GlobalSettings`] are stored.
pub const SETTINGS_KEY: &str = "settings";

/// One entry of the persisted option list.
///
/// Ids are deliberately absent: they are reassigned every time the list is
/// loaded, so the on-disk format stays a plain ordered `{text, enabled}` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredOption {
    pub text: String,
    pub enabled: bool,
}

/// Process-wide preferences that survive restarts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Last language chosen in the UI (None = use config / detection)
    #[serde(default)]
    pub language: Option<Language>,

    /// Last theme chosen in the UI (None = use config / default)
    #[serde(default)]
    pub theme: Option<Theme>,

    /// Cumulative wheel rotation in degrees, so the wheel keeps turning
    /// forward across sessions
    #[serde(default)]
    pub rotation: u64,
}

impl GlobalSettings {
    /// Load settings from the store.
    ///
    /// Returns defaults if the key is missing, unreadable or corrupted.
    pub fn load(kv: &dyn KeyValueStore) -> Self {
        match kv.get(SETTINGS_KEY) {
            Ok(Some(content)) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!(error = %e, "corrupted settings, using defaults");
                Self::default()
            }),
            Ok(None) => Self::default(),
            Err(e) => {
                warn!(error = %e, "failed to read settings, using defaults");
                Self::default()
            }
        }
    }

    /// Save settings to the store.
    pub fn save(&self, kv: &dyn KeyValueStore) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        kv.set(SETTINGS_KEY, &content)
    }
}
