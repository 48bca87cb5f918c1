//! One user's wheel: option store, spin engine and preferences together.
//!
//! Front-ends (CLI commands, the dashboard) hold a [`WheelSession`] and call
//! into it from their event handlers. Each call runs to completion before the
//! next event is handled, which is what keeps the store, the rotation and the
//! spin snapshot consistent without locking.

use std::rc::Rc;
use std::time::Instant;
use tracing::{info, warn};

use crate::config::Config;
use crate::engine::{RandomSource, SpinEngine, SpinRejected, SpinTicket, Winner};
use crate::i18n::{LabelKey, LabelLookup, Language, StaticLabels};
use crate::options::OptionStore;
use crate::state::{GlobalSettings, KeyValueStore};
use crate::theme::Theme;
use crate::view::WheelView;

pub struct WheelSession {
    store: OptionStore,
    engine: SpinEngine,
    settings: GlobalSettings,
    language: Language,
    theme: Theme,
    kv: Rc<dyn KeyValueStore>,
}

impl WheelSession {
    /// Restore a session from `kv`.
    ///
    /// Language and theme come from saved settings, then `config`, then
    /// environment detection / defaults.
    pub fn open(kv: Rc<dyn KeyValueStore>, config: &Config) -> Self {
        let settings = GlobalSettings::load(kv.as_ref());
        let language = settings
            .language
            .or(config.language)
            .unwrap_or_else(Language::detect);
        let theme = settings.theme.or(config.theme).unwrap_or_default();
        let labels = StaticLabels::new(language);
        let store = OptionStore::load(Rc::clone(&kv), labels.label(LabelKey::DefaultItem));
        let engine = SpinEngine::with_rotation(settings.rotation);

        info!(
            ?language,
            ?theme,
            rotation = settings.rotation,
            options = store.items().len(),
            "session:open"
        );

        Self {
            store,
            engine,
            settings,
            language,
            theme,
            kv,
        }
    }

    pub fn store(&self) -> &OptionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut OptionStore {
        &mut self.store
    }

    pub fn engine(&self) -> &SpinEngine {
        &self.engine
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn labels(&self) -> StaticLabels {
        StaticLabels::new(self.language)
    }

    /// Start a spin over the currently active options.
    pub fn spin(
        &mut self,
        rng: &mut dyn RandomSource,
        now: Instant,
    ) -> Result<SpinTicket, SpinRejected> {
        let ticket = self.engine.spin(self.store.active(), rng, now)?;
        self.settings.rotation = self.engine.rotation();
        self.save_settings();
        Ok(ticket)
    }

    /// Fire the pending resolution if due. Returns the new winner.
    pub fn poll(&mut self, now: Instant) -> Option<Winner> {
        self.engine.poll(now).cloned()
    }

    /// Close the winner banner, leaving the winner on the wheel.
    pub fn dismiss_winner(&mut self) -> Option<Winner> {
        self.engine.dismiss()
    }

    /// Close the winner banner and take the winning option off the wheel.
    ///
    /// Only that exact option is disabled, even if others share its text.
    pub fn hide_winner(&mut self) -> Option<Winner> {
        let winner = self.engine.dismiss()?;
        if !self.store.set_enabled(winner.id, false) {
            warn!(text = %winner.text, "winner was deleted before it could be hidden");
        }
        Some(winner)
    }

    /// Abandon an in-flight spin. Call when the front-end goes away.
    pub fn shutdown(&mut self) {
        self.engine.cancel_pending();
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.settings.language = Some(language);
        self.save_settings();
    }

    pub fn toggle_language(&mut self) -> Language {
        self.set_language(self.language.toggle());
        self.language
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.settings.theme = Some(theme);
        self.save_settings();
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggle());
        self.theme
    }

    /// Render parameters for the current state.
    pub fn view(&self) -> WheelView {
        WheelView::build(self.store.list(), &self.engine, &self.labels(), self.theme)
    }

    fn save_settings(&self) {
        if let Err(e) = self.settings.save(self.kv.as_ref()) {
            warn!(error = %e, "failed to persist settings");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RESOLVE_DELAY;
    use crate::state::{ITEMS_KEY, MemoryStore, SETTINGS_KEY};

    struct Offset(u32);

    impl RandomSource for Offset {
        fn offset(&mut self) -> u32 {
            self.0
        }
    }

    fn english() -> Config {
        Config {
            language: Some(Language::En),
            ..Config::default()
        }
    }

    fn session_with(kv: &MemoryStore, items: &str) -> WheelSession {
        kv.set(ITEMS_KEY, items).unwrap();
        WheelSession::open(Rc::new(kv.clone()), &english())
    }

    #[test]
    fn test_open_fresh_uses_defaults() {
        let kv = MemoryStore::new();
        let session = WheelSession::open(Rc::new(kv), &english());
        assert_eq!(session.store().items().len(), 6);
        assert_eq!(session.store().items()[0].text, "Item 1");
        assert_eq!(session.engine().rotation(), 0);
        assert_eq!(session.theme(), Theme::Dark);
    }

    #[test]
    fn test_settings_override_config() {
        let kv = MemoryStore::new();
        GlobalSettings {
            language: Some(Language::Es),
            theme: Some(Theme::Light),
            rotation: 720,
        }
        .save(&kv)
        .unwrap();
        let session = WheelSession::open(Rc::new(kv), &english());
        assert_eq!(session.language(), Language::Es);
        assert_eq!(session.theme(), Theme::Light);
        assert_eq!(session.engine().rotation(), 720);
    }

    #[test]
    fn test_defaults_scenario_disable_five_then_spin() {
        let kv = MemoryStore::new();
        let mut session = WheelSession::open(Rc::new(kv), &english());
        for index in 0..5 {
            session.store_mut().toggle(index);
        }
        let before = session.store().list().to_stored();

        let err = session.spin(&mut Offset(10), Instant::now()).unwrap_err();
        assert_eq!(err, SpinRejected::NotEnoughActive { active: 1 });
        let labels = session.labels();
        assert_eq!(
            crate::view::rejection_message(&err, &labels),
            Some("You need at least 2 active items to spin.")
        );
        assert_eq!(session.store().list().to_stored(), before);
        assert_eq!(session.engine().rotation(), 0);
        assert!(!session.engine().is_spinning());
    }

    #[test]
    fn test_spin_persists_rotation() {
        let kv = MemoryStore::new();
        let mut session = session_with(&kv, r#"[{"text":"A","enabled":true},{"text":"B","enabled":true}]"#);
        session.spin(&mut Offset(30), Instant::now()).unwrap();
        assert_eq!(GlobalSettings::load(&kv).rotation, 1830);

        let reopened = WheelSession::open(Rc::new(kv), &english());
        assert_eq!(reopened.engine().rotation(), 1830);
    }

    #[test]
    fn test_spin_after_huge_saved_rotation() {
        let kv = MemoryStore::new();
        kv.set(SETTINGS_KEY, r#"{"rotation":18446744073709551000}"#)
            .unwrap();
        let mut session = WheelSession::open(Rc::new(kv.clone()), &english());
        let ticket = session.spin(&mut Offset(10), Instant::now()).unwrap();
        assert!(ticket.target_angle > ticket.from_angle);
        assert_eq!(GlobalSettings::load(&kv).rotation, ticket.target_angle);
    }

    #[test]
    fn test_hide_winner_disables_only_that_option() {
        let kv = MemoryStore::new();
        let mut session = session_with(
            &kv,
            r#"[{"text":"Same","enabled":true},{"text":"Other","enabled":true},{"text":"Same","enabled":true}]"#,
        );
        let now = Instant::now();
        // Offset 0 lands on slice 0, the first "Same"
        session.spin(&mut Offset(0), now).unwrap();
        let winner = session.poll(now + RESOLVE_DELAY).unwrap();
        assert_eq!(winner.text, "Same");

        let hidden = session.hide_winner().unwrap();
        assert_eq!(hidden.id, winner.id);
        let items = session.store().items();
        assert!(!items[0].enabled);
        assert!(items[1].enabled);
        assert!(items[2].enabled);
        assert!(session.engine().winner().is_none());
    }

    #[test]
    fn test_dismiss_keeps_winner_enabled() {
        let kv = MemoryStore::new();
        let mut session = session_with(&kv, r#"[{"text":"A","enabled":true},{"text":"B","enabled":true}]"#);
        let now = Instant::now();
        session.spin(&mut Offset(0), now).unwrap();
        session.poll(now + RESOLVE_DELAY).unwrap();
        assert!(session.dismiss_winner().is_some());
        assert_eq!(session.store().list().active_count(), 2);
        assert!(session.view().winner.is_none());
    }

    #[test]
    fn test_hide_winner_without_winner_is_noop() {
        let kv = MemoryStore::new();
        let mut session = session_with(&kv, r#"[{"text":"A","enabled":true},{"text":"B","enabled":true}]"#);
        assert!(session.hide_winner().is_none());
        assert_eq!(session.store().list().active_count(), 2);
    }

    #[test]
    fn test_winner_deleted_mid_spin_can_still_be_dismissed() {
        let kv = MemoryStore::new();
        let mut session = session_with(&kv, r#"[{"text":"A","enabled":true},{"text":"B","enabled":true}]"#);
        let now = Instant::now();
        session.spin(&mut Offset(0), now).unwrap();
        session.store_mut().delete(0);
        let winner = session.poll(now + RESOLVE_DELAY).unwrap();
        assert_eq!(winner.text, "A");
        assert!(session.hide_winner().is_some());
        assert_eq!(session.store().items().len(), 1);
        assert!(session.store().items()[0].enabled);
    }

    #[test]
    fn test_toggle_language_and_theme_persist() {
        let kv = MemoryStore::new();
        let mut session = WheelSession::open(Rc::new(kv.clone()), &english());
        assert_eq!(session.toggle_language(), Language::Es);
        assert_eq!(session.toggle_theme(), Theme::Light);
        let settings = GlobalSettings::load(&kv);
        assert_eq!(settings.language, Some(Language::Es));
        assert_eq!(settings.theme, Some(Theme::Light));
    }

    #[test]
    fn test_shutdown_cancels_in_flight_spin() {
        let kv = MemoryStore::new();
        let mut session = session_with(&kv, r#"[{"text":"A","enabled":true},{"text":"B","enabled":true}]"#);
        let now = Instant::now();
        session.spin(&mut Offset(0), now).unwrap();
        session.shutdown();
        assert!(session.poll(now + RESOLVE_DELAY).is_none());
        assert!(!session.engine().is_spinning());
    }
}
