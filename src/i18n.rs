//! Static label tables and language selection.
//!
//! Nothing outside this module spells out user-facing text. Front-ends and the
//! presentation binding go through [`LabelLookup`], which makes it possible to
//! swap the table in tests or embed the core somewhere with its own strings.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    /// Switch to the other language
    pub fn toggle(self) -> Self {
        match self {
            Language::Es => Language::En,
            Language::En => Language::Es,
        }
    }

    /// Short code shown on the language button
    pub fn code(&self) -> &'static str {
        match self {
            Language::Es => "ES",
            Language::En => "EN",
        }
    }

    /// Pick a language from a locale string such as `es_MX.UTF-8`.
    pub fn from_locale(locale: &str) -> Self {
        if locale.to_lowercase().starts_with("es") {
            Language::Es
        } else {
            Language::En
        }
    }

    /// Detect the language from the environment.
    ///
    /// Checks LC_ALL, then LANG. Falls back to Spanish when neither is set.
    pub fn detect() -> Self {
        ["LC_ALL", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|v| !v.is_empty())
            .map(|v| Self::from_locale(&v))
            .unwrap_or_default()
    }
}

/// Every user-facing string the wheel needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKey {
    WinnerTitle,
    HideItem,
    Close,
    SpinAlert,
    ResetButton,
    OptionsTitle,
    Placeholder,
    DeleteButton,
    LimitMessage,
    ToggleTitle,
    DeleteTitle,
    HideWinnerTitle,
    CloseWinnerTitle,
    ThemeLabelDark,
    ThemeLabelLight,
    LanguageLabel,
    DefaultItem,
    Spinning,
}

/// Source of user-facing strings.
pub trait LabelLookup {
    fn label(&self, key: LabelKey) -> &str;
}

/// Built-in string table for one [`Language`].
#[derive(Debug, Clone, Copy)]
pub struct StaticLabels {
    language: Language,
}

impl StaticLabels {
    pub fn new(language: Language) -> Self {
        Self { language }
    }
}

impl LabelLookup for StaticLabels {
    fn label(&self, key: LabelKey) -> &str {
        match self.language {
            Language::Es => spanish(key),
            Language::En => english(key),
        }
    }
}

fn spanish(key: LabelKey) -> &'static str {
    match key {
        LabelKey::WinnerTitle => "🎉 ¡Ganador!",
        LabelKey::HideItem => "Ocultar elemento",
        LabelKey::Close => "Cerrar",
        LabelKey::SpinAlert => "Necesitas al menos 2 elementos activos para girar.",
        LabelKey::ResetButton => "🔄 Reactivar ocultos",
        LabelKey::OptionsTitle => "Opciones",
        LabelKey::Placeholder => "Nueva opción...",
        LabelKey::DeleteButton => "Eliminar",
        LabelKey::LimitMessage => "activos / total",
        LabelKey::ToggleTitle => "Clic para activar/desactivar",
        LabelKey::DeleteTitle => "Eliminar definitivamente",
        LabelKey::HideWinnerTitle => "Ocultar de la ruleta temporalmente",
        LabelKey::CloseWinnerTitle => "Cerrar popup ganador",
        LabelKey::ThemeLabelDark => "Cambiar a modo claro",
        LabelKey::ThemeLabelLight => "Cambiar a modo oscuro",
        LabelKey::LanguageLabel => "Cambiar idioma",
        LabelKey::DefaultItem => "Elemento",
        LabelKey::Spinning => "Girando...",
    }
}

fn english(key: LabelKey) -> &'static str {
    match key {
        LabelKey::WinnerTitle => "🎉 Winner!",
        LabelKey::HideItem => "Hide element",
        LabelKey::Close => "Close",
        LabelKey::SpinAlert => "You need at least 2 active items to spin.",
        LabelKey::ResetButton => "🔄 Reactivate hidden",
        LabelKey::OptionsTitle => "Options",
        LabelKey::Placeholder => "New option...",
        LabelKey::DeleteButton => "Delete",
        LabelKey::LimitMessage => "active / total",
        LabelKey::ToggleTitle => "Click to toggle",
        LabelKey::DeleteTitle => "Delete permanently",
        LabelKey::HideWinnerTitle => "Hide from wheel temporarily",
        LabelKey::CloseWinnerTitle => "Close winner popup",
        LabelKey::ThemeLabelDark => "Switch to light mode",
        LabelKey::ThemeLabelLight => "Switch to dark mode",
        LabelKey::LanguageLabel => "Switch language",
        LabelKey::DefaultItem => "Item",
        LabelKey::Spinning => "Spinning...",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_locale() {
        assert_eq!(Language::from_locale("es_ES.UTF-8"), Language::Es);
        assert_eq!(Language::from_locale("es-MX"), Language::Es);
        assert_eq!(Language::from_locale("en_US.UTF-8"), Language::En);
        assert_eq!(Language::from_locale("C"), Language::En);
    }

    #[test]
    fn test_toggle_language() {
        assert_eq!(Language::Es.toggle(), Language::En);
        assert_eq!(Language::En.toggle().toggle(), Language::En);
    }

    #[test]
    fn test_labels_differ_by_language() {
        let es = StaticLabels::new(Language::Es);
        let en = StaticLabels::new(Language::En);
        assert_eq!(es.label(LabelKey::Close), "Cerrar");
        assert_eq!(en.label(LabelKey::Close), "Close");
        assert_ne!(es.label(LabelKey::SpinAlert), en.label(LabelKey::SpinAlert));
    }

    #[test]
    fn test_language_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), r#""en""#);
        let lang: Language = serde_json::from_str(r#""es""#).unwrap();
        assert_eq!(lang, Language::Es);
    }
}
