//! Language and theme switches.

use anyhow::Result;

use crate::i18n::Language;
use crate::session::WheelSession;
use crate::theme::Theme;

pub fn language(session: &mut WheelSession, language: Option<Language>) -> Result<()> {
    let language = match language {
        Some(language) => {
            session.set_language(language);
            language
        }
        None => session.toggle_language(),
    };
    println!("✓ Language: {}", language.code());
    Ok(())
}

pub fn theme(session: &mut WheelSession, theme: Option<Theme>) -> Result<()> {
    let theme = match theme {
        Some(theme) => {
            session.set_theme(theme);
            theme
        }
        None => session.toggle_theme(),
    };
    println!("✓ Theme: {}", theme.as_str());
    Ok(())
}
