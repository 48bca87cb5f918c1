//! Option list mutations: add, remove, toggle, reactivate.

use anyhow::{Result, bail};

use crate::options::{MAX_OPTIONS, MAX_TEXT_CHARS};
use crate::session::WheelSession;

/// Convert a 1-based position from the command line into a list index.
fn resolve_index(session: &WheelSession, position: usize) -> Result<usize> {
    let len = session.store().items().len();
    if position == 0 || position > len {
        bail!(
            "No option at position {} (the list has {} option{}). Use 'namewheel list' to see them.",
            position,
            len,
            if len == 1 { "" } else { "s" }
        );
    }
    Ok(position - 1)
}

pub fn add(session: &mut WheelSession, words: &[String]) -> Result<()> {
    let text = words.join(" ");
    if text.trim().is_empty() {
        println!("! Option text is empty, nothing added");
        return Ok(());
    }
    if session.store().list().is_full() {
        println!("! The wheel already has {MAX_OPTIONS} options, remove one first");
        return Ok(());
    }

    let Some(id) = session.store_mut().add(&text) else {
        println!("! Option was not added");
        return Ok(());
    };
    let added = session
        .store()
        .items()
        .iter()
        .find(|item| item.id == id)
        .map(|item| item.text.clone())
        .unwrap_or_default();

    if text.trim().chars().count() > MAX_TEXT_CHARS {
        println!("! Text cut to {MAX_TEXT_CHARS} characters");
    }
    println!("✓ Added '{}'", added);
    Ok(())
}

pub fn remove(session: &mut WheelSession, position: usize) -> Result<()> {
    let index = resolve_index(session, position)?;
    if let Some(removed) = session.store_mut().delete(index) {
        println!("✓ Removed '{}'", removed.text);
    }
    Ok(())
}

pub fn toggle(session: &mut WheelSession, position: usize) -> Result<()> {
    let index = resolve_index(session, position)?;
    if let Some(enabled) = session.store_mut().toggle(index) {
        let text = &session.store().items()[index].text;
        if enabled {
            println!("✓ '{}' is back on the wheel", text);
        } else {
            println!("✓ '{}' is hidden", text);
        }
    }
    Ok(())
}

pub fn reactivate(session: &mut WheelSession) -> Result<()> {
    match session.store_mut().reactivate_all() {
        0 => println!("Nothing was hidden"),
        1 => println!("✓ Reactivated 1 option"),
        n => println!("✓ Reactivated {} options", n),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::state::MemoryStore;
    use std::rc::Rc;

    fn session() -> WheelSession {
        WheelSession::open(Rc::new(MemoryStore::new()), &Config::default())
    }

    #[test]
    fn test_resolve_index_is_one_based() {
        let session = session();
        assert_eq!(resolve_index(&session, 1).unwrap(), 0);
        assert_eq!(resolve_index(&session, 6).unwrap(), 5);
    }

    #[test]
    fn test_resolve_index_rejects_out_of_range() {
        let session = session();
        assert!(resolve_index(&session, 0).is_err());
        let err = resolve_index(&session, 7).unwrap_err();
        assert!(err.to_string().contains("has 6 options"));
    }

    #[test]
    fn test_add_ignores_blank() {
        let mut session = session();
        add(&mut session, &["   ".to_string()]).unwrap();
        assert_eq!(session.store().items().len(), 6);
    }

    #[test]
    fn test_add_ignores_when_full() {
        let mut session = session();
        for n in 0..(MAX_OPTIONS - 6) {
            add(&mut session, &[format!("extra {n}")]).unwrap();
        }
        add(&mut session, &["one more".to_string()]).unwrap();
        assert_eq!(session.store().items().len(), MAX_OPTIONS);
    }

    #[test]
    fn test_remove_and_toggle_by_position() {
        let mut session = session();
        toggle(&mut session, 2).unwrap();
        assert!(!session.store().items()[1].enabled);
        remove(&mut session, 1).unwrap();
        assert_eq!(session.store().items().len(), 5);
        assert!(!session.store().items()[0].enabled);
        reactivate(&mut session).unwrap();
        assert!(session.store().items()[0].enabled);
    }
}
