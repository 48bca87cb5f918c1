//! Dashboard state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::engine::{RandomSource, ThreadRandom};
use crate::options::MAX_TEXT_CHARS;
use crate::session::WheelSession;
use crate::view::rejection_message;

/// How long a warning stays in the status bar
const WARNING_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Typing a new option
    Adding(String),
}

pub struct App<'a> {
    pub session: &'a mut WheelSession,
    pub mode: InputMode,
    /// Selected row in the options sidebar
    pub selected: usize,
    pub warning: Option<(String, Instant)>,
    pub started: Instant,
    rng: Box<dyn RandomSource>,
    should_quit: bool,
}

impl<'a> App<'a> {
    pub fn new(session: &'a mut WheelSession) -> Self {
        Self::with_rng(session, Box::new(ThreadRandom))
    }

    pub fn with_rng(session: &'a mut WheelSession, rng: Box<dyn RandomSource>) -> Self {
        Self {
            session,
            mode: InputMode::Normal,
            selected: 0,
            warning: None,
            started: Instant::now(),
            rng,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Time left until the pending spin resolves, if one is running.
    pub fn until_resolution(&self, now: Instant) -> Option<Duration> {
        self.session
            .engine()
            .pending()
            .map(|pending| pending.timer().remaining(now))
    }

    /// Fire the deferred resolution and expire old warnings.
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(winner) = self.session.poll(now) {
            debug!(text = %winner.text, "dashboard:winner");
        }
        if self
            .warning
            .as_ref()
            .is_some_and(|(_, since)| now.duration_since(*since) >= WARNING_TTL)
        {
            self.warning = None;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        match &mut self.mode {
            InputMode::Adding(buffer) => match key.code {
                KeyCode::Enter => {
                    let text = std::mem::take(buffer);
                    self.mode = InputMode::Normal;
                    if self.session.store_mut().add(&text).is_some() {
                        self.selected = self.session.store().items().len() - 1;
                    }
                }
                KeyCode::Esc => self.mode = InputMode::Normal,
                KeyCode::Backspace => {
                    buffer.pop();
                }
                KeyCode::Char(c) if buffer.chars().count() < MAX_TEXT_CHARS => buffer.push(c),
                _ => {}
            },
            InputMode::Normal => self.handle_normal_key(key.code, now),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode, now: Instant) {
        let spinning = self.session.engine().is_spinning();
        let len = self.session.store().items().len();
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char(' ') | KeyCode::Char('s') => self.spin(now),
            KeyCode::Down | KeyCode::Char('j') if len > 0 => {
                self.selected = (self.selected + 1).min(len - 1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Enter | KeyCode::Char('t') if self.selected < len => {
                self.session.store_mut().toggle(self.selected);
            }
            KeyCode::Char('d') | KeyCode::Delete if self.selected < len => {
                self.session.store_mut().delete(self.selected);
                let len = self.session.store().items().len();
                self.selected = self.selected.min(len.saturating_sub(1));
            }
            KeyCode::Char('a') if !self.session.store().list().is_full() => {
                self.mode = InputMode::Adding(String::new());
            }
            KeyCode::Char('r') if !spinning => {
                self.session.store_mut().reactivate_all();
            }
            KeyCode::Char('h') => {
                self.session.hide_winner();
            }
            KeyCode::Char('c') | KeyCode::Esc => {
                self.session.dismiss_winner();
            }
            KeyCode::Char('T') => {
                self.session.toggle_theme();
            }
            KeyCode::Char('L') => {
                self.session.toggle_language();
            }
            _ => {}
        }
    }

    fn spin(&mut self, now: Instant) {
        if let Err(e) = self.session.spin(self.rng.as_mut(), now) {
            let labels = self.session.labels();
            if let Some(message) = rejection_message(&e, &labels) {
                self.warning = Some((message.to_string(), now));
            }
        }
    }
}
