//! Interactive terminal wheel.

mod app;
mod spinner;
mod ui;
mod wheel;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::info;

use crate::session::WheelSession;
use app::App;

pub use spinner::{SPINNER_FRAME_TIME, SPINNER_FRAMES};

/// Redraw interval while the wheel is animating
const FRAME_TIME: Duration = Duration::from_millis(33);

/// Poll interval when nothing is moving
const IDLE_TICK: Duration = Duration::from_millis(250);

pub fn run(session: &mut WheelSession) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    info!("dashboard:start");
    let result = run_app(&mut terminal, session);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // A spin still in flight is abandoned with the view
    session.shutdown();
    info!("dashboard:exit");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: &mut WheelSession,
) -> Result<()> {
    let mut app = App::new(session);
    loop {
        let now = Instant::now();
        terminal.draw(|frame| ui::draw(frame, &app, now))?;

        let timeout = match app.until_resolution(now) {
            Some(remaining) => remaining.min(FRAME_TIME),
            None => IDLE_TICK,
        };
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now());
        }
        if app.should_quit() {
            return Ok(());
        }
        app.on_tick(Instant::now());
    }
}
