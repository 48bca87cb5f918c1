use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io;
use std::rc::Rc;
use tracing::{debug, warn};

use namewheel::cli::{Cli, Command};
use namewheel::command;
use namewheel::config::Config;
use namewheel::logger;
use namewheel::session::WheelSession;
use namewheel::state::{KeyValueStore, MemoryStore, StateStore, default_state_dir};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Command::Completions { shell }) = cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())?;

    let mut _log_guard = None;
    let kv: Rc<dyn KeyValueStore> = if cli.ephemeral {
        Rc::new(MemoryStore::new())
    } else {
        let state_dir = match &config.state_dir {
            Some(dir) => dir.clone(),
            None => default_state_dir()?,
        };
        // Logging is best effort; the wheel works without it
        match logger::init(&state_dir) {
            Ok(guard) => _log_guard = Some(guard),
            Err(e) => eprintln!("namewheel: logging disabled: {e:#}"),
        }
        Rc::new(StateStore::with_path(state_dir)?)
    };
    debug!(ephemeral = cli.ephemeral, "main:start");

    let mut session = WheelSession::open(kv, &config);

    let result = match cli.command {
        None | Some(Command::Dashboard) => command::dashboard::run(&mut session),
        Some(Command::List) => command::list::run(&session),
        Some(Command::Add { text }) => command::edit::add(&mut session, &text),
        Some(Command::Remove { index }) => command::edit::remove(&mut session, index),
        Some(Command::Toggle { index }) => command::edit::toggle(&mut session, index),
        Some(Command::Reactivate) => command::edit::reactivate(&mut session),
        Some(Command::Spin { hide, seed }) => command::spin::run(&mut session, hide, seed),
        Some(Command::Svg { output }) => command::svg::run(&session, output.as_deref()),
        Some(Command::Lang { language }) => command::prefs::language(&mut session, language),
        Some(Command::Theme { theme }) => command::prefs::theme(&mut session, theme),
        Some(Command::Completions { .. }) => Ok(()),
    };
    if let Err(e) = &result {
        warn!(error = %e, "command failed");
    }
    result
}
