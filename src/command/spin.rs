use anyhow::{Result, anyhow};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

use crate::command::dashboard::{SPINNER_FRAME_TIME, SPINNER_FRAMES};
use crate::engine::{RandomSource, SeededRandom, ThreadRandom};
use crate::i18n::{LabelKey, LabelLookup};
use crate::session::WheelSession;
use crate::view::rejection_message;

pub fn run(session: &mut WheelSession, hide: bool, seed: Option<u64>) -> Result<()> {
    let mut rng: Box<dyn RandomSource> = match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };
    let labels = session.labels();

    let ticket = match session.spin(rng.as_mut(), Instant::now()) {
        Ok(ticket) => ticket,
        Err(e) => match rejection_message(&e, &labels) {
            Some(message) => {
                println!("{} {}", style("!").yellow(), message);
                return Ok(());
            }
            None => return Err(anyhow!(e)),
        },
    };

    let spinner = ProgressBar::new_spinner();
    let frames: String = SPINNER_FRAMES.iter().collect();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?.tick_chars(&frames));
    spinner.set_message(labels.label(LabelKey::Spinning).to_string());
    spinner.enable_steady_tick(SPINNER_FRAME_TIME);

    // The resolution fires exactly once, when the delay has elapsed
    std::thread::sleep(ticket.due.saturating_duration_since(Instant::now()));
    let winner = session.poll(ticket.due);
    spinner.finish_and_clear();

    let winner = winner.ok_or_else(|| anyhow!("Spin did not resolve"))?;
    println!(
        "{} {}",
        labels.label(LabelKey::WinnerTitle),
        style(&winner.text).green().bold()
    );

    if hide {
        session.hide_winner();
        println!("✓ '{}' hidden from the wheel", winner.text);
    } else {
        session.dismiss_winner();
    }

    Ok(())
}
