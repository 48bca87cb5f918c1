use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::session::WheelSession;
use crate::svg;

pub fn run(session: &WheelSession, output: Option<&Path>) -> Result<()> {
    let document = svg::render(&session.view())?;
    match output {
        Some(path) => {
            fs::write(path, document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("✓ Wrote {}", path.display());
        }
        None => print!("{document}"),
    }
    Ok(())
}
