use anyhow::Result;
use console::style;
use ratatui::style::Color;
use tabled::{
    Table, Tabled,
    settings::{Padding, Style, object::Columns},
};

use crate::geometry::display_label;
use crate::session::WheelSession;
use crate::theme::hex_color;
use crate::view::slice_color;

#[derive(Tabled)]
struct OptionRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "ON")]
    enabled: String,
    #[tabled(rename = "SLICE")]
    slice: String,
    #[tabled(rename = "OPTION")]
    text: String,
}

/// Colored block in the slice's palette color, using truecolor escapes.
fn swatch(slice: usize) -> String {
    match hex_color(slice_color(slice)) {
        Color::Rgb(r, g, b) => format!("\x1b[38;2;{r};{g};{b}m■\x1b[0m {}", slice + 1),
        _ => format!("■ {}", slice + 1),
    }
}

pub fn run(session: &WheelSession) -> Result<()> {
    let items = session.store().items();
    if items.is_empty() {
        println!("No options yet. Add one with: namewheel add <TEXT>");
        return Ok(());
    }

    let mut slice = 0;
    let rows: Vec<OptionRow> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let slice_cell = if item.enabled {
                let cell = swatch(slice);
                slice += 1;
                cell
            } else {
                "-".to_string()
            };
            OptionRow {
                position: index + 1,
                enabled: if item.enabled {
                    "✓".to_string()
                } else {
                    "·".to_string()
                },
                slice: slice_cell,
                text: if item.enabled {
                    display_label(&item.text).into_owned()
                } else {
                    style(display_label(&item.text)).dim().strikethrough().to_string()
                },
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::blank())
        .modify(Columns::new(0..4), Padding::new(0, 1, 0, 0));

    println!("{table}");
    println!();
    println!("{}", style(session.view().counter).dim());

    Ok(())
}
