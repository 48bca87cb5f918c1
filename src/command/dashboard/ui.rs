//! Dashboard layout and rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};
use std::time::Instant;

use super::app::{App, InputMode};
use super::spinner::spinner_frame;
use super::wheel::WheelWidget;
use crate::geometry::display_label;
use crate::i18n::{LabelKey, LabelLookup};
use crate::theme::TerminalPalette;
use crate::view::{WheelView, animated_rotation};

pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let session = &*app.session;
    let palette = session.theme().palette();
    let labels = session.labels();
    let view = session.view();

    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base_style()), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Wheel + sidebar
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Footer shortcuts
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(38)])
        .split(rows[0]);

    render_wheel(frame, app, &view, &palette, columns[0], now);
    render_sidebar(frame, app, &view, &labels, &palette, columns[1]);
    render_status(frame, app, &view, &palette, rows[1], now);
    render_footer(frame, &labels, &palette, rows[2]);
}

/// Largest rect with a 2:1 cell ratio (so the circle looks round) centered
/// in `area`.
fn wheel_area(area: Rect) -> Rect {
    let height = area.height.min(area.width / 2).max(1);
    let width = (height * 2).min(area.width);
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

fn render_wheel(
    frame: &mut Frame,
    app: &App,
    view: &WheelView,
    palette: &TerminalPalette,
    area: Rect,
    now: Instant,
) {
    let rotation = match app.session.engine().pending() {
        Some(pending) => animated_rotation(
            pending.from_angle,
            pending.target_angle,
            pending.timer().progress(now),
        ),
        None => view.rotation as f64,
    };

    let mut inner = area;
    if let Some(banner) = &view.winner {
        let [banner_area, rest] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(5)]).areas(area);
        let text = Line::from(vec![
            Span::styled(format!("{} ", banner.title), palette.accent_style()),
            Span::styled(banner.text.clone(), palette.accent_style()),
            Span::styled(
                format!("   [h] {}  [c] {}", banner.hide_label, banner.close_label),
                Style::default().fg(palette.muted),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(text).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(palette.accent)),
            ),
            banner_area,
        );
        inner = rest;
    }

    if view.slices.is_empty() {
        return;
    }
    frame.render_widget(
        WheelWidget::new(&view.slices, rotation % 360.0, *palette),
        wheel_area(inner),
    );
}

fn render_sidebar(
    frame: &mut Frame,
    app: &App,
    view: &WheelView,
    labels: &dyn LabelLookup,
    palette: &TerminalPalette,
    area: Rect,
) {
    let [input_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let input = match &app.mode {
        InputMode::Adding(buffer) => Line::from(vec![
            Span::styled(buffer.clone(), palette.base_style()),
            Span::styled("▏", palette.accent_style()),
        ]),
        InputMode::Normal => Line::from(Span::styled(
            labels.label(LabelKey::Placeholder).to_string(),
            Style::default().fg(palette.muted),
        )),
    };
    frame.render_widget(
        Paragraph::new(input).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(format!(" {} [a] ", labels.label(LabelKey::OptionsTitle))),
        ),
        input_area,
    );

    let items: Vec<ListItem> = app
        .session
        .store()
        .items()
        .iter()
        .map(|item| {
            let style = if item.enabled {
                palette.base_style()
            } else {
                palette.muted_style()
            };
            ListItem::new(Line::from(Span::styled(
                display_label(&item.text).into_owned(),
                style,
            )))
        })
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(format!(" {} [t] ", labels.label(LabelKey::ToggleTitle))),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("› ");
    let mut state = ListState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(list, list_area, &mut state);

    frame.render_widget(
        Paragraph::new(view.counter.clone())
            .alignment(Alignment::Right)
            .style(Style::default().fg(palette.muted)),
        footer_area,
    );
}

fn render_status(
    frame: &mut Frame,
    app: &App,
    view: &WheelView,
    palette: &TerminalPalette,
    area: Rect,
    now: Instant,
) {
    let line = if let Some((warning, _)) = &app.warning {
        Line::from(Span::styled(warning.clone(), palette.warning_style()))
    } else if view.spinning {
        let labels = app.session.labels();
        Line::from(Span::styled(
            format!(
                "{} {}",
                spinner_frame(now.duration_since(app.started)),
                labels.label(LabelKey::Spinning)
            ),
            palette.accent_style(),
        ))
    } else if let Some(reactivate) = &view.reactivate {
        Line::from(Span::styled(
            format!("[r] {}", reactivate.label),
            Style::default().fg(palette.fg),
        ))
    } else {
        Line::default()
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_footer(
    frame: &mut Frame,
    labels: &dyn LabelLookup,
    palette: &TerminalPalette,
    area: Rect,
) {
    let shortcuts = format!(
        "[space] spin  [a] add  [d] {}  [T] {}  [L] {}  [q] quit",
        labels.label(LabelKey::DeleteButton),
        labels.label(LabelKey::ThemeLabelDark),
        labels.label(LabelKey::LanguageLabel),
    );
    frame.render_widget(
        Paragraph::new(shortcuts).style(Style::default().fg(palette.muted)),
        area,
    );
}
