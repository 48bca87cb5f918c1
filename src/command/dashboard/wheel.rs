//! The wheel drawn on a braille canvas.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        Widget,
        canvas::{Canvas, Circle, Context, Line as CanvasLine, Points},
    },
};

use crate::geometry::{Point, SlicePath, point_at};
use crate::theme::{TerminalPalette, hex_color};
use crate::view::SliceView;

/// Canvas extent on each side of the hub, leaving room for the pointer.
const BOUNDS: f64 = 1.2;

/// Radius at which labels are centered.
const LABEL_RADIUS: f64 = 0.62;

/// Rings of dots used to shade each slice.
const SHADE_RADII: [f64; 8] = [0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];

pub struct WheelWidget<'a> {
    slices: &'a [SliceView],
    /// Rotation currently on screen, in degrees (may be mid-animation)
    rotation: f64,
    palette: TerminalPalette,
}

impl<'a> WheelWidget<'a> {
    pub fn new(slices: &'a [SliceView], rotation: f64, palette: TerminalPalette) -> Self {
        Self {
            slices,
            rotation,
            palette,
        }
    }
}

/// Screen point (y down) to canvas coordinates (y up).
fn to_canvas(p: Point) -> (f64, f64) {
    (p.x, -p.y)
}

/// Sample the arc between two turn positions on the rotated wheel.
fn arc_points(start_turn: f64, end_turn: f64, radius: f64, rotation: f64) -> Vec<(f64, f64)> {
    let steps = (((end_turn - start_turn) * 240.0).ceil() as usize).max(8);
    (0..=steps)
        .map(|k| {
            let t = start_turn + (end_turn - start_turn) * k as f64 / steps as f64;
            to_canvas(point_at(t - 0.25).rotated(rotation).scaled(radius))
        })
        .collect()
}

fn paint_slices(ctx: &mut Context<'_>, slices: &[SliceView], rotation: f64) {
    for slice in slices {
        let color = hex_color(slice.fill);
        let (start_turn, end_turn) = match slice.path {
            SlicePath::FullCircle => (0.0, 1.0),
            SlicePath::Sector {
                start_turn,
                end_turn,
                ..
            } => (start_turn, end_turn),
        };
        for radius in SHADE_RADII {
            let coords = arc_points(start_turn, end_turn, radius, rotation);
            ctx.draw(&Points {
                coords: &coords,
                color,
            });
        }
        if let SlicePath::Sector { start, .. } = slice.path {
            let (x, y) = to_canvas(start.rotated(rotation));
            ctx.draw(&CanvasLine::new(0.0, 0.0, x, y, Color::Gray));
        }
    }
}

impl Widget for WheelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Canvas units covered by one terminal column, to center labels
        let column_width = 2.0 * BOUNDS / f64::from(area.width.max(1));
        let Self {
            slices,
            rotation,
            palette,
        } = self;

        Canvas::default()
            .marker(Marker::Braille)
            .background_color(palette.bg)
            .x_bounds([-BOUNDS, BOUNDS])
            .y_bounds([-BOUNDS, BOUNDS])
            .paint(move |ctx| {
                paint_slices(ctx, slices, rotation);
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: 1.0,
                    color: palette.fg,
                });
                ctx.layer();
                for slice in slices {
                    let anchor = Point {
                        x: 0.0,
                        y: -LABEL_RADIUS,
                    }
                    .rotated(slice.label_rotation + rotation);
                    let (x, y) = to_canvas(anchor);
                    let half = slice.label.chars().count() as f64 * column_width / 2.0;
                    ctx.print(
                        x - half,
                        y,
                        Span::styled(slice.label.clone(), Style::default().fg(palette.fg)),
                    );
                }
                ctx.print(
                    -column_width / 2.0,
                    1.1,
                    Span::styled("▼", palette.accent_style()),
                );
            })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_points_start_at_top_without_rotation() {
        let points = arc_points(0.0, 0.25, 1.0, 0.0);
        let (x, y) = points[0];
        assert!(x.abs() < 1e-9);
        assert!((y - 1.0).abs() < 1e-9);
        let (x, y) = *points.last().unwrap();
        assert!((x - 1.0).abs() < 1e-9);
        assert!(y.abs() < 1e-9);
    }

    #[test]
    fn test_arc_points_follow_rotation() {
        // A quarter-turn clockwise moves the top of the wheel to 3 o'clock
        let (x, y) = arc_points(0.0, 0.5, 1.0, 90.0)[0];
        assert!((x - 1.0).abs() < 1e-9);
        assert!(y.abs() < 1e-9);
    }

    #[test]
    fn test_arc_points_minimum_density() {
        assert_eq!(arc_points(0.0, 0.01, 1.0, 0.0).len(), 9);
    }
}
