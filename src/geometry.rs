//! Pie-slice layout of the wheel on the unit circle.
//!
//! Angles are measured in turns (1.0 = full circle) in screen coordinates
//! (y grows downwards), shifted by a quarter turn so slice 0 begins at
//! 12 o'clock and slices advance clockwise.

use std::borrow::Cow;
use std::f64::consts::TAU;
use std::fmt::Write;

/// Quarter-turn shift that moves the zero angle to 12 o'clock.
const TOP_OFFSET_TURNS: f64 = 0.25;

/// Labels longer than this are shown truncated.
pub const LABEL_MAX_CHARS: usize = 20;

/// SVG path for a lone option: two semicircle arcs.
const FULL_CIRCLE_PATH: &str = "M 1 0 A 1 1 0 1 1 -1 0 A 1 1 0 1 1 1 0";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Rotate clockwise (on screen) by `degrees` around the origin.
    pub fn rotated(self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

/// Point on the unit circle `turns` around from 3 o'clock.
pub fn point_at(turns: f64) -> Point {
    let (sin, cos) = (TAU * turns).sin_cos();
    Point { x: cos, y: sin }
}

/// Outline of one slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlicePath {
    /// The only active option owns the whole wheel
    FullCircle,
    Sector {
        /// Start of the slice in turns, before the 12 o'clock shift
        start_turn: f64,
        end_turn: f64,
        start: Point,
        end: Point,
        /// Set when the arc spans more than half the circle
        large_arc: bool,
    },
}

impl SlicePath {
    /// Angular size of the slice in degrees.
    pub fn span_degrees(&self) -> f64 {
        match self {
            SlicePath::FullCircle => 360.0,
            SlicePath::Sector {
                start_turn,
                end_turn,
                ..
            } => (end_turn - start_turn) * 360.0,
        }
    }

    /// SVG path data in the `viewBox="-1 -1 2 2"` coordinate space.
    pub fn to_svg(&self) -> String {
        match self {
            SlicePath::FullCircle => FULL_CIRCLE_PATH.to_string(),
            SlicePath::Sector {
                start,
                end,
                large_arc,
                ..
            } => {
                let mut d = String::from("M 0 0 L ");
                let _ = write!(
                    d,
                    "{} {} A 1 1 0 {} 1 {} {} L 0 0",
                    coord(start.x),
                    coord(start.y),
                    u8::from(*large_arc),
                    coord(end.x),
                    coord(end.y)
                );
                d
            }
        }
    }
}

/// Outline of slice `index` out of `total` active options.
///
/// A wheel with one (or, degenerately, zero) options is a full circle.
pub fn slice_path(index: usize, total: usize) -> SlicePath {
    if total <= 1 {
        return SlicePath::FullCircle;
    }
    let start_turn = index as f64 / total as f64;
    let end_turn = (index + 1) as f64 / total as f64;
    SlicePath::Sector {
        start_turn,
        end_turn,
        start: point_at(start_turn - TOP_OFFSET_TURNS),
        end: point_at(end_turn - TOP_OFFSET_TURNS),
        large_arc: end_turn - start_turn > 0.5,
    }
}

/// Rotation in degrees that centers the label of slice `index` in its wedge.
pub fn label_rotation(index: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let angle = 360.0 / total as f64;
    angle * index as f64 + angle / 2.0
}

/// Display form of an option label. Never alters the stored text.
pub fn display_label(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(LABEL_MAX_CHARS) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

/// Format a coordinate compactly, folding `-0` into `0`.
fn coord(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_single_option_is_full_circle() {
        let path = slice_path(0, 1);
        assert_eq!(path, SlicePath::FullCircle);
        assert_eq!(path.span_degrees(), 360.0);
        assert_eq!(path.to_svg(), "M 1 0 A 1 1 0 1 1 -1 0 A 1 1 0 1 1 1 0");
    }

    #[test]
    fn test_first_slice_starts_at_top() {
        let SlicePath::Sector { start, .. } = slice_path(0, 4) else {
            panic!("expected a sector");
        };
        assert_close(start.x, 0.0);
        assert_close(start.y, -1.0);
    }

    #[test]
    fn test_quarter_slice_ends_at_three_oclock() {
        let SlicePath::Sector { end, large_arc, .. } = slice_path(0, 4) else {
            panic!("expected a sector");
        };
        assert_close(end.x, 1.0);
        assert_close(end.y, 0.0);
        assert!(!large_arc);
    }

    #[test]
    fn test_spans_sum_to_full_turn() {
        for total in 1..=40 {
            let sum: f64 = (0..total).map(|i| slice_path(i, total).span_degrees()).sum();
            assert_close(sum, 360.0);
        }
    }

    #[test]
    fn test_large_arc_only_above_half_turn() {
        for total in 2..=40 {
            for index in 0..total {
                if let SlicePath::Sector { large_arc, .. } = slice_path(index, total) {
                    assert_eq!(large_arc, slice_path(index, total).span_degrees() > 180.0);
                    assert!(!large_arc, "total {total} never exceeds half a turn");
                }
            }
        }
    }

    #[test]
    fn test_svg_path_for_half() {
        assert_eq!(slice_path(0, 2).to_svg(), "M 0 0 L 0 -1 A 1 1 0 0 1 0 1 L 0 0");
        assert_eq!(slice_path(1, 2).to_svg(), "M 0 0 L 0 1 A 1 1 0 0 1 0 -1 L 0 0");
    }

    #[test]
    fn test_label_rotation_centers_in_wedge() {
        assert_close(label_rotation(0, 4), 45.0);
        assert_close(label_rotation(3, 4), 315.0);
        assert_close(label_rotation(0, 1), 180.0);
    }

    #[test]
    fn test_display_label_truncates_long_text() {
        let text = "abcdefghijklmnopqrstuvwxyz";
        assert_eq!(display_label(text), "abcdefghijklmnopqrst...");
        assert_eq!(text.len(), 26);
    }

    #[test]
    fn test_display_label_keeps_short_text() {
        assert!(matches!(display_label("Alice"), Cow::Borrowed("Alice")));
        let exactly = "x".repeat(LABEL_MAX_CHARS);
        assert_eq!(display_label(&exactly), exactly);
    }

    #[test]
    fn test_display_label_counts_chars() {
        let text = "ñ".repeat(25);
        assert_eq!(display_label(&text), format!("{}...", "ñ".repeat(20)));
    }

    #[test]
    fn test_point_rotation_is_clockwise_on_screen() {
        let top = Point { x: 0.0, y: -1.0 };
        let right = top.rotated(90.0);
        assert_close(right.x, 1.0);
        assert_close(right.y, 0.0);
    }
}
