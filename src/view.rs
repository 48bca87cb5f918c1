//! Render parameters derived from the option list and spin state.
//!
//! Nothing here decides anything; it only reshapes state for a front-end
//! (terminal UI, SVG export, plain text).

use serde::Serialize;

use crate::engine::{SpinEngine, SpinRejected};
use crate::geometry::{SlicePath, display_label, label_rotation, slice_path};
use crate::i18n::{LabelKey, LabelLookup};
use crate::options::{OptionList, WheelOption};
use crate::theme::{CssVars, Theme};

/// Slice fill colors, cycled by slice index.
pub const PALETTE: [&str; 4] = ["#3ac45a", "#f2de5c", "#c44a3a", "#3a7dc4"];

pub fn slice_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// One drawable wedge of the wheel.
#[derive(Debug, Clone, Serialize)]
pub struct SliceView {
    pub index: usize,
    #[serde(skip)]
    pub path: SlicePath,
    pub svg_path: String,
    pub fill: &'static str,
    /// Truncated display label
    pub label: String,
    /// Degrees clockwise from 12 o'clock to the middle of the wedge
    pub label_rotation: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WinnerBanner {
    pub title: String,
    pub text: String,
    pub hide_label: String,
    pub close_label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReactivateControl {
    pub hidden: usize,
    pub label: String,
}

/// Everything a front-end needs to draw one frame.
#[derive(Debug, Clone, Serialize)]
pub struct WheelView {
    /// Rotation transform in degrees
    pub rotation: u64,
    pub slices: Vec<SliceView>,
    pub winner: Option<WinnerBanner>,
    pub reactivate: Option<ReactivateControl>,
    /// "N active / total M"
    pub counter: String,
    pub theme: &'static str,
    pub css: CssVars,
    pub spinning: bool,
}

impl WheelView {
    pub fn build(
        list: &OptionList,
        engine: &SpinEngine,
        labels: &dyn LabelLookup,
        theme: Theme,
    ) -> Self {
        let spinning = engine.is_spinning();

        // Keep drawing the wheel the spin started with until it resolves
        let wheel: Vec<WheelOption> = match engine.pending() {
            Some(pending) => pending.snapshot().to_vec(),
            None => list.active(),
        };
        let slices = build_slices(&wheel);

        let winner = engine
            .winner()
            .filter(|_| !spinning)
            .map(|winner| WinnerBanner {
                title: labels.label(LabelKey::WinnerTitle).to_string(),
                text: winner.text.clone(),
                hide_label: labels.label(LabelKey::HideItem).to_string(),
                close_label: labels.label(LabelKey::Close).to_string(),
            });

        let hidden = list.hidden_count();
        let reactivate = (hidden > 0 && !spinning).then(|| ReactivateControl {
            hidden,
            label: format!("{} ({})", labels.label(LabelKey::ResetButton), hidden),
        });

        let counter = format!(
            "{} {} {}",
            list.active_count(),
            labels.label(LabelKey::LimitMessage),
            list.len()
        );

        Self {
            rotation: engine.rotation(),
            slices,
            winner,
            reactivate,
            counter,
            theme: theme.as_str(),
            css: theme.css_vars(),
            spinning,
        }
    }
}

fn build_slices(wheel: &[WheelOption]) -> Vec<SliceView> {
    let total = wheel.len();
    wheel
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let path = slice_path(index, total);
            SliceView {
                index,
                svg_path: path.to_svg(),
                path,
                fill: slice_color(index),
                label: display_label(&option.text).into_owned(),
                label_rotation: label_rotation(index, total),
            }
        })
        .collect()
}

/// User-facing warning for a refused spin, if the refusal deserves one.
///
/// A second click while already spinning is ignored without a message.
pub fn rejection_message<'a>(err: &SpinRejected, labels: &'a dyn LabelLookup) -> Option<&'a str> {
    match err {
        SpinRejected::NotEnoughActive { .. } => Some(labels.label(LabelKey::SpinAlert)),
        SpinRejected::AlreadySpinning => None,
    }
}

/// Cubic ease-out: fast start, gentle stop.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Rotation to draw `progress` of the way through a spin from `from` to `to`.
pub fn animated_rotation(from: u64, to: u64, progress: f64) -> f64 {
    let from = from as f64;
    from + (to as f64 - from) * ease_out_cubic(progress)
}
