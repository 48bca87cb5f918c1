//! SVG export of a [`WheelView`].

use anyhow::{Context, Result};
use minijinja::{AutoEscape, Environment, context};

use crate::view::WheelView;

const WHEEL_TEMPLATE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="-1.2 -1.2 2.4 2.4" data-theme="{{ view.theme }}">
  <style>
    svg { --background-color: {{ view.css.background }}; --text-color: {{ view.css.text }}; }
    text { font-family: sans-serif; font-size: 0.08px; fill: #1e1e24; }
  </style>
  <rect x="-1.2" y="-1.2" width="2.4" height="2.4" fill="var(--background-color)"/>
  <g transform="rotate({{ view.rotation }})">
{%- for slice in view.slices %}
    <path d="{{ slice.svg_path }}" fill="{{ slice.fill }}"/>
{%- endfor %}
{%- for slice in view.slices %}
    <text transform="rotate({{ slice.label_rotation }}) translate(0 -0.62)" text-anchor="middle" dominant-baseline="middle">{{ slice.label }}</text>
{%- endfor %}
  </g>
  <polygon points="-0.07,-1.12 0.07,-1.12 0,-0.96" fill="{{ view.css.pointer }}"/>
{%- if view.winner %}
  <text x="0" y="1.14" text-anchor="middle" style="fill: var(--text-color)">{{ view.winner.title }} {{ view.winner.text }}</text>
{%- endif %}
</svg>
"#;

/// Render the wheel as a standalone SVG document.
pub fn render(view: &WheelView) -> Result<String> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.add_template("wheel.svg", WHEEL_TEMPLATE)
        .context("Failed to parse wheel template")?;
    let template = env.get_template("wheel.svg")?;
    template
        .render(context! { view => view })
        .context("Failed to render wheel SVG")
}
