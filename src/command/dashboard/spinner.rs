//! Spinner animation frames shared by the dashboard and `namewheel spin`.

use std::time::Duration;

/// Braille spinner frames for subtle loading animation
pub const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// How long each spinner frame stays on screen
pub const SPINNER_FRAME_TIME: Duration = Duration::from_millis(80);

/// Frame to show `elapsed` into an animation.
pub fn spinner_frame(elapsed: Duration) -> char {
    let step = (elapsed.as_millis() / SPINNER_FRAME_TIME.as_millis()) as usize;
    SPINNER_FRAMES[step % SPINNER_FRAMES.len()]
}
