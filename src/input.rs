//! Input sampling
//!
//! All per-tick input is captured into one plain-data sample at the
//! start of update, so camera and avatar updates are deterministic
//! functions of the sample and stay unit-testable off-window.

use macroquad::prelude::*;

/// Everything the update phase reads from the player, sampled once
/// per tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSample {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub zoom_in: bool,
    pub zoom_out: bool,
    /// Vertical scroll wheel delta this tick.
    pub wheel: f32,
    /// Edge-triggered level regeneration request.
    pub regenerate: bool,
    pub cursor: (f32, f32),
}

impl InputSample {
    /// Poll the current keyboard/mouse state. Arrows and WASD are
    /// interchangeable; E/PageUp zoom in, C/PageDown zoom out.
    pub fn poll() -> Self {
        Self {
            left: is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
            right: is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
            up: is_key_down(KeyCode::Up) || is_key_down(KeyCode::W),
            down: is_key_down(KeyCode::Down) || is_key_down(KeyCode::S),
            zoom_in: is_key_down(KeyCode::E) || is_key_down(KeyCode::PageUp),
            zoom_out: is_key_down(KeyCode::C) || is_key_down(KeyCode::PageDown),
            wheel: mouse_wheel().1,
            regenerate: is_key_pressed(KeyCode::R),
            cursor: mouse_position(),
        }
    }
}
