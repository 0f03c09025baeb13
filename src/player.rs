//! Avatar movement
//!
//! Fixed-step keyboard movement: each pressed axis adds a full step,
//! so diagonal movement is deliberately faster than cardinal movement
//! (preserved demo behavior, no normalization).

use crate::input::InputSample;

/// World units moved per pressed axis per tick.
pub const MOVE_STEP: f32 = 3.0;

/// The avatar's world position, driven directly by input. Collision
/// response is left to the physics space and not read back.
#[derive(Debug, Clone, Copy, Default)]
pub struct Player {
    pub x: f32,
    pub y: f32,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one tick of movement from an input sample.
    pub fn update(&mut self, input: &InputSample) {
        if input.right {
            self.x += MOVE_STEP;
        }
        if input.left {
            self.x -= MOVE_STEP;
        }
        if input.up {
            self.y -= MOVE_STEP;
        }
        if input.down {
            self.y += MOVE_STEP;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_axis_step() {
        let mut p = Player::new();
        let input = InputSample {
            right: true,
            ..Default::default()
        };
        p.update(&input);
        assert_eq!((p.x, p.y), (3.0, 0.0));
    }

    #[test]
    fn test_unnormalized_diagonal() {
        let mut p = Player::new();
        let input = InputSample {
            right: true,
            up: true,
            ..Default::default()
        };
        p.update(&input);
        assert_eq!((p.x, p.y), (3.0, -3.0));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut p = Player::new();
        let input = InputSample {
            left: true,
            right: true,
            ..Default::default()
        };
        p.update(&input);
        assert_eq!((p.x, p.y), (0.0, 0.0));
    }

    #[test]
    fn test_idle_tick_is_noop() {
        let mut p = Player { x: 5.0, y: -2.0 };
        p.update(&InputSample::default());
        assert_eq!((p.x, p.y), (5.0, -2.0));
    }
}
