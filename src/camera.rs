//! Camera pan/zoom state and the isometric projection
//!
//! Zoom eases toward a target by a fixed fraction of the remaining
//! gap each tick (an approximation of exponential approach; at very
//! large steps it is not a strict no-overshoot guarantee). Pan speed
//! scales inversely with zoom so screen-space speed stays constant.

use crate::input::InputSample;

/// Smallest allowed target zoom.
pub const ZOOM_MIN: f32 = 0.01;
/// Largest allowed target zoom.
pub const ZOOM_MAX: f32 = 100.0;
/// Zoom delta applied while a zoom key is held.
pub const ZOOM_KEY_STEP: f32 = 0.25;
/// Divisor turning a zoom delta into a proportional target change.
const ZOOM_RATE_DIVISOR: f32 = 7.0;
/// Fraction of the zoom gap closed per tick.
const ZOOM_SMOOTHING: f32 = 10.0;
/// Pan speed in world units per tick at zoom 1.
const PAN_SPEED: f32 = 7.0;

/// Camera pan/zoom state for the isometric view.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pan_x: f32,
    pan_y: f32,
    zoom: f32,
    target_zoom: f32,
}

impl Camera {
    pub fn new(zoom: f32) -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom,
            target_zoom: zoom,
        }
    }

    pub fn pan(&self) -> (f32, f32) {
        (self.pan_x, self.pan_y)
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn target_zoom(&self) -> f32 {
        self.target_zoom
    }

    /// Advance camera state one tick from an input sample, clamping
    /// pan to the world half-extents `(world_w, world_h)`.
    pub fn update(&mut self, input: &InputSample, world_w: f32, world_h: f32) {
        // Zoom keys override the wheel; wheel deltas are clamped to
        // one notch per tick.
        let delta = if input.zoom_out {
            -ZOOM_KEY_STEP
        } else if input.zoom_in {
            ZOOM_KEY_STEP
        } else {
            input.wheel.clamp(-1.0, 1.0)
        };

        self.target_zoom += delta * (self.target_zoom / ZOOM_RATE_DIVISOR);
        self.target_zoom = self.target_zoom.clamp(ZOOM_MIN, ZOOM_MAX);

        // Smooth zoom transition.
        if self.target_zoom > self.zoom {
            self.zoom += (self.target_zoom - self.zoom) / ZOOM_SMOOTHING;
        } else if self.target_zoom < self.zoom {
            self.zoom -= (self.zoom - self.target_zoom) / ZOOM_SMOOTHING;
        }

        let pan = PAN_SPEED / self.zoom;
        if input.left {
            self.pan_x -= pan;
        }
        if input.right {
            self.pan_x += pan;
        }
        if input.down {
            self.pan_y -= pan;
        }
        if input.up {
            self.pan_y += pan;
        }

        // Keep the viewport inside the world.
        self.pan_x = self.pan_x.clamp(-world_w, world_w);
        self.pan_y = self.pan_y.clamp(-world_h, 0.0);
    }

    /// Screen position of an isometric point for the current pan and
    /// zoom, centered in a `vw` x `vh` viewport.
    pub fn screen_position(&self, ix: f32, iy: f32, vw: f32, vh: f32) -> (f32, f32) {
        (
            (ix - self.pan_x) * self.zoom + vw / 2.0,
            (iy + self.pan_y) * self.zoom + vh / 2.0,
        )
    }

    /// Whether a tile projected to `(sx, sy)` lies entirely outside
    /// the viewport. Bounding check padded by one scaled tile, not an
    /// exact test.
    pub fn is_offscreen(&self, sx: f32, sy: f32, tile_size: u32, vw: f32, vh: f32) -> bool {
        let padding = tile_size as f32 * self.zoom;
        sx + padding < 0.0 || sy + padding < 0.0 || sx > vw || sy > vh
    }
}

/// Cartesian grid coordinates to isometric offsets. Tile size halves
/// are integer divisions, matching the draw grid.
pub fn cartesian_to_iso(tile_size: u32, x: f32, y: f32) -> (f32, f32) {
    let half = (tile_size / 2) as f32;
    let quarter = (tile_size / 4) as f32;
    ((x - y) * half, (x + y) * quarter)
}

/// Inverse of [`cartesian_to_iso`].
pub fn iso_to_cartesian(tile_size: u32, ix: f32, iy: f32) -> (f32, f32) {
    let half = (tile_size / 2) as f32;
    let quarter = (tile_size / 4) as f32;
    ((ix / half + iy / quarter) / 2.0, (iy / quarter - ix / half) / 2.0)
}
