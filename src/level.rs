//! Procedural level generation
//!
//! A level is a fixed-size grid of tiles filled by one weighted random
//! draw per cell, with wall tiles forced along the border. The grid is
//! replaced wholesale on regeneration, never mutated in place.

use crate::sheet::SpriteId;
use crate::tile::Tile;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// The band a cell's random draw landed in. Kept alongside the sprite
/// stack so collision geometry and tests can inspect the grid without
/// decoding sprites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Wall,
    Avatar,
    Crown,
    TubeFloor,
    Portal,
    Floor,
}

impl TileKind {
    /// Map a uniform draw from `[0, 1000)` to a tile kind. Border
    /// cells are always walls regardless of the draw.
    pub fn from_draw(val: u32, border: bool) -> TileKind {
        match val {
            _ if border || val < 275 => TileKind::Wall,
            275..=284 => TileKind::Avatar,
            285..=287 => TileKind::Crown,
            288 => TileKind::TubeFloor,
            289 => TileKind::Portal,
            _ => TileKind::Floor,
        }
    }

    /// The sprites drawn for this kind, bottom first.
    pub fn sprites(&self) -> &'static [SpriteId] {
        match self {
            TileKind::Wall => &[SpriteId::Wall],
            TileKind::Avatar => &[SpriteId::Avatar],
            TileKind::Crown => &[SpriteId::Crown],
            TileKind::TubeFloor => &[SpriteId::Floor, SpriteId::Tube],
            TileKind::Portal => &[SpriteId::Portal],
            TileKind::Floor => &[SpriteId::Floor],
        }
    }
}

/// A fixed-size grid of tiles plus the pixel tile size used by the
/// projection math.
pub struct Level {
    width: usize,
    height: usize,
    tile_size: u32,
    tiles: Vec<Tile>,
    kinds: Vec<TileKind>,
}

impl Level {
    /// Generate a level from an explicit seed. The same seed always
    /// produces the identical grid.
    pub fn generate(width: usize, height: usize, tile_size: u32, seed: u64) -> Level {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut tiles = Vec::with_capacity(width * height);
        let mut kinds = Vec::with_capacity(width * height);

        for y in 0..height {
            for x in 0..width {
                let border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
                // One draw per cell, border included, so a seed fully
                // determines the grid.
                let val = rng.gen_range(0..1000);
                let kind = TileKind::from_draw(val, border);

                let mut tile = Tile::new();
                for &sprite in kind.sprites() {
                    tile.add_sprite(sprite);
                }
                tiles.push(tile);
                kinds.push(kind);
            }
        }

        Level {
            width,
            height,
            tile_size,
            tiles,
            kinds,
        }
    }

    /// Generate a level seeded from the system clock.
    pub fn generate_now(width: usize, height: usize, tile_size: u32) -> Level {
        Self::generate(width, height, tile_size, seed_from_clock())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// The tile at the provided coordinates, or None outside the grid.
    pub fn tile(&self, x: usize, y: usize) -> Option<&Tile> {
        if x < self.width && y < self.height {
            self.tiles.get(y * self.width + x)
        } else {
            None
        }
    }

    /// The kind of the tile at the provided coordinates.
    pub fn kind(&self, x: usize, y: usize) -> Option<TileKind> {
        if x < self.width && y < self.height {
            self.kinds.get(y * self.width + x).copied()
        } else {
            None
        }
    }

    /// Count cells of a given kind.
    pub fn count_kind(&self, kind: TileKind) -> usize {
        self.kinds.iter().filter(|&&k| k == kind).count()
    }

    /// Half-extents of the world in pixels, used for camera clamping.
    /// Integer halves match the projection math.
    pub fn world_half_extents(&self) -> (f32, f32) {
        let half = (self.tile_size / 2) as usize;
        ((self.width * half) as f32, (self.height * half) as f32)
    }
}

/// A fresh seed from the system clock, for the default
/// unique-per-launch permutation.
pub fn seed_from_clock() -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_nanos() as u64,
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_bands() {
        assert_eq!(TileKind::from_draw(0, false), TileKind::Wall);
        assert_eq!(TileKind::from_draw(274, false), TileKind::Wall);
        assert_eq!(TileKind::from_draw(275, false), TileKind::Avatar);
        assert_eq!(TileKind::from_draw(284, false), TileKind::Avatar);
        assert_eq!(TileKind::from_draw(285, false), TileKind::Crown);
        assert_eq!(TileKind::from_draw(287, false), TileKind::Crown);
        assert_eq!(TileKind::from_draw(288, false), TileKind::TubeFloor);
        assert_eq!(TileKind::from_draw(289, false), TileKind::Portal);
        assert_eq!(TileKind::from_draw(290, false), TileKind::Floor);
        assert_eq!(TileKind::from_draw(999, false), TileKind::Floor);
        // Border wins over every band.
        assert_eq!(TileKind::from_draw(999, true), TileKind::Wall);
    }

    #[test]
    fn test_border_is_walls() {
        let level = Level::generate(30, 30, 64, 1234);
        for x in 0..30 {
            assert_eq!(level.kind(x, 0), Some(TileKind::Wall));
            assert_eq!(level.kind(x, 29), Some(TileKind::Wall));
        }
        for y in 0..30 {
            assert_eq!(level.kind(0, y), Some(TileKind::Wall));
            assert_eq!(level.kind(29, y), Some(TileKind::Wall));
        }
    }

    #[test]
    fn test_same_seed_same_grid() {
        let a = Level::generate(30, 30, 64, 7);
        let b = Level::generate(30, 30, 64, 7);
        for y in 0..30 {
            for x in 0..30 {
                assert_eq!(a.kind(x, y), b.kind(x, y));
            }
        }
    }

    #[test]
    fn test_seed_42_scenario() {
        let level = Level::generate(30, 30, 64, 42);
        assert_eq!(level.kind(0, 0), Some(TileKind::Wall));
        assert_eq!(level.kind(29, 0), Some(TileKind::Wall));
        assert_eq!(level.kind(0, 29), Some(TileKind::Wall));
        assert_eq!(level.kind(29, 29), Some(TileKind::Wall));

        // Portals hit ~0.1% of the 28x28 interior draws; expected
        // count is under one, so anything beyond a handful would mean
        // the band mapping is off.
        let portals = level.count_kind(TileKind::Portal);
        assert!(portals <= 6, "portal count {} outside expected band", portals);

        // Floors dominate the interior (p ~ 0.71).
        let floors = level.count_kind(TileKind::Floor);
        assert!(floors >= 400, "floor count {} implausibly low", floors);
    }

    #[test]
    fn test_tube_floor_sprite_stack() {
        // The tube is drawn on top of its floor.
        assert_eq!(
            TileKind::TubeFloor.sprites(),
            &[SpriteId::Floor, SpriteId::Tube]
        );
    }

    #[test]
    fn test_out_of_bounds_lookup() {
        let level = Level::generate(10, 10, 64, 1);
        assert!(level.tile(10, 0).is_none());
        assert!(level.kind(0, 10).is_none());
    }

    #[test]
    fn test_world_half_extents() {
        let level = Level::generate(30, 30, 64, 1);
        assert_eq!(level.world_half_extents(), (960.0, 960.0));
    }
}
