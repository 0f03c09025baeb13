//! Tile sprite stacks
//!
//! A tile is one grid cell's ordered stack of sprites, drawn
//! back-to-front (painter's algorithm) with a shared transform.

use crate::sheet::{SpriteId, SpriteSheet};
use macroquad::prelude::{draw_texture_ex, vec2, DrawTextureParams, WHITE};

/// One grid cell's drawable sprite stack. Any number of sprites may be
/// added; list order is draw order.
#[derive(Debug, Clone, Default)]
pub struct Tile {
    sprites: Vec<SpriteId>,
}

impl Tile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sprite to the top of the stack.
    pub fn add_sprite(&mut self, sprite: SpriteId) {
        self.sprites.push(sprite);
    }

    /// Remove all sprites from the tile.
    pub fn clear_sprites(&mut self) {
        self.sprites.clear();
    }

    pub fn sprites(&self) -> &[SpriteId] {
        &self.sprites
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Draw every sprite in stack order at the same screen position
    /// and scale.
    pub fn draw(&self, sheet: &SpriteSheet, x: f32, y: f32, scale: f32) {
        let size = sheet.tile_size() as f32 * scale;
        for &sprite in &self.sprites {
            draw_texture_ex(
                sheet.texture(),
                x,
                y,
                WHITE,
                DrawTextureParams {
                    source: Some(sheet.source(sprite)),
                    dest_size: Some(vec2(size, size)),
                    ..Default::default()
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_preserves_order() {
        let mut t = Tile::new();
        t.add_sprite(SpriteId::Floor);
        t.add_sprite(SpriteId::Tube);
        assert_eq!(t.sprites(), &[SpriteId::Floor, SpriteId::Tube]);
    }

    #[test]
    fn test_clear_empties() {
        let mut t = Tile::new();
        t.add_sprite(SpriteId::Wall);
        assert!(!t.is_empty());
        t.clear_sprites();
        assert!(t.is_empty());
        assert!(t.sprites().is_empty());
    }
}
