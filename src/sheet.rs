//! Sprite sheet loading
//!
//! One packed image subdivided into named sub-images by grid
//! coordinate. The name -> coordinate table is RON (Rusty Object
//! Notation) data rather than code, so alternate sheet revisions can
//! be swapped without touching the loader.

use macroquad::prelude::{FilterMode, Rect, Texture2D};
use serde::{Deserialize, Serialize};

/// The canonical layout table, embedded at build time.
const CANONICAL_LAYOUT: &str = include_str!("../assets/sheet_layout.ron");

/// Error type for sprite sheet loading
#[derive(Debug)]
pub enum SheetError {
    DecodeError(image::ImageError),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<image::ImageError> for SheetError {
    fn from(e: image::ImageError) -> Self {
        SheetError::DecodeError(e)
    }
}

impl From<ron::error::SpannedError> for SheetError {
    fn from(e: ron::error::SpannedError) -> Self {
        SheetError::ParseError(e)
    }
}

impl std::fmt::Display for SheetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetError::DecodeError(e) => write!(f, "Decode error: {}", e),
            SheetError::ParseError(e) => write!(f, "Parse error: {}", e),
            SheetError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

/// A (column, row) cell on the packed sheet grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCoord {
    pub col: u32,
    pub row: u32,
}

impl GridCoord {
    /// Pixel-space source rectangle for this cell.
    pub fn source_rect(&self, tile_size: u32) -> Rect {
        let ts = tile_size as f32;
        Rect::new(self.col as f32 * ts, self.row as f32 * ts, ts, ts)
    }
}

/// The sprites a sheet provides, in a fixed order usable as an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteId {
    Floor = 0,
    Wall = 1,
    Statue = 2,
    Tube = 3,
    Crown = 4,
    Portal = 5,
    Avatar = 6,
}

impl SpriteId {
    pub const ALL: [SpriteId; 7] = [
        SpriteId::Floor,
        SpriteId::Wall,
        SpriteId::Statue,
        SpriteId::Tube,
        SpriteId::Crown,
        SpriteId::Portal,
        SpriteId::Avatar,
    ];
}

/// Versioned name -> grid coordinate table for a packed sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetLayout {
    pub version: u32,
    pub floor: GridCoord,
    pub wall: GridCoord,
    pub statue: GridCoord,
    pub tube: GridCoord,
    pub crown: GridCoord,
    pub portal: GridCoord,
    pub avatar: GridCoord,
}

impl SheetLayout {
    /// Parse the embedded canonical table.
    pub fn canonical() -> Result<Self, SheetError> {
        Self::from_ron(CANONICAL_LAYOUT)
    }

    /// Parse a layout table from RON text.
    pub fn from_ron(text: &str) -> Result<Self, SheetError> {
        Ok(ron::from_str(text)?)
    }

    /// The table entries paired with the sprite they resolve to, in
    /// `SpriteId` index order.
    pub fn entries(&self) -> [(SpriteId, GridCoord); 7] {
        [
            (SpriteId::Floor, self.floor),
            (SpriteId::Wall, self.wall),
            (SpriteId::Statue, self.statue),
            (SpriteId::Tube, self.tube),
            (SpriteId::Crown, self.crown),
            (SpriteId::Portal, self.portal),
            (SpriteId::Avatar, self.avatar),
        ]
    }

    /// Check that every cell lies within an image of the given pixel
    /// dimensions when sliced at `tile_size`.
    pub fn validate(&self, image_w: u32, image_h: u32, tile_size: u32) -> Result<(), String> {
        for (id, coord) in self.entries() {
            let right = (coord.col + 1) * tile_size;
            let bottom = (coord.row + 1) * tile_size;
            if right > image_w || bottom > image_h {
                return Err(format!(
                    "sprite {:?} at ({}, {}) exceeds {}x{} sheet bounds",
                    id, coord.col, coord.row, image_w, image_h
                ));
            }
        }
        Ok(())
    }
}

/// A packed sheet uploaded to the GPU once, with one source rect per
/// named sprite.
pub struct SpriteSheet {
    texture: Texture2D,
    tile_size: u32,
    sources: [Rect; 7],
}

impl SpriteSheet {
    /// Decode `bytes` as PNG, validate the layout against the decoded
    /// dimensions and upload the image as a single texture.
    pub fn load(bytes: &[u8], tile_size: u32, layout: &SheetLayout) -> Result<Self, SheetError> {
        let decoded = image::load_from_memory(bytes)?.to_rgba8();
        let (w, h) = decoded.dimensions();
        layout
            .validate(w, h, tile_size)
            .map_err(SheetError::ValidationError)?;

        let texture = Texture2D::from_rgba8(w as u16, h as u16, decoded.as_raw());
        texture.set_filter(FilterMode::Nearest);

        let mut sources = [Rect::new(0.0, 0.0, 0.0, 0.0); 7];
        for (id, coord) in layout.entries() {
            sources[id as usize] = coord.source_rect(tile_size);
        }

        Ok(Self {
            texture,
            tile_size,
            sources,
        })
    }

    pub fn texture(&self) -> &Texture2D {
        &self.texture
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Source rectangle on the sheet for a sprite.
    pub fn source(&self, id: SpriteId) -> Rect {
        self.sources[id as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_layout_parses() {
        let layout = SheetLayout::canonical().unwrap();
        assert_eq!(layout.version, 2);
        assert_eq!(layout.floor, GridCoord { col: 7, row: 4 });
        assert_eq!(layout.avatar, GridCoord { col: 6, row: 4 });
    }

    #[test]
    fn test_source_rect() {
        let coord = GridCoord { col: 7, row: 4 };
        let r = coord.source_rect(64);
        assert_eq!(r.x, 448.0);
        assert_eq!(r.y, 256.0);
        assert_eq!(r.w, 64.0);
        assert_eq!(r.h, 64.0);
    }

    #[test]
    fn test_canonical_fits_shipped_sheet() {
        // The shipped sheet is 640x512 at a 64px grid.
        let layout = SheetLayout::canonical().unwrap();
        assert!(layout.validate(640, 512, 64).is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_bounds() {
        let mut layout = SheetLayout::canonical().unwrap();
        layout.crown = GridCoord { col: 40, row: 0 };
        let err = layout.validate(640, 512, 64).unwrap_err();
        assert!(err.contains("Crown"));
    }

    #[test]
    fn test_from_ron_rejects_garbage() {
        assert!(SheetLayout::from_ron("not ron at all (").is_err());
    }
}
