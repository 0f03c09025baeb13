//! Build automation tasks for the tile demos
//!
//! Usage:
//!   cargo xtask gen-sheet    # Regenerate the placeholder sprite sheet

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Sheet grid cell size in pixels.
const TILE_SIZE: u32 = 64;
/// Sheet dimensions in cells.
const COLS: u32 = 10;
const ROWS: u32 = 8;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for the tile demos")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate assets/spritesheet.png with flat placeholder tiles
    GenSheet {
        /// Output path (defaults to assets/spritesheet.png)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::GenSheet { output } => gen_sheet(output),
    }
}

/// Get the project root directory
fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// The sheet cells the demos reference, with a base colour each.
/// Must stay in sync with assets/sheet_layout.ron.
const CELLS: [((u32, u32), [u8; 3]); 7] = [
    ((7, 4), [96, 96, 104]),   // floor
    ((2, 3), [60, 44, 36]),    // wall
    ((5, 4), [170, 170, 180]), // statue
    ((3, 4), [46, 160, 67]),   // tube
    ((8, 6), [212, 175, 55]),  // crown
    ((5, 6), [120, 60, 200]),  // portal
    ((6, 4), [220, 80, 80]),   // avatar
];

fn gen_sheet(output: Option<PathBuf>) -> Result<()> {
    let path = output.unwrap_or_else(|| project_root().join("assets/spritesheet.png"));
    let mut img = RgbaImage::new(COLS * TILE_SIZE, ROWS * TILE_SIZE);

    for ((col, row), rgb) in CELLS {
        paint_diamond(&mut img, col, row, rgb);
    }

    img.save(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {} ({}x{})", path.display(), img.width(), img.height());
    Ok(())
}

/// Fill one cell with a shaded diamond so the tile reads as an
/// isometric block against the transparent background.
fn paint_diamond(img: &mut RgbaImage, col: u32, row: u32, [r, g, b]: [u8; 3]) {
    let ts = TILE_SIZE as i32;
    let (x0, y0) = ((col * TILE_SIZE) as i32, (row * TILE_SIZE) as i32);

    for y in 0..ts {
        for x in 0..ts {
            let dx = ((x as f32) - ts as f32 / 2.0 + 0.5).abs() / (ts as f32 / 2.0);
            let dy = ((y as f32) - ts as f32 / 2.0 + 0.5).abs() / (ts as f32 / 2.0);
            if dx + dy > 1.0 {
                continue;
            }
            let px = if dx + dy > 0.92 {
                // Dark outline along the diamond edge.
                Rgba([r / 3, g / 3, b / 3, 255])
            } else {
                let shade = 1.0 - 0.35 * dy;
                Rgba([
                    (r as f32 * shade) as u8,
                    (g as f32 * shade) as u8,
                    (b as f32 * shade) as u8,
                    255,
                ])
            };
            img.put_pixel((x0 + x) as u32, (y0 + y) as u32, px);
        }
    }
}
