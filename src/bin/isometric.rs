//! Isometric demo
//!
//! Renders a randomly generated 30x30 tile level in isometric
//! projection. WASD/arrows pan the camera and move the avatar, E/C
//! (or PageUp/PageDown) and the scroll wheel zoom, R regenerates the
//! level.

use isoscape::{
    cartesian_to_iso, seed_from_clock, Camera, CollisionSpace, InputSample, Level, Player,
    SheetLayout, SpriteId, SpriteSheet,
};
use macroquad::prelude::*;

const LEVEL_WIDTH: usize = 30;
const LEVEL_HEIGHT: usize = 30;
const TILE_SIZE: u32 = 64;
const START_ZOOM: f32 = 2.0;
const TICK_DT: f32 = 1.0 / 60.0;

const SHEET_PNG: &[u8] = include_bytes!("../../assets/spritesheet.png");

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Isometric demo v{}", isoscape::VERSION),
        window_width: 640,
        window_height: 480,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let sheet = match load_sheet() {
        Ok(sheet) => sheet,
        Err(e) => {
            // No degraded mode for a visual demo without its assets.
            eprintln!("failed to load sprite sheet: {}", e);
            std::process::exit(1);
        }
    };

    let mut level = Level::generate_now(LEVEL_WIDTH, LEVEL_HEIGHT, TILE_SIZE);
    let mut camera = Camera::new(START_ZOOM);
    let mut player = Player::new();
    let mut space = CollisionSpace::new();
    space.rebuild(&level);

    loop {
        // Input is sampled once per tick; everything below consumes
        // the same sample.
        let input = InputSample::poll();

        let (world_w, world_h) = level.world_half_extents();
        camera.update(&input, world_w, world_h);
        player.update(&input);

        if input.regenerate {
            level = Level::generate(LEVEL_WIDTH, LEVEL_HEIGHT, TILE_SIZE, seed_from_clock());
            space.rebuild(&level);
        }

        space.set_avatar_position(player.x, player.y);
        space.step(TICK_DT);

        clear_background(Color::from_rgba(30, 30, 35, 255));
        draw_level(&level, &sheet, &camera);
        draw_player(&sheet, &player);
        draw_overlay(&camera, &player);

        next_frame().await;
    }
}

fn load_sheet() -> Result<SpriteSheet, isoscape::SheetError> {
    let layout = SheetLayout::canonical()?;
    SpriteSheet::load(SHEET_PNG, TILE_SIZE, &layout)
}

/// Draw all visible tiles back-to-front through the camera.
fn draw_level(level: &Level, sheet: &SpriteSheet, camera: &Camera) {
    let vw = screen_width();
    let vh = screen_height();

    for y in 0..level.height() {
        for x in 0..level.width() {
            let (ix, iy) = cartesian_to_iso(level.tile_size(), x as f32, y as f32);
            let (sx, sy) = camera.screen_position(ix, iy, vw, vh);
            if camera.is_offscreen(sx, sy, level.tile_size(), vw, vh) {
                continue;
            }
            if let Some(tile) = level.tile(x, y) {
                tile.draw(sheet, sx, sy, camera.zoom());
            }
        }
    }
}

/// The avatar is drawn relative to the viewport center, untouched by
/// camera pan/zoom.
fn draw_player(sheet: &SpriteSheet, player: &Player) {
    let half = sheet.tile_size() as f32 / 2.0;
    let x = screen_width() / 2.0 - half + player.x;
    let y = screen_height() / 2.0 - half + player.y;
    draw_texture_ex(
        sheet.texture(),
        x,
        y,
        WHITE,
        DrawTextureParams {
            source: Some(sheet.source(SpriteId::Avatar)),
            ..Default::default()
        },
    );
}

fn draw_overlay(camera: &Camera, player: &Player) {
    let (pan_x, pan_y) = camera.pan();
    let lines = [
        format!("FPS  {}", get_fps()),
        format!("SCA  {:.2}", camera.zoom()),
        format!("POS  {:.0},{:.0}", pan_x, pan_y),
        format!("PLR  {:.0},{:.0}", player.x, player.y),
        "KEYS WASD EC R".to_string(),
    ];
    for (i, line) in lines.iter().enumerate() {
        draw_text(line, 8.0, 20.0 + i as f32 * 18.0, 18.0, WHITE);
    }
}
