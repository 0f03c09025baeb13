//! Character collision demo
//!
//! Draws a small generated level flat (top-down) and moves an avatar
//! with WASD/arrows at a fixed step per axis. Wall tiles get static
//! box colliders and the avatar a dynamic circle; the space is
//! stepped every tick.

use isoscape::{
    seed_from_clock, CollisionSpace, InputSample, Level, Player, SheetLayout, SpriteId,
    SpriteSheet,
};
use macroquad::prelude::*;

const LEVEL_WIDTH: usize = 15;
const LEVEL_HEIGHT: usize = 15;
const TILE_SIZE: u32 = 64;
const TICK_DT: f32 = 1.0 / 60.0;

const SHEET_PNG: &[u8] = include_bytes!("../../assets/spritesheet.png");

fn window_conf() -> Conf {
    Conf {
        window_title: "Character collision".to_string(),
        window_width: 480,
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
            eprintln!("failed to load sprite sheet: {}", e);
            std::process::exit(1);
        }
    };

    let mut level = Level::generate_now(LEVEL_WIDTH, LEVEL_HEIGHT, TILE_SIZE);
    let mut player = Player::new();
    let mut space = CollisionSpace::new();
    space.rebuild(&level);

    // Flat rendering: half a tile per grid step keeps the whole level
    // inside the small window.
    let draw_scale = 0.5;

    loop {
        let input = InputSample::poll();
        player.update(&input);

        if input.regenerate {
            level = Level::generate(LEVEL_WIDTH, LEVEL_HEIGHT, TILE_SIZE, seed_from_clock());
            space.rebuild(&level);
        }

        space.set_avatar_position(player.x, player.y);
        space.step(TICK_DT);

        clear_background(Color::from_rgba(30, 30, 35, 255));
        draw_level(&level, &sheet, draw_scale);
        draw_player(&sheet, &player);
        draw_overlay(&player, &space);

        next_frame().await;
    }
}

fn load_sheet() -> Result<SpriteSheet, isoscape::SheetError> {
    let layout = SheetLayout::canonical()?;
    SpriteSheet::load(SHEET_PNG, TILE_SIZE, &layout)
}

fn draw_level(level: &Level, sheet: &SpriteSheet, scale: f32) {
    let step = level.tile_size() as f32 * scale;
    for y in 0..level.height() {
        for x in 0..level.width() {
            if let Some(tile) = level.tile(x, y) {
                tile.draw(sheet, x as f32 * step, y as f32 * step, scale);
            }
        }
    }
}

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

fn draw_overlay(player: &Player, space: &CollisionSpace) {
    let lines = [
        format!("FPS      {}", get_fps()),
        format!("PlayerX  {:.1}", player.x),
        format!("PlayerY  {:.1}", player.y),
        format!("Shapes   {}", space.collider_count()),
    ];
    for (i, line) in lines.iter().enumerate() {
        draw_text(line, 8.0, 20.0 + i as f32 * 18.0, 18.0, WHITE);
    }
}
