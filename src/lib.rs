//! ISOSCAPE: tile demos on macroquad + rapier2d
//!
//! Shared logic for two interactive demo binaries:
//! - `isometric`: procedurally generated isometric level with a
//!   pan/zoom camera and a keyboard-driven avatar
//! - `character`: the same level drawn flat, with avatar movement and
//!   a stepped collision space
//!
//! Rendering, input polling and windowing are macroquad's; rigid-body
//! simulation is rapier2d's. What lives here is level generation, the
//! isometric projection and camera math, sprite sheet slicing and the
//! glue between them.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod camera;
pub mod input;
pub mod level;
pub mod physics;
pub mod player;
pub mod sheet;
pub mod tile;

pub use camera::{cartesian_to_iso, iso_to_cartesian, Camera};
pub use input::InputSample;
pub use level::{seed_from_clock, Level, TileKind};
pub use physics::CollisionSpace;
pub use player::Player;
pub use sheet::{SheetError, SheetLayout, SpriteId, SpriteSheet};
pub use tile::Tile;
