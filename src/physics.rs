//! Collision space
//!
//! Thin wrapper around rapier2d holding static box colliders for wall
//! tiles and one dynamic ball for the avatar. Geometry is built once
//! per level load and rebuilt wholesale on regeneration; nothing is
//! added during the draw phase. The avatar position is mirrored into
//! the space each tick but resolved positions are not read back, the
//! avatar stays input-driven.

use crate::level::{Level, TileKind};
use rapier2d::prelude::*;

/// User-data tag marking the avatar's collider.
pub const AVATAR_COLLISION_TAG: u128 = 1;

/// The demo's physics space: static level geometry plus the avatar.
pub struct CollisionSpace {
    pipeline: PhysicsPipeline,
    gravity: Vector<Real>,
    integration: IntegrationParameters,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd: CCDSolver,
    avatar: Option<RigidBodyHandle>,
}

impl CollisionSpace {
    pub fn new() -> Self {
        Self {
            pipeline: PhysicsPipeline::new(),
            // Top-down view, no gravity.
            gravity: vector![0.0, 0.0],
            integration: IntegrationParameters::default(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd: CCDSolver::new(),
            avatar: None,
        }
    }

    /// Replace all collision geometry with the given level's: one
    /// static box per wall tile and a fresh dynamic ball for the
    /// avatar at the origin.
    pub fn rebuild(&mut self, level: &Level) {
        self.bodies = RigidBodySet::new();
        self.colliders = ColliderSet::new();
        self.islands = IslandManager::new();
        self.broad_phase = DefaultBroadPhase::new();
        self.narrow_phase = NarrowPhase::new();
        self.avatar = None;

        let ts = level.tile_size() as f32;
        for y in 0..level.height() {
            for x in 0..level.width() {
                if level.kind(x, y) == Some(TileKind::Wall) {
                    let wall = ColliderBuilder::cuboid(ts / 2.0, ts / 2.0)
                        .translation(vector![x as f32 * ts, y as f32 * ts])
                        .friction(1.0)
                        .restitution(0.0)
                        .build();
                    self.colliders.insert(wall);
                }
            }
        }

        let body = RigidBodyBuilder::dynamic()
            .translation(vector![0.0, 0.0])
            .lock_rotations()
            .build();
        let handle = self.bodies.insert(body);
        let ball = ColliderBuilder::ball(ts / 2.0)
            .friction(0.0)
            .restitution(0.0)
            .user_data(AVATAR_COLLISION_TAG)
            .build();
        self.colliders
            .insert_with_parent(ball, handle, &mut self.bodies);
        self.avatar = Some(handle);
    }

    /// Mirror the input-driven avatar position into the space.
    pub fn set_avatar_position(&mut self, x: f32, y: f32) {
        if let Some(handle) = self.avatar {
            if let Some(body) = self.bodies.get_mut(handle) {
                body.set_translation(vector![x, y], true);
            }
        }
    }

    /// Current avatar position in the space.
    pub fn avatar_position(&self) -> Option<(f32, f32)> {
        let handle = self.avatar?;
        let body = self.bodies.get(handle)?;
        let t = body.translation();
        Some((t.x, t.y))
    }

    /// Advance the simulation by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.integration.dt = dt;
        self.pipeline.step(
            &self.gravity,
            &self.integration,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd,
            None,
            &(),
            &(),
        );
    }

    /// Total collider count (walls plus avatar), for diagnostics.
    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }
}

impl Default for CollisionSpace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    #[test]
    fn test_rebuild_matches_wall_count() {
        let level = Level::generate(30, 30, 64, 42);
        let mut space = CollisionSpace::new();
        space.rebuild(&level);
        assert_eq!(
            space.collider_count(),
            level.count_kind(TileKind::Wall) + 1
        );
    }

    #[test]
    fn test_rebuild_does_not_accumulate() {
        // Geometry is replaced, never appended, across regenerations.
        let level = Level::generate(30, 30, 64, 42);
        let mut space = CollisionSpace::new();
        space.rebuild(&level);
        let first = space.collider_count();
        space.rebuild(&level);
        assert_eq!(space.collider_count(), first);
    }

    #[test]
    fn test_avatar_position_mirror() {
        let level = Level::generate(10, 10, 64, 1);
        let mut space = CollisionSpace::new();
        space.rebuild(&level);
        space.set_avatar_position(12.0, -9.0);
        assert_eq!(space.avatar_position(), Some((12.0, -9.0)));
    }

    #[test]
    fn test_step_runs() {
        let level = Level::generate(10, 10, 64, 1);
        let mut space = CollisionSpace::new();
        space.rebuild(&level);
        for _ in 0..10 {
            space.step(1.0 / 60.0);
        }
        assert!(space.avatar_position().is_some());
    }
}
