//! Collision detection for the flying bomb
//!
//! Three independent tests, applied by `tick` in priority order: leaving
//! the frame, striking a building, striking the opponent.

use glam::Vec2;

use super::gorilla::Silhouette;
use super::state::{GameState, Player};
use crate::consts::PROJECTILE_HALF_EXTENT;

/// Result of the building scan for one sub-step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildingStrike {
    /// No building overlaps the bomb
    Clear,
    /// Every overlap was inside an existing crater
    ThroughCrater,
    /// First solid overlap, by building index
    Struck(usize),
}

/// Bomb left the playfield (below the ground or past either side)
pub fn check_frame_exit(position: Vec2, world_width: f32) -> bool {
    position.y < 0.0 || position.x < 0.0 || position.x > world_width
}

/// Scan buildings left to right for a solid overlap.
///
/// Overlaps whose strike point sits inside a crater are skipped and the scan
/// moves on; the first overlap that is not inside a crater wins.
pub fn check_building_strike(state: &GameState, position: Vec2) -> BuildingStrike {
    let mut result = BuildingStrike::Clear;
    for (index, building) in state.buildings.iter().enumerate() {
        let overlaps = position.x + PROJECTILE_HALF_EXTENT > building.x
            && position.x - PROJECTILE_HALF_EXTENT < building.right()
            && position.y - PROJECTILE_HALF_EXTENT < building.height;
        if !overlaps {
            continue;
        }
        if state.in_blast_hole(position) {
            result = BuildingStrike::ThroughCrater;
            continue;
        }
        return BuildingStrike::Struck(index);
    }
    result
}

/// Bomb touches the opponent of `thrower`
pub fn check_gorilla_strike(state: &GameState, thrower: Player, position: Vec2) -> bool {
    Silhouette::of(state, thrower.other()).contains(position)
}
