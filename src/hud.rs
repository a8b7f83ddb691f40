//! HUD values derived from the game state
//!
//! Aim readouts, the bomb grab area and the winner banner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, GameState};
use crate::world_to_screen;

/// Radius of the grab area around the bomb, in pixels
pub const GRAB_AREA_RADIUS: f32 = 15.0;

/// Angle and strength shown beside each player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AimReadout {
    /// Degrees above the horizontal
    pub angle: i32,
    /// Drag length in pixels
    pub velocity: i32,
}

impl AimReadout {
    /// Readout for a screen-space drag vector (y down)
    pub fn from_drag(delta: Vec2) -> Self {
        let hypotenuse = delta.length();
        if hypotenuse == 0.0 {
            return Self::default();
        }
        let angle = (delta.y / hypotenuse).asin().to_degrees();
        Self {
            angle: angle.round() as i32,
            velocity: hypotenuse.round() as i32,
        }
    }
}

/// Screen rectangle, in pixels, where a drag may start
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrabArea {
    pub left: f32,
    /// Distance from the bottom edge of the surface
    pub bottom: f32,
    pub size: f32,
}

impl GrabArea {
    pub fn contains(&self, viewport_height: f32, pixel: Vec2) -> bool {
        let top = viewport_height - self.bottom - self.size;
        pixel.x >= self.left
            && pixel.x <= self.left + self.size
            && pixel.y >= top
            && pixel.y <= top + self.size
    }
}

/// Grab area around the resting bomb
pub fn grab_area(state: &GameState) -> GrabArea {
    let at = state.projectile.position * state.scale;
    GrabArea {
        left: at.x - GRAB_AREA_RADIUS,
        bottom: at.y - GRAB_AREA_RADIUS * 2.0,
        size: GRAB_AREA_RADIUS * 2.0,
    }
}

/// Bomb position in pixels (y down)
pub fn projectile_on_screen(state: &GameState) -> Vec2 {
    world_to_screen(state.projectile.position, state.scale, state.viewport)
}

/// Banner text once someone has won
pub fn winner_announcement(state: &GameState) -> Option<String> {
    (state.phase == GamePhase::Celebrating)
        .then(|| format!("Player {}", state.current_player.number()))
}
