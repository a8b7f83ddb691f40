//! Gorilla placement and silhouettes
//!
//! Gorillas are derived from the building they stand on every time they are
//! needed; nothing here is cached.

use glam::Vec2;

use super::geometry::{QuadraticCurve, polygon_contains};
use super::state::{Building, GamePhase, GameState, Player};
use crate::consts::{AIM_ARM_DIVISOR, ARM_STROKE_WIDTH, HAND_OFFSET_X, HAND_OFFSET_Y};

/// Body outline relative to the anchor (roof center)
pub const BODY: [Vec2; 12] = [
    Vec2::new(0.0, 15.0),
    Vec2::new(-7.0, 0.0),
    Vec2::new(-20.0, 0.0),
    Vec2::new(-17.0, 10.0),
    Vec2::new(-20.0, 44.0),
    Vec2::new(-11.0, 77.0),
    Vec2::new(0.0, 84.0),
    Vec2::new(11.0, 77.0),
    Vec2::new(20.0, 44.0),
    Vec2::new(17.0, 18.0),
    Vec2::new(20.0, 0.0),
    Vec2::new(7.0, 0.0),
];

/// Which building a player stands on: second from the left or second from the right
pub fn building_index(player: Player, building_count: usize) -> usize {
    match player {
        Player::One => 1,
        Player::Two => building_count.saturating_sub(2),
    }
}

/// Roof-center point the gorilla is drawn from
pub fn anchor(player: Player, buildings: &[Building]) -> Vec2 {
    buildings
        .get(building_index(player, buildings.len()))
        .map(Building::roof_center)
        .unwrap_or(Vec2::ZERO)
}

/// Where the bomb rests before a throw
pub fn hand_position(player: Player, buildings: &[Building]) -> Vec2 {
    let side = match player {
        Player::One => -1.0,
        Player::Two => 1.0,
    };
    anchor(player, buildings) + Vec2::new(side * HAND_OFFSET_X, HAND_OFFSET_Y)
}

/// Arm pose, shared by drawing and hit testing
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArmPose {
    /// Hanging down
    Resting,
    /// Raised in victory
    Raised,
    /// Holding the bomb, pulled back against the drag
    Aiming { velocity: Vec2 },
}

/// Left and right arm poses for `player` in the current state
pub fn arm_poses(state: &GameState, player: Player) -> (ArmPose, ArmPose) {
    let is_current = state.current_player == player;
    let other_arm = match state.phase {
        GamePhase::Celebrating if is_current => ArmPose::Raised,
        _ => ArmPose::Resting,
    };
    if state.phase == GamePhase::Aiming && is_current {
        let aiming = ArmPose::Aiming {
            velocity: state.projectile.velocity,
        };
        return match player {
            Player::One => (aiming, ArmPose::Resting),
            Player::Two => (ArmPose::Resting, aiming),
        };
    }
    (other_arm, other_arm)
}

/// Arm centerline relative to the anchor; `side` is -1 for left, +1 for right
fn arm_curve(side: f32, pose: ArmPose) -> QuadraticCurve {
    let shoulder = Vec2::new(side * 14.0, 50.0);
    let (control, hand) = match pose {
        ArmPose::Resting => (Vec2::new(side * 44.0, 45.0), Vec2::new(side * 28.0, 12.0)),
        ArmPose::Raised => (
            Vec2::new(side * 44.0, 63.0),
            Vec2::new(side * HAND_OFFSET_X, HAND_OFFSET_Y),
        ),
        ArmPose::Aiming { velocity } => (
            Vec2::new(side * 44.0, 63.0),
            Vec2::new(side * HAND_OFFSET_X, HAND_OFFSET_Y) - velocity / AIM_ARM_DIVISOR,
        ),
    };
    QuadraticCurve::new(shoulder, control, hand)
}

/// A gorilla's collidable outline in world coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Silhouette {
    pub anchor: Vec2,
    pub body: [Vec2; 12],
    pub left_arm: QuadraticCurve,
    pub right_arm: QuadraticCurve,
}

impl Silhouette {
    pub fn new(anchor: Vec2, left: ArmPose, right: ArmPose) -> Self {
        Self {
            anchor,
            body: BODY.map(|p| p + anchor),
            left_arm: arm_curve(-1.0, left).translated(anchor),
            right_arm: arm_curve(1.0, right).translated(anchor),
        }
    }

    /// Silhouette of `player` as posed in `state`
    pub fn of(state: &GameState, player: Player) -> Self {
        let (left, right) = arm_poses(state, player);
        Self::new(anchor(player, &state.buildings), left, right)
    }

    /// Union of the body and both arms. An arm counts as its stroke plus
    /// the area its curve encloses with the shoulder-to-hand chord.
    pub fn contains(&self, point: Vec2) -> bool {
        polygon_contains(&self.body, point)
            || [self.left_arm, self.right_arm].iter().any(|arm| {
                arm.fill_contains(point) || arm.stroke_contains(point, ARM_STROKE_WIDTH)
            })
    }
}
