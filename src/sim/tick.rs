//! Flight integration
//!
//! Each animation frame is split into equal sub-steps; every sub-step moves
//! the bomb and runs the collision tests before the next one starts.

use super::collision::{BuildingStrike, check_building_strike, check_frame_exit, check_gorilla_strike};
use super::state::{BlastHole, GamePhase, GameState, Projectile};
use crate::consts::*;

/// Why a throw ended without hitting anyone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Miss {
    /// Bomb left the playfield
    OutOfFrame,
    /// Bomb blew a hole in this building
    Building(usize),
}

/// Result of one collision-checked sub-step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Still flying
    Flying,
    Miss(Miss),
    /// Opponent struck
    Hit,
}

/// Forward-Euler step of `dt_ms` milliseconds
pub fn move_projectile(projectile: &mut Projectile, dt_ms: f32, spin_direction: f32) {
    let multiplier = dt_ms / TIME_SCALE_MS;

    projectile.velocity.y -= GRAVITY * multiplier;
    projectile.position += projectile.velocity * multiplier;
    projectile.rotation += spin_direction * SPIN_RATE * multiplier;
}

/// Move the bomb one sub-step and test it.
///
/// A building strike records a new blast hole. Miss tests run first; the
/// opponent is only tested when neither miss test fired.
pub fn substep(state: &mut GameState, dt_ms: f32) -> StepOutcome {
    let thrower = state.current_player;
    move_projectile(&mut state.projectile, dt_ms, thrower.spin_direction());
    let position = state.projectile.position;

    if check_frame_exit(position, state.world_width()) {
        return StepOutcome::Miss(Miss::OutOfFrame);
    }

    if let BuildingStrike::Struck(index) = check_building_strike(state, position) {
        state.blast_holes.push(BlastHole { position });
        return StepOutcome::Miss(Miss::Building(index));
    }

    if check_gorilla_strike(state, thrower, position) {
        return StepOutcome::Hit;
    }

    StepOutcome::Flying
}

/// Advance a flight by one frame's elapsed time.
///
/// Stops at the first sub-step that ends the throw; the caller resolves the
/// turn. Does nothing unless the bomb is in flight.
pub fn advance_flight(state: &mut GameState, elapsed_ms: f32) -> StepOutcome {
    if state.phase != GamePhase::InFlight {
        return StepOutcome::Flying;
    }

    let dt = elapsed_ms / HIT_DETECTION_SUBSTEPS as f32;
    for _ in 0..HIT_DETECTION_SUBSTEPS {
        let outcome = substep(state, dt);
        if outcome != StepOutcome::Flying {
            return outcome;
        }
    }
    StepOutcome::Flying
}
