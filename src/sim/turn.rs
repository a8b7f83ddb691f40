//! Turn phase transitions
//!
//! Aiming -> InFlight -> (Aiming for the other player | Celebrating).

use glam::Vec2;

use super::state::{GamePhase, GameState, Player};
use super::tick::{Miss, StepOutcome};

/// How a finished throw changed the turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    /// Throw missed; `next` is now aiming
    Missed { miss: Miss, next: Player },
    /// Thrower hit the opponent and wins
    Won { winner: Player },
}

/// Start aiming for `player` with the bomb in hand
pub fn enter_aiming(state: &mut GameState, player: Player) {
    state.current_player = player;
    state.phase = GamePhase::Aiming;
    state.seat_projectile();
}

/// Release the bomb. Returns false unless the state was aiming.
pub fn launch(state: &mut GameState, velocity: Vec2) -> bool {
    if state.phase != GamePhase::Aiming {
        return false;
    }
    state.projectile.velocity = velocity;
    state.phase = GamePhase::InFlight;
    log::info!(
        "Player {} throws at ({:.1}, {:.1})",
        state.current_player.number(),
        velocity.x,
        velocity.y
    );
    true
}

/// Apply a sub-step outcome to the turn. `Flying` changes nothing.
pub fn resolve(state: &mut GameState, outcome: StepOutcome) -> Option<TurnResult> {
    match outcome {
        StepOutcome::Flying => None,
        StepOutcome::Miss(miss) => {
            let next = state.current_player.other();
            log::info!(
                "Player {} missed ({:?}), player {} to aim",
                state.current_player.number(),
                miss,
                next.number()
            );
            enter_aiming(state, next);
            Some(TurnResult::Missed { miss, next })
        }
        StepOutcome::Hit => {
            state.phase = GamePhase::Celebrating;
            let winner = state.current_player;
            log::info!("Player {} wins", winner.number());
            Some(TurnResult::Won { winner })
        }
    }
}
