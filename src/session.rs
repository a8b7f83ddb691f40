//! Session handle: game lifecycle, pointer input and frame scheduling
//!
//! The host owns one `Session`, forwards drag events and viewport changes to
//! it, and calls `on_animation_frame` with the ticket it was handed for each
//! scheduled frame. Tickets carry the game generation they were issued for,
//! so frames scheduled before a new game are ignored.

use glam::Vec2;

use crate::hud::{self, AimReadout};
use crate::sim::{GamePhase, GameState, TurnResult, advance_flight, launch, resolve};
use crate::tuning::Tuning;
use crate::{DuelError, Viewport};

/// Permission to run one animation frame of the current game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTicket {
    generation: u64,
}

/// What an animation frame did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// First frame of a throw: timestamp captured, nothing moved
    Baseline(FrameTicket),
    /// Bomb still flying; schedule another frame
    Continue(FrameTicket),
    /// Throw ended
    Resolved(TurnResult),
    /// Ticket from a superseded game, or nothing in flight
    Stale,
}

/// A running game plus the transient input and timing around it
pub struct Session {
    tuning: Tuning,
    state: GameState,
    generation: u64,
    /// Pointer position where the current drag started
    drag_origin: Option<Vec2>,
    previous_timestamp: Option<f64>,
}

impl Session {
    /// Validate `tuning` and start a game from `seed`
    pub fn new(tuning: Tuning, viewport: Viewport, seed: u64) -> Result<Self, DuelError> {
        let state = GameState::new(seed, &tuning, viewport)?;
        log::info!("Started new game with seed: {}", seed);
        Ok(Self {
            tuning,
            state,
            generation: 0,
            drag_origin: None,
            previous_timestamp: None,
        })
    }

    /// Read-only snapshot for rendering
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Discard the current game and generate a new one.
    ///
    /// On error the previous game is left untouched.
    pub fn new_game(&mut self, seed: u64) -> Result<(), DuelError> {
        let state = GameState::new(seed, &self.tuning, self.state.viewport)?;
        self.state = state;
        self.generation += 1;
        self.drag_origin = None;
        self.previous_timestamp = None;
        log::info!(
            "Started new game with seed: {} (generation {})",
            seed,
            self.generation
        );
        Ok(())
    }

    /// New game from a fresh random seed
    pub fn new_random_game(&mut self) -> Result<u64, DuelError> {
        let seed = rand::random::<u64>();
        self.new_game(seed)?;
        Ok(seed)
    }

    /// Follow a viewport change. While aiming the bomb is re-seated in hand.
    pub fn resize(&mut self, viewport: Viewport) -> Result<(), DuelError> {
        self.state.rescale(viewport)?;
        if self.state.phase == GamePhase::Aiming {
            self.state.seat_projectile();
        }
        log::debug!(
            "Resized to {}x{}, scale {:.4}",
            viewport.width,
            viewport.height,
            self.state.scale
        );
        Ok(())
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    /// Begin a drag at a pointer position. Ignored unless aiming.
    pub fn drag_start(&mut self, pointer: Vec2) -> bool {
        if self.state.phase != GamePhase::Aiming {
            log::debug!("Ignoring drag start during {:?}", self.state.phase);
            return false;
        }
        self.drag_origin = Some(pointer);
        true
    }

    /// Pointer moved; the bomb velocity follows the drag
    pub fn drag_move(&mut self, pointer: Vec2) {
        let Some(origin) = self.drag_origin else {
            return;
        };
        if self.state.phase != GamePhase::Aiming {
            return;
        }
        let delta = pointer - origin;
        // Screen y grows downward
        self.state.projectile.velocity = Vec2::new(-delta.x, delta.y);
        let player = self.state.current_player;
        self.state.readouts[player.index()] = AimReadout::from_drag(delta);
    }

    /// Release the drag and throw. Returns the ticket for the first frame.
    pub fn drag_end(&mut self) -> Option<FrameTicket> {
        self.drag_origin.take()?;
        let velocity = self.state.projectile.velocity;
        if !launch(&mut self.state, velocity) {
            return None;
        }
        self.previous_timestamp = None;
        Some(self.ticket())
    }

    /// Run one animation frame of a throw; `timestamp_ms` is the frame clock
    pub fn on_animation_frame(&mut self, ticket: FrameTicket, timestamp_ms: f64) -> FrameOutcome {
        if ticket.generation != self.generation || self.state.phase != GamePhase::InFlight {
            log::debug!(
                "Dropping stale frame (ticket generation {}, current {})",
                ticket.generation,
                self.generation
            );
            return FrameOutcome::Stale;
        }

        let Some(previous) = self.previous_timestamp else {
            self.previous_timestamp = Some(timestamp_ms);
            return FrameOutcome::Baseline(self.ticket());
        };

        let elapsed = (timestamp_ms - previous) as f32;
        let outcome = advance_flight(&mut self.state, elapsed);
        if let Some(result) = resolve(&mut self.state, outcome) {
            self.previous_timestamp = None;
            return FrameOutcome::Resolved(result);
        }

        self.previous_timestamp = Some(timestamp_ms);
        FrameOutcome::Continue(self.ticket())
    }

    /// Winner banner text while celebrating
    pub fn winner_announcement(&self) -> Option<String> {
        hud::winner_announcement(&self.state)
    }

    fn ticket(&self) -> FrameTicket {
        FrameTicket {
            generation: self.generation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Miss, Player};

    fn session() -> Session {
        Session::new(Tuning::default(), Viewport::new(1280.0, 720.0), 1234).unwrap()
    }

    /// Drive frames at 60 fps until the throw resolves
    fn fly(session: &mut Session, ticket: FrameTicket) -> TurnResult {
        let mut ticket = ticket;
        let mut now = 1000.0;
        for _ in 0..10_000 {
            match session.on_animation_frame(ticket, now) {
                FrameOutcome::Baseline(next) | FrameOutcome::Continue(next) => ticket = next,
                FrameOutcome::Resolved(result) => return result,
                FrameOutcome::Stale => panic!("unexpected stale frame"),
            }
            now += 16.0;
        }
        panic!("throw never resolved");
    }

    #[test]
    fn test_drag_maps_to_velocity() {
        let mut s = session();
        assert!(s.drag_start(Vec2::new(100.0, 100.0)));
        s.drag_move(Vec2::new(50.0, 180.0));
        assert_eq!(s.state().projectile.velocity, Vec2::new(50.0, 80.0));
        assert_eq!(s.state().readouts[0].velocity, 94);
        assert_eq!(s.state().readouts[1], AimReadout::default());
    }

    #[test]
    fn test_drag_end_without_start_does_nothing() {
        let mut s = session();
        assert_eq!(s.drag_end(), None);
        assert_eq!(s.state().phase, GamePhase::Aiming);
    }

    #[test]
    fn test_first_frame_is_baseline() {
        let mut s = session();
        s.drag_start(Vec2::ZERO);
        s.drag_move(Vec2::new(-50.0, 80.0));
        let ticket = s.drag_end().unwrap();
        let before = s.state().projectile;
        let outcome = s.on_animation_frame(ticket, 123_456.0);
        assert!(matches!(outcome, FrameOutcome::Baseline(_)));
        assert_eq!(s.state().projectile, before);
    }

    #[test]
    fn test_second_frame_integrates_elapsed_time() {
        let mut s = session();
        s.drag_start(Vec2::ZERO);
        s.drag_move(Vec2::new(-50.0, 80.0));
        let ticket = s.drag_end().unwrap();
        let start = s.state().projectile.position;
        let FrameOutcome::Baseline(ticket) = s.on_animation_frame(ticket, 1000.0) else {
            panic!("expected baseline");
        };
        // 20 ms split into 10 sub-steps of 2 ms
        let outcome = s.on_animation_frame(ticket, 1020.0);
        assert!(matches!(outcome, FrameOutcome::Continue(_)));
        let p = s.state().projectile;
        assert!((p.velocity.y - 78.0).abs() < 1e-3);
        assert!((p.position.x - (start.x + 5.0)).abs() < 1e-3);
    }

    #[test]
    fn test_no_drag_while_in_flight() {
        let mut s = session();
        s.drag_start(Vec2::ZERO);
        s.drag_move(Vec2::new(10.0, -10.0));
        s.drag_end().unwrap();
        assert!(!s.drag_start(Vec2::ZERO));
        assert!(!s.is_dragging());
    }

    #[test]
    fn test_miss_alternates_players() {
        let mut s = session();
        for expected_next in [Player::Two, Player::One, Player::Two] {
            let thrower = s.state().current_player;
            s.drag_start(Vec2::ZERO);
            // Throw straight back over the thrower's own shoulder, off the frame
            let away = if thrower == Player::One { 400.0 } else { -400.0 };
            s.drag_move(Vec2::new(away, 300.0));
            let ticket = s.drag_end().unwrap();
            let result = fly(&mut s, ticket);
            assert!(matches!(result, TurnResult::Missed { next, .. } if next == expected_next));
            assert_eq!(s.state().current_player, expected_next);
            assert_eq!(s.state().phase, GamePhase::Aiming);
        }
    }

    #[test]
    fn test_building_miss_leaves_hole() {
        let mut s = session();
        s.drag_start(Vec2::ZERO);
        // Straight down onto the thrower's own roof
        s.drag_move(Vec2::new(0.0, -200.0));
        let ticket = s.drag_end().unwrap();
        let result = fly(&mut s, ticket);
        assert_eq!(
            result,
            TurnResult::Missed {
                miss: Miss::Building(1),
                next: Player::Two
            }
        );
        assert_eq!(s.state().blast_holes.len(), 1);
    }

    #[test]
    fn test_stale_ticket_after_new_game() {
        let mut s = session();
        s.drag_start(Vec2::ZERO);
        s.drag_move(Vec2::new(-50.0, 80.0));
        let ticket = s.drag_end().unwrap();
        s.new_game(99).unwrap();
        let snapshot = s.state().clone();
        assert_eq!(s.on_animation_frame(ticket, 10.0), FrameOutcome::Stale);
        assert_eq!(s.state().projectile, snapshot.projectile);
        assert_eq!(s.state().phase, GamePhase::Aiming);
        assert_eq!(s.state().seed, 99);
    }

    #[test]
    fn test_new_game_discards_drag() {
        let mut s = session();
        s.drag_start(Vec2::ZERO);
        s.new_game(5).unwrap();
        assert!(!s.is_dragging());
        assert_eq!(s.drag_end(), None);
    }

    #[test]
    fn test_resize_is_idempotent() {
        let mut s = session();
        let vp = Viewport::new(900.0, 500.0);
        s.resize(vp).unwrap();
        let (scale, hand) = (s.state().scale, s.state().projectile.position);
        s.resize(vp).unwrap();
        assert_eq!(s.state().scale, scale);
        assert_eq!(s.state().projectile.position, hand);
        let last = s.state().buildings.last().unwrap();
        assert!((scale * last.right() - 900.0).abs() < 1e-3);
    }

    #[test]
    fn test_resize_rejects_empty_viewport() {
        let mut s = session();
        let scale = s.state().scale;
        assert!(s.resize(Viewport::new(0.0, 0.0)).is_err());
        assert_eq!(s.state().scale, scale);
    }

    #[test]
    fn test_invalid_tuning_aborts() {
        let tuning = Tuning {
            building_count: 1,
            ..Default::default()
        };
        assert!(matches!(
            Session::new(tuning, Viewport::new(800.0, 600.0), 1),
            Err(DuelError::InvalidConfiguration { .. })
        ));
    }

    proptest::proptest! {
        #![proptest_config(proptest::prelude::ProptestConfig::with_cases(32))]
        #[test]
        fn prop_blast_holes_never_shrink(
            seed in proptest::prelude::any::<u64>(),
            drags in proptest::collection::vec((-300.0f32..300.0, -300.0f32..300.0), 1..6),
        ) {
            let mut s = Session::new(Tuning::default(), Viewport::new(1280.0, 720.0), seed).unwrap();
            let mut holes = 0;
            for (dx, dy) in drags {
                if s.state().phase != GamePhase::Aiming {
                    break;
                }
                let thrower = s.state().current_player;
                s.drag_start(Vec2::ZERO);
                s.drag_move(Vec2::new(dx, dy));
                let ticket = s.drag_end().unwrap();
                let result = fly(&mut s, ticket);
                proptest::prop_assert!(s.state().blast_holes.len() >= holes);
                holes = s.state().blast_holes.len();
                match result {
                    TurnResult::Missed { next, .. } => {
                        proptest::prop_assert_eq!(next, thrower.other());
                    }
                    TurnResult::Won { winner } => {
                        proptest::prop_assert_eq!(winner, thrower);
                        proptest::prop_assert_eq!(s.state().phase, GamePhase::Celebrating);
                    }
                }
            }
        }
    }

    #[test]
    fn test_winner_announcement_after_hit() {
        let mut s = session();
        assert_eq!(s.winner_announcement(), None);
        s.drag_start(Vec2::ZERO);
        let ticket = s.drag_end().unwrap();
        // Teleport the bomb onto player two's chest
        let chest = crate::sim::gorilla::anchor(Player::Two, &s.state().buildings)
            + Vec2::new(0.0, 40.0);
        s.state.projectile.position = chest;
        let FrameOutcome::Baseline(ticket) = s.on_animation_frame(ticket, 0.0) else {
            panic!("expected baseline");
        };
        let outcome = s.on_animation_frame(ticket, 1.0);
        assert_eq!(
            outcome,
            FrameOutcome::Resolved(TurnResult::Won {
                winner: Player::One
            })
        );
        assert_eq!(s.winner_announcement().as_deref(), Some("Player 1"));
        assert_eq!(s.on_animation_frame(ticket, 2.0), FrameOutcome::Stale);
        assert!(!s.drag_start(Vec2::ZERO));
    }
}
