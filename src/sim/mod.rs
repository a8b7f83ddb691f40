//! Simulation module
//!
//! All gameplay logic lives here, free of rendering and platform concerns:
//! - Seeded RNG only (skyline generation)
//! - Buildings scanned in left-to-right order
//! - Gorillas derived from buildings, never stored

pub mod collision;
pub mod geometry;
pub mod gorilla;
pub mod skyline;
pub mod state;
pub mod tick;
pub mod turn;

pub use collision::{BuildingStrike, check_building_strike, check_frame_exit, check_gorilla_strike};
pub use geometry::QuadraticCurve;
pub use gorilla::{ArmPose, Silhouette};
pub use skyline::{calculate_scale, generate_skyline};
pub use state::{
    BackgroundBuilding, BlastHole, Building, GamePhase, GameState, Player, Projectile,
};
pub use tick::{Miss, StepOutcome, advance_flight, move_projectile, substep};
pub use turn::{TurnResult, enter_aiming, launch, resolve};
