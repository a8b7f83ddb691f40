//! Rooftop Duel - a two-player artillery game over a destructible skyline
//!
//! Core modules:
//! - `sim`: Simulation (skyline generation, flight integration, collisions, turns)
//! - `session`: Session handle (new game, input, frame scheduling)
//! - `renderer`: Display list for an external drawing backend
//! - `hud`: Aim readouts, grab area and winner announcement
//! - `tuning`: Data-driven skyline generation parameters

pub mod error;
pub mod hud;
pub mod renderer;
pub mod session;
pub mod sim;
pub mod tuning;

pub use error::DuelError;
pub use session::{FrameOutcome, FrameTicket, Session};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Number of equal sub-steps each animation frame is split into
    pub const HIT_DETECTION_SUBSTEPS: u32 = 10;
    /// Milliseconds of elapsed time per unit of integration multiplier
    pub const TIME_SCALE_MS: f32 = 200.0;

    /// Downward acceleration (world units per multiplier unit squared)
    pub const GRAVITY: f32 = 20.0;
    /// Bomb spin rate (radians per multiplier unit)
    pub const SPIN_RATE: f32 = 5.0;

    /// Half-width of the square used for bomb vs building overlap
    pub const PROJECTILE_HALF_EXTENT: f32 = 4.0;
    /// Radius of a blast crater
    pub const BLAST_HOLE_RADIUS: f32 = 18.0;

    /// Horizontal gap between neighbouring buildings
    pub const BUILDING_GAP: f32 = 4.0;
    /// Window slots per gameplay building
    pub const LIGHT_PATTERN_LEN: usize = 50;

    /// Throwing hand, relative to the gorilla anchor
    pub const HAND_OFFSET_X: f32 = 28.0;
    pub const HAND_OFFSET_Y: f32 = 107.0;

    /// Arm stroke width (drawn and hit-tested)
    pub const ARM_STROKE_WIDTH: f32 = 18.0;
    /// The aiming arm trails the drag by velocity / this
    pub const AIM_ARM_DIVISOR: f32 = 6.25;
}

/// Drawing surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Rejects empty or non-finite surfaces
    pub fn validate(&self) -> Result<(), DuelError> {
        if self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
        {
            Ok(())
        } else {
            Err(DuelError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Map a world point (y up) to a surface pixel (y down)
#[inline]
pub fn world_to_screen(point: Vec2, scale: f32, viewport: Viewport) -> Vec2 {
    Vec2::new(point.x * scale, viewport.height - point.y * scale)
}
