//! Game state and core simulation types
//!
//! Everything the renderer needs for a frame lives here. Gorillas are not
//! stored: they are derived from the buildings (see `gorilla`).

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::{gorilla, skyline};
use crate::hud::AimReadout;
use crate::tuning::Tuning;
use crate::{DuelError, Viewport};

/// Current phase of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Current player may drag to set the launch velocity
    Aiming,
    /// Bomb is flying
    InFlight,
    /// Someone was hit; terminal for the session
    Celebrating,
}

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 1-based number for display
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Slot in per-player arrays
    pub fn index(self) -> usize {
        self.number() as usize - 1
    }

    /// Spin direction of this player's throws (player one spins clockwise)
    pub fn spin_direction(self) -> f32 {
        match self {
            Player::One => -1.0,
            Player::Two => 1.0,
        }
    }
}

/// The thrown bomb
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Projectile {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Radians
    pub rotation: f32,
}

/// A gameplay building (collidable, hosts gorillas)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub x: f32,
    pub width: f32,
    pub height: f32,
    /// Window lit flags, row-major
    pub lights: Vec<bool>,
}

impl Building {
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top-center point, where a gorilla stands
    #[inline]
    pub fn roof_center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.height)
    }
}

/// A decorative background building
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BackgroundBuilding {
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

/// A crater punched into the skyline (radius is `BLAST_HOLE_RADIUS`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlastHole {
    pub position: Vec2,
}

/// Complete game state for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the skyline was generated from
    pub seed: u64,
    pub phase: GamePhase,
    pub current_player: Player,
    pub projectile: Projectile,
    pub background_buildings: Vec<BackgroundBuilding>,
    /// Left to right
    pub buildings: Vec<Building>,
    /// Append-only
    pub blast_holes: Vec<BlastHole>,
    /// Pixels per world unit
    pub scale: f32,
    pub viewport: Viewport,
    /// Last aim shown for each player
    pub readouts: [AimReadout; 2],
}

impl GameState {
    /// Generate a fresh skyline from `seed` and enter aiming for player one
    pub fn new(seed: u64, tuning: &Tuning, viewport: Viewport) -> Result<Self, DuelError> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let (background, buildings) = skyline::generate_skyline(&mut rng, tuning)?;
        let mut state = Self::from_layout(background, buildings, viewport)?;
        state.seed = seed;
        Ok(state)
    }

    /// Build a state around an existing layout (aiming, player one, no holes)
    pub fn from_layout(
        background_buildings: Vec<BackgroundBuilding>,
        buildings: Vec<Building>,
        viewport: Viewport,
    ) -> Result<Self, DuelError> {
        if buildings.len() < crate::tuning::MIN_BUILDING_COUNT {
            return Err(DuelError::config(format!(
                "layout has {} buildings, need at least {}",
                buildings.len(),
                crate::tuning::MIN_BUILDING_COUNT
            )));
        }
        viewport.validate()?;

        let mut state = Self {
            seed: 0,
            phase: GamePhase::Aiming,
            current_player: Player::One,
            projectile: Projectile::default(),
            background_buildings,
            buildings,
            blast_holes: Vec::new(),
            scale: 1.0,
            viewport,
            readouts: [AimReadout::default(); 2],
        };
        state.scale = skyline::calculate_scale(&state.buildings, viewport.width);
        state.seat_projectile();
        Ok(state)
    }

    /// Adopt a new viewport and re-derive the scale
    pub fn rescale(&mut self, viewport: Viewport) -> Result<(), DuelError> {
        viewport.validate()?;
        self.viewport = viewport;
        self.scale = skyline::calculate_scale(&self.buildings, viewport.width);
        Ok(())
    }

    /// Width of the playfield in world units
    #[inline]
    pub fn world_width(&self) -> f32 {
        self.viewport.width / self.scale
    }

    /// Put the bomb back in the current player's hand, at rest
    pub fn seat_projectile(&mut self) {
        self.projectile = Projectile {
            position: gorilla::hand_position(self.current_player, &self.buildings),
            velocity: Vec2::ZERO,
            rotation: 0.0,
        };
    }

    /// Whether `point` lies within an existing crater
    pub fn in_blast_hole(&self, point: Vec2) -> bool {
        self.blast_holes
            .iter()
            .any(|hole| hole.position.distance(point) < crate::consts::BLAST_HOLE_RADIUS)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Eight flat buildings 100 wide and 100 tall, 4 apart
    pub fn flat_buildings() -> Vec<Building> {
        (0..8)
            .map(|i| Building {
                x: i as f32 * 104.0,
                width: 100.0,
                height: 100.0,
                lights: vec![false; crate::consts::LIGHT_PATTERN_LEN],
            })
            .collect()
    }

    /// Viewport at scale 1 over the flat layout
    pub fn flat_viewport() -> Viewport {
        Viewport::new(828.0, 600.0)
    }

    pub fn flat_state() -> GameState {
        GameState::from_layout(Vec::new(), flat_buildings(), flat_viewport()).unwrap()
    }
}
