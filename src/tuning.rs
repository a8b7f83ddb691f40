//! Skyline generation tuning
//!
//! Defaults reproduce the classic layout: 11 background buildings behind
//! 8 gameplay buildings, gorillas on the 2nd and 7th.

use serde::{Deserialize, Serialize};

use crate::DuelError;

/// Inclusive sampling range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    fn validate(&self, what: &str) -> Result<(), DuelError> {
        if !(self.min.is_finite() && self.max.is_finite()) || self.min <= 0.0 || self.min > self.max
        {
            return Err(DuelError::config(format!(
                "{what} range must satisfy 0 < min <= max (got {}..{})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Data-driven skyline parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Background (decorative) ===
    pub background_count: usize,
    /// Left edge of the first background building
    pub background_start_x: f32,
    pub background_width: Range,
    pub background_height: Range,

    // === Gameplay buildings ===
    pub building_count: usize,
    pub building_width: Range,
    pub building_height: Range,
    /// Reduced height range for the two buildings hosting gorillas
    pub platform_height: Range,
    /// Chance that a window is lit
    pub light_probability: f64,
}

/// Fewest gameplay buildings that still seat two distinct gorillas, left then right
pub const MIN_BUILDING_COUNT: usize = 4;

impl Default for Tuning {
    fn default() -> Self {
        Self {
            background_count: 11,
            background_start_x: -30.0,
            background_width: Range::new(60.0, 110.0),
            background_height: Range::new(80.0, 350.0),

            building_count: 8,
            building_width: Range::new(80.0, 130.0),
            building_height: Range::new(40.0, 300.0),
            platform_height: Range::new(30.0, 150.0),
            light_probability: 0.33,
        }
    }
}

impl Tuning {
    /// Check every parameter before any world is generated
    pub fn validate(&self) -> Result<(), DuelError> {
        if self.building_count < MIN_BUILDING_COUNT {
            return Err(DuelError::config(format!(
                "need at least {MIN_BUILDING_COUNT} buildings to seat both players, got {}",
                self.building_count
            )));
        }
        if !self.background_start_x.is_finite() {
            return Err(DuelError::config("background start must be finite"));
        }
        self.background_width.validate("background width")?;
        self.background_height.validate("background height")?;
        self.building_width.validate("building width")?;
        self.building_height.validate("building height")?;
        self.platform_height.validate("platform height")?;
        if !(0.0..=1.0).contains(&self.light_probability) {
            return Err(DuelError::config(format!(
                "light probability must be within 0..=1, got {}",
                self.light_probability
            )));
        }
        Ok(())
    }

    /// Parse tuning from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, DuelError> {
        let tuning: Self =
            serde_json::from_str(json).map_err(|e| DuelError::TuningParse(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: &std::path::Path) -> Result<Self, DuelError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| DuelError::TuningParse(format!("{}: {e}", path.display())))?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }
}
