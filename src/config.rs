use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::history::palette::DEFAULT_COLORS;
use crate::integration::StepParams;
use crate::world::Track;

/// Gravitational acceleration (m/s^2).
pub const GRAVITY: f64 = 9.81;
/// Fixed simulation time step (s), one frame at 60 Hz.
pub const TIME_STEP: f64 = 1.0 / 60.0;
/// Track length (m).
pub const TRACK_LENGTH: f64 = 20.0;
/// Width of the drawing surface the track is scaled onto (px).
pub const CANVAS_WIDTH_PX: f64 = 800.0;
/// Side of the drawn block (px).
pub const BLOCK_SIZE_PX: f64 = 40.0;

const CONFIG_ENV_VAR: &str = "FRICTION_TRACK_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/friction_track.toml";

/// Simulation parameters, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub gravity: f64,
    pub time_step: f64,
    pub track_length: f64,
    pub canvas_width_px: f64,
    pub block_size_px: f64,
    /// Segment colors, cycled once per wall collision.
    pub palette: Vec<String>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            time_step: TIME_STEP,
            track_length: TRACK_LENGTH,
            canvas_width_px: CANVAS_WIDTH_PX,
            block_size_px: BLOCK_SIZE_PX,
            palette: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl SimulationConfig {
    /// Load config from the TOML file named by `FRICTION_TRACK_CONFIG`.
    /// Falls back to defaults if the file is missing, unparseable or invalid.
    pub fn load() -> Self {
        let path = std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        match Self::from_path(&path) {
            Ok(cfg) => cfg,
            Err(SimulationError::ConfigIo(_)) => Self::default(),
            Err(e) => {
                tracing::warn!("Failed to load {path}: {e}, using defaults");
                Self::default()
            },
        }
    }

    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, SimulationError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SimulationError::ConfigIo(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, SimulationError> {
        let cfg: Self =
            toml::from_str(content).map_err(|e| SimulationError::ConfigParse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let finite = [
            ("gravity", self.gravity),
            ("time_step", self.time_step),
            ("track_length", self.track_length),
            ("canvas_width_px", self.canvas_width_px),
            ("block_size_px", self.block_size_px),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(SimulationError::NonFiniteInput(name));
            }
        }
        if self.time_step <= 0.0 {
            return Err(SimulationError::NonPositiveTimeStep(self.time_step));
        }
        if self.gravity <= 0.0 {
            return Err(SimulationError::NonPositiveGravity(self.gravity));
        }
        if self.palette.is_empty() {
            return Err(SimulationError::ConfigParse("palette must not be empty".into()));
        }
        let block_length = self.block_length();
        if self.track_length <= 0.0
            || self.canvas_width_px <= 0.0
            || block_length < 0.0
            || block_length > self.track_length
        {
            return Err(SimulationError::InvalidTrack {
                track_length: self.track_length,
                block_length,
            });
        }
        Ok(())
    }

    pub fn pixels_per_meter(&self) -> f64 {
        self.canvas_width_px / self.track_length
    }

    /// Block length in track units, derived from its drawn size.
    pub fn block_length(&self) -> f64 {
        self.block_size_px / self.pixels_per_meter()
    }

    pub fn track(&self) -> Track {
        Track::new(self.track_length, self.block_length()).with_pixels_per_meter(self.pixels_per_meter())
    }

    pub fn step_params(&self) -> StepParams {
        StepParams {
            dt: self.time_step,
            gravity: self.gravity,
            track: self.track(),
        }
    }
}
