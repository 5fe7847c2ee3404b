use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::history::{Palette, Segment, TrajectoryHistory};
use crate::integration::{integrator, StepOutcome, StepParams};
use crate::objects::KinematicState;
use crate::world::Track;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Idle,
    Running,
}

/// One block on one track: the state being integrated and the history it
/// leaves behind.
pub struct Session {
    config: SimulationConfig,
    params: StepParams,
    palette: Palette,
    state: KinematicState,
    history: TrajectoryHistory,
}

impl Session {
    /// Creates an idle session with the block at rest against the left wall.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        let params = config.step_params();
        let palette = Palette::new(config.palette.clone())
            .ok_or(SimulationError::EmptyPalette)?;
        let history = TrajectoryHistory::new(0.0, palette.len());
        Ok(Self {
            config,
            params,
            palette,
            state: KinematicState::default(),
            history,
        })
    }

    /// Resets to `initial_velocity` and sets the block moving.
    pub fn start(&mut self, initial_velocity: f64) -> Result<(), SimulationError> {
        self.reset(initial_velocity)?;
        self.state.running = true;
        tracing::info!(initial_velocity, "Session started");
        Ok(())
    }

    /// Replaces the state and history with fresh ones seeded at
    /// `initial_velocity`. The running flag carries over, so resetting to zero
    /// mid-run makes the next step bring the session to idle.
    pub fn reset(&mut self, initial_velocity: f64) -> Result<(), SimulationError> {
        if !initial_velocity.is_finite() {
            return Err(SimulationError::NonFiniteInput("initial_velocity"));
        }
        let running = self.state.running;
        self.state = KinematicState { running, ..KinematicState::new(initial_velocity) };
        self.history.reset(initial_velocity);
        Ok(())
    }

    /// Returns the block to rest at the left wall and stops the session.
    pub fn stop(&mut self) {
        self.state = KinematicState::default();
        self.history.reset(0.0);
        tracing::info!("Session stopped");
    }

    /// Advances one frame with the given friction coefficient.
    ///
    /// Does nothing while idle. Accepted steps are appended to the history.
    pub fn step(&mut self, friction: f64) -> Result<StepOutcome, SimulationError> {
        if !friction.is_finite() {
            return Err(SimulationError::NonFiniteInput("friction"));
        }
        if friction < 0.0 {
            return Err(SimulationError::NegativeFriction(friction));
        }
        if !self.state.running {
            return Ok(StepOutcome::default());
        }

        let outcome = integrator::advance(&mut self.state, friction, &self.params);

        if !self.state.running {
            tracing::info!(
                time = self.state.time,
                position = self.state.position,
                samples = self.history.len(),
                "Block came to rest"
            );
            return Ok(outcome);
        }

        if outcome.accepted {
            self.history.record_state(&self.state, outcome.hit_wall);
        }
        if let Some(wall) = outcome.wall {
            tracing::debug!(
                ?wall,
                time = self.state.time,
                velocity = self.state.velocity,
                segments = self.history.segment_count(),
                "Wall collision"
            );
        }

        Ok(outcome)
    }

    /// Steps until the block rests or `max_steps` frames have run.
    /// Returns the number of frames stepped.
    pub fn run_until_rest(&mut self, friction: f64, max_steps: usize) -> Result<usize, SimulationError> {
        let mut steps = 0;
        while self.state.running && steps < max_steps {
            self.step(friction)?;
            steps += 1;
        }
        Ok(steps)
    }

    pub fn state(&self) -> &KinematicState {
        &self.state
    }

    pub fn history(&self) -> &TrajectoryHistory {
        &self.history
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn track(&self) -> &Track {
        &self.params.track
    }

    /// Chart color of a recorded segment.
    pub fn segment_color(&self, segment: &Segment) -> &str {
        self.palette.color(segment.color_index)
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn phase(&self) -> SessionPhase {
        if self.state.running {
            SessionPhase::Running
        } else {
            SessionPhase::Idle
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        let config = SimulationConfig::default();
        let params = config.step_params();
        let palette = Palette::default();
        let history = TrajectoryHistory::new(0.0, palette.len());
        Self {
            config,
            params,
            palette,
            state: KinematicState::default(),
            history,
        }
    }
}
