use serde::{Deserialize, Serialize};

/// Kinematic state of the sliding block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicState {
    // Primary state
    pub time: f64,     // Seconds since the last reset
    pub position: f64, // Left edge of the block, meters from the left wall
    pub velocity: f64, // Meters per second, signed

    /// Velocity before the current step's update. Only used to spot a sign flip
    /// and to plot the pre-collision point.
    pub previous_velocity: f64,
    /// Velocity at the last reset, kept for chart scaling.
    pub initial_velocity: f64,
    pub running: bool,
}

impl KinematicState {
    /// Creates a block at the left wall moving at `initial_velocity`.
    /// The block is not running until the session starts it.
    pub fn new(initial_velocity: f64) -> Self {
        Self {
            time: 0.0,
            position: 0.0,
            velocity: initial_velocity,
            previous_velocity: initial_velocity,
            initial_velocity,
            running: false,
        }
    }

    /// True when both the current and previous velocity are exactly zero.
    pub fn is_at_rest(&self) -> bool {
        self.velocity == 0.0 && self.previous_velocity == 0.0
    }

    /// Kinetic energy per unit mass.
    pub fn specific_kinetic_energy(&self) -> f64 {
        0.5 * self.velocity * self.velocity
    }
}

impl Default for KinematicState {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_block_state() {
        let state = KinematicState::new(-3.0);
        assert_eq!(state.time, 0.0);
        assert_eq!(state.position, 0.0);
        assert_eq!(state.velocity, -3.0);
        assert_eq!(state.previous_velocity, -3.0);
        assert_eq!(state.initial_velocity, -3.0);
        assert!(!state.running);
        assert!(!state.is_at_rest());
    }

    #[test]
    fn test_default_is_at_rest() {
        let state = KinematicState::default();
        assert!(state.is_at_rest());
        assert_eq!(state.specific_kinetic_energy(), 0.0);
    }

    #[test]
    fn test_rest_needs_both_velocities_zero() {
        let state = KinematicState { velocity: 0.0, previous_velocity: 0.2, ..KinematicState::new(1.0) };
        assert!(!state.is_at_rest());
    }
}
