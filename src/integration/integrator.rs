use serde::{Deserialize, Serialize};

use crate::collision::walls::{resolve_walls, Wall};
use crate::objects::KinematicState;
use crate::world::Track;

/// Fixed inputs of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepParams {
    pub dt: f64,
    pub gravity: f64,
    pub track: Track,
}

/// What happened during one call to [`advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StepOutcome {
    /// The block was reflected by a wall this step.
    pub hit_wall: bool,
    /// Time advanced and the new state should be recorded.
    pub accepted: bool,
    pub wall: Option<Wall>,
}

/// Advances the block by one step of kinetic friction using Semi-Implicit Euler.
///
/// Inputs are not validated: a negative `friction` accelerates the block and a
/// non-positive `params.dt` runs time backwards.
pub fn advance(state: &mut KinematicState, friction: f64, params: &StepParams) -> StepOutcome {
    if state.is_at_rest() {
        state.running = false;
        return StepOutcome::default();
    }

    state.previous_velocity = state.velocity;

    // Kinetic friction opposes the direction of motion
    let acceleration = if state.velocity == 0.0 {
        0.0
    } else if state.velocity > 0.0 {
        -friction * params.gravity
    } else {
        friction * params.gravity
    };

    // v first, then x with the new v
    state.velocity += acceleration * params.dt;
    state.position += state.velocity * params.dt;

    // Friction alone can stop the block but never reverse it
    if crossed_zero(state.previous_velocity, state.velocity) {
        state.velocity = 0.0;
    }

    let wall = resolve_walls(state, &params.track);

    let accepted = state.velocity != 0.0 || state.previous_velocity != 0.0;
    if accepted {
        state.time += params.dt;
    }

    StepOutcome {
        hit_wall: wall.is_some(),
        accepted,
        wall,
    }
}

/// Pure form of [`advance`]: returns the next state instead of mutating.
pub fn step(state: KinematicState, friction: f64, params: &StepParams) -> (KinematicState, StepOutcome) {
    let mut next = state;
    let outcome = advance(&mut next, friction, params);
    (next, outcome)
}

fn crossed_zero(before: f64, after: f64) -> bool {
    (before > 0.0 && after < 0.0) || (before < 0.0 && after > 0.0)
}
