//! Elastic reflection at the two ends of the track.

use serde::{Deserialize, Serialize};

use crate::objects::KinematicState;
use crate::world::Track;

/// Which end of the track was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Left,
    Right,
}

/// Clamps the block back onto the track and reverses its velocity if it has
/// crossed a wall. The right wall is checked first; at most one wall is
/// resolved per call, so velocity flips at most once.
pub fn resolve_walls(state: &mut KinematicState, track: &Track) -> Option<Wall> {
    if state.position + track.block_length > track.length {
        state.position = track.max_position();
        state.velocity = -state.velocity;
        Some(Wall::Right)
    } else if state.position < 0.0 {
        state.position = 0.0;
        state.velocity = -state.velocity;
        Some(Wall::Left)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moving(position: f64, velocity: f64) -> KinematicState {
        KinematicState { position, velocity, ..KinematicState::new(velocity) }
    }

    #[test]
    fn test_no_contact_inside_track() {
        let track = Track::new(20.0, 1.0);
        let mut state = moving(10.0, 3.0);
        assert_eq!(resolve_walls(&mut state, &track), None);
        assert_eq!(state.position, 10.0);
        assert_eq!(state.velocity, 3.0);
    }

    #[test]
    fn test_right_wall_reflects() {
        let track = Track::new(20.0, 1.0);
        let mut state = moving(19.2, 4.0);
        assert_eq!(resolve_walls(&mut state, &track), Some(Wall::Right));
        assert_eq!(state.position, 19.0);
        assert_eq!(state.velocity, -4.0);
    }

    #[test]
    fn test_left_wall_reflects() {
        let track = Track::new(20.0, 1.0);
        let mut state = moving(-0.05, -2.5);
        assert_eq!(resolve_walls(&mut state, &track), Some(Wall::Left));
        assert_eq!(state.position, 0.0);
        assert_eq!(state.velocity, 2.5);
    }

    #[test]
    fn test_touching_right_wall_is_not_a_hit() {
        let track = Track::new(20.0, 1.0);
        let mut state = moving(19.0, 1.0);
        assert_eq!(resolve_walls(&mut state, &track), None);
    }

    #[test]
    fn test_zero_width_track_flips_once() {
        // Block as long as the track: any motion hits, but only one wall resolves
        let track = Track::new(1.0, 1.0);
        let mut state = moving(0.1, 2.0);
        assert_eq!(resolve_walls(&mut state, &track), Some(Wall::Right));
        assert_eq!(state.position, 0.0);
        assert_eq!(state.velocity, -2.0);
    }
}
