//! Errors reported at the session and configuration boundary.
//!
//! The integrator itself never fails; these only guard caller input.

#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Friction coefficient below zero would accelerate the block.
    NegativeFriction(f64),
    /// NaN or infinite value supplied for the named input.
    NonFiniteInput(&'static str),
    NonPositiveTimeStep(f64),
    NonPositiveGravity(f64),
    /// The block does not fit on the track.
    InvalidTrack { track_length: f64, block_length: f64 },
    ConfigIo(String),
    ConfigParse(String),
    EmptyPalette,
    /// A stored history breaks one of its structural invariants.
    InvalidHistory(&'static str),
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeFriction(mu) => write!(f, "negative friction coefficient: {mu}"),
            Self::NonFiniteInput(name) => write!(f, "non-finite value for {name}"),
            Self::NonPositiveTimeStep(dt) => write!(f, "time step must be positive, got {dt}"),
            Self::NonPositiveGravity(g) => write!(f, "gravity must be positive, got {g}"),
            Self::InvalidTrack {
                track_length,
                block_length,
            } => write!(
                f,
                "block of length {block_length} m does not fit on a {track_length} m track"
            ),
            Self::ConfigIo(e) => write!(f, "config read error: {e}"),
            Self::ConfigParse(e) => write!(f, "config parse error: {e}"),
            Self::EmptyPalette => write!(f, "palette must hold at least one color"),
            Self::InvalidHistory(reason) => write!(f, "invalid trajectory history: {reason}"),
        }
    }
}

impl std::error::Error for SimulationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_offending_value() {
        let err = SimulationError::NegativeFriction(-0.25);
        assert_eq!(err.to_string(), "negative friction coefficient: -0.25");

        let err = SimulationError::InvalidTrack { track_length: 1.0, block_length: 2.0 };
        assert!(err.to_string().contains("2 m"));
    }
}
