pub mod collision;
pub mod config;
pub mod error;
pub mod history;
pub mod integration;
pub mod objects;
pub mod plot;
pub mod world;

// Re-export key types for easier use
pub use collision::Wall;
pub use config::SimulationConfig;
pub use error::SimulationError;
pub use history::{Palette, Sample, Segment, TrajectoryHistory};
pub use integration::{StepOutcome, StepParams};
pub use objects::KinematicState;
pub use world::{Session, SessionPhase, Track};
