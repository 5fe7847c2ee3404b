pub mod block;

pub use block::KinematicState;
