pub mod palette;
pub mod trajectory;

pub use palette::Palette;
pub use trajectory::{Sample, Segment, TrajectoryHistory};
