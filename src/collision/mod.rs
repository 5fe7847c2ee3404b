pub mod walls;

pub use walls::{resolve_walls, Wall};
