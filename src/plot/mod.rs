pub mod chart;

pub use chart::{ChartBounds, Polyline, Viewport};
