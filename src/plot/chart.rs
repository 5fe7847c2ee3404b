//! Chart scaling for the velocity/time and velocity/position plots.
//!
//! Nothing here draws. The functions turn a [`TrajectoryHistory`] into
//! per-segment polylines and map them into a padded pixel viewport; the
//! drawing surface is up to the caller.

use serde::{Deserialize, Serialize};

use crate::history::{Sample, TrajectoryHistory};

/// Smallest velocity half-range shown on the velocity axis (m/s).
pub const MIN_VELOCITY_RANGE: f64 = 5.0;
/// Smallest time range shown on the time axis (s).
pub const MIN_TIME_RANGE: f64 = 3.0;

/// Data-space extent of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ChartBounds {
    /// Fraction of the way down from the top at which y = 0 sits, clamped to
    /// the chart edges when zero is out of range.
    pub fn zero_line(&self) -> f64 {
        if self.y_max < 0.0 {
            0.0
        } else if self.y_min > 0.0 {
            1.0
        } else {
            self.y_max / (self.y_max - self.y_min)
        }
    }
}

fn velocity_range(initial_velocity: f64) -> f64 {
    initial_velocity.abs().max(MIN_VELOCITY_RANGE)
}

/// Bounds of the velocity over time chart. The time axis grows with the run.
pub fn velocity_time_bounds(initial_velocity: f64, time: f64) -> ChartBounds {
    let v_max = velocity_range(initial_velocity);
    ChartBounds {
        x_min: 0.0,
        x_max: time.max(MIN_TIME_RANGE),
        y_min: -v_max,
        y_max: v_max,
    }
}

/// Bounds of the velocity over position chart, spanning the whole track.
pub fn velocity_position_bounds(initial_velocity: f64, track_length: f64) -> ChartBounds {
    let v_max = velocity_range(initial_velocity);
    ChartBounds {
        x_min: 0.0,
        x_max: track_length,
        y_min: -v_max,
        y_max: v_max,
    }
}

/// Linearly maps `value` from `[min_val, max_val]` onto `[min_px, max_px]`.
/// A zero-width input range maps to the middle of the output range.
pub fn map_coords(value: f64, min_val: f64, max_val: f64, min_px: f64, max_px: f64) -> f64 {
    if max_val - min_val == 0.0 {
        return (min_px + max_px) / 2.0;
    }
    (value - min_val) / (max_val - min_val) * (max_px - min_px) + min_px
}

/// Pixel area a chart is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// Margin kept free on every side for axis labels.
    pub padding: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport { width: 400.0, height: 200.0, padding: 30.0 }
    }
}

impl Viewport {
    /// Maps a data point to pixels. The y axis points down, as on a canvas.
    pub fn project(&self, bounds: &ChartBounds, x: f64, y: f64) -> (f64, f64) {
        let px = map_coords(x, bounds.x_min, bounds.x_max, self.padding, self.width - self.padding);
        let py = map_coords(y, bounds.y_min, bounds.y_max, self.height - self.padding, self.padding);
        (px, py)
    }

    /// Pixel row of the horizontal axis.
    pub fn zero_row(&self, bounds: &ChartBounds) -> f64 {
        self.padding + bounds.zero_line() * (self.height - 2.0 * self.padding)
    }

    pub fn project_polyline(&self, bounds: &ChartBounds, line: &Polyline) -> Polyline {
        Polyline {
            color_index: line.color_index,
            points: line.points.iter().map(|&(x, y)| self.project(bounds, x, y)).collect(),
        }
    }
}

/// One segment of a chart, in a single color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub color_index: usize,
    pub points: Vec<(f64, f64)>,
}

fn series(history: &TrajectoryHistory, axes: impl Fn(&Sample) -> (f64, f64)) -> Vec<Polyline> {
    history
        .segments()
        .iter()
        .map(|segment| Polyline {
            color_index: segment.color_index,
            points: segment.points.iter().map(&axes).collect(),
        })
        .collect()
}

/// Velocity against time, one polyline per segment.
pub fn velocity_time_series(history: &TrajectoryHistory) -> Vec<Polyline> {
    series(history, |s| (s.time, s.velocity))
}

/// Velocity against position, one polyline per segment.
pub fn velocity_position_series(history: &TrajectoryHistory) -> Vec<Polyline> {
    series(history, |s| (s.position, s.velocity))
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_velocity_axis_has_minimum_range() {
        let bounds = velocity_time_bounds(2.0, 0.5);
        assert_eq!(bounds.y_max, 5.0);
        assert_eq!(bounds.y_min, -5.0);
        assert_eq!(bounds.x_max, 3.0);

        let bounds = velocity_time_bounds(-8.0, 4.2);
        assert_eq!(bounds.y_max, 8.0);
        assert_eq!(bounds.x_max, 4.2);
    }

    #[test]
    fn test_position_axis_spans_track() {
        let bounds = velocity_position_bounds(1.0, 20.0);
        assert_eq!(bounds.x_min, 0.0);
        assert_eq!(bounds.x_max, 20.0);
    }

    #[test]
    fn test_map_coords() {
        assert!((map_coords(5.0, 0.0, 10.0, 30.0, 370.0) - 200.0).abs() < EPSILON);
        assert!((map_coords(0.0, 0.0, 10.0, 30.0, 370.0) - 30.0).abs() < EPSILON);
        // Inverted output range, as for a canvas y axis
        assert!((map_coords(5.0, -5.0, 5.0, 170.0, 30.0) - 30.0).abs() < EPSILON);
        // Degenerate input range
        assert!((map_coords(7.0, 1.0, 1.0, 0.0, 100.0) - 50.0).abs() < EPSILON);
    }

    #[test]
    fn test_zero_line() {
        let symmetric = ChartBounds { x_min: 0.0, x_max: 1.0, y_min: -5.0, y_max: 5.0 };
        assert!((symmetric.zero_line() - 0.5).abs() < EPSILON);
        let positive = ChartBounds { y_min: 1.0, ..symmetric };
        assert_eq!(positive.zero_line(), 1.0);
        let negative = ChartBounds { y_max: -1.0, ..symmetric };
        assert_eq!(negative.zero_line(), 0.0);

        let viewport = Viewport::default();
        assert!((viewport.zero_row(&symmetric) - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_project_corners() {
        let viewport = Viewport::default();
        let bounds = velocity_time_bounds(5.0, 3.0);
        let (x, y) = viewport.project(&bounds, 0.0, 5.0);
        assert!((x - 30.0).abs() < EPSILON);
        assert!((y - 30.0).abs() < EPSILON);
        let (x, y) = viewport.project(&bounds, 3.0, -5.0);
        assert!((x - 370.0).abs() < EPSILON);
        assert!((y - 170.0).abs() < EPSILON);
    }

    #[test]
    fn test_series_follow_segments() {
        let mut history = TrajectoryHistory::new(2.0, 5);
        history.record(Sample::new(0.5, 2.0, 1.0), 2.0, false);
        history.record(Sample::new(1.0, -2.0, 2.0), 2.0, true);
        history.record(Sample::new(1.5, -2.0, 1.0), -2.0, false);

        let vt = velocity_time_series(&history);
        assert_eq!(vt.len(), 2);
        assert_eq!(vt[0].color_index, 0);
        assert_eq!(vt[1].color_index, 1);
        // Vertical drop at the collision time
        assert_eq!(vt[0].points[2], (1.0, 2.0));
        assert_eq!(vt[0].points[3], (1.0, -2.0));

        let vx = velocity_position_series(&history);
        assert_eq!(vx[1].points, vec![(2.0, -2.0), (1.0, -2.0)]);

        let bounds = velocity_position_bounds(2.0, 20.0);
        let projected = Viewport::default().project_polyline(&bounds, &vx[1]);
        assert_eq!(projected.points.len(), 2);
        assert_eq!(projected.color_index, 1);
    }
}
