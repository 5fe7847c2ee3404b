use serde::{Deserialize, Serialize};

/// The bounded one-dimensional track the block slides on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Distance between the two walls (m).
    pub length: f64,
    /// Extent of the block along the track (m).
    pub block_length: f64,
    /// Drawing scale; 1.0 until set with [`with_pixels_per_meter`](Self::with_pixels_per_meter).
    pub pixels_per_meter: f64,
}

impl Track {
    pub fn new(length: f64, block_length: f64) -> Self {
        Track { length, block_length, pixels_per_meter: 1.0 }
    }

    pub fn with_pixels_per_meter(self, pixels_per_meter: f64) -> Self {
        Track { pixels_per_meter, ..self }
    }

    /// Largest position the block's left edge may take.
    pub fn max_position(&self) -> f64 {
        self.length - self.block_length
    }

    /// Checks whether a block at `position` lies fully between the walls.
    pub fn contains(&self, position: f64) -> bool {
        position >= 0.0 && position <= self.max_position()
    }

    /// Converts a track position to a horizontal pixel offset.
    pub fn to_pixels(&self, position: f64) -> f64 {
        position * self.pixels_per_meter
    }

    /// Drawn size of the block (px).
    pub fn block_pixels(&self) -> f64 {
        self.to_pixels(self.block_length)
    }
}
