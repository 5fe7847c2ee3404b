use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::objects::KinematicState;

/// One recorded point of the run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time: f64,
    pub velocity: f64,
    pub position: f64,
}

impl Sample {
    pub fn new(time: f64, velocity: f64, position: f64) -> Self {
        Sample { time, velocity, position }
    }
}

impl From<&KinematicState> for Sample {
    fn from(state: &KinematicState) -> Self {
        Sample::new(state.time, state.velocity, state.position)
    }
}

/// A travel leg between two wall collisions, drawn in one color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub color_index: usize,
    pub points: Vec<Sample>,
}

/// Time, velocity and position history of one run, split into segments at
/// every wall collision.
///
/// A closed segment ends with the collision sample twice: first with the
/// velocity before the reflection, then after it. The next segment starts at
/// the same sample with the reflected velocity. This keeps the velocity
/// reversal vertical on a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct TrajectoryHistory {
    samples: Vec<Sample>,
    segments: Vec<Segment>,
    color_index: usize,
    palette_len: usize,
}

#[derive(Deserialize)]
struct RawHistory {
    samples: Vec<Sample>,
    segments: Vec<Segment>,
    color_index: usize,
    palette_len: usize,
}

impl TryFrom<RawHistory> for TrajectoryHistory {
    type Error = SimulationError;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        if raw.palette_len == 0 {
            return Err(SimulationError::InvalidHistory("palette_len must be at least 1"));
        }
        if raw.color_index >= raw.palette_len {
            return Err(SimulationError::InvalidHistory("color_index outside the palette"));
        }
        if raw.samples.is_empty() {
            return Err(SimulationError::InvalidHistory("missing seed sample"));
        }
        if raw.segments.iter().any(|segment| segment.points.is_empty()) {
            return Err(SimulationError::InvalidHistory("empty segment"));
        }
        match raw.segments.last() {
            None => Err(SimulationError::InvalidHistory("no open segment")),
            Some(open) if open.color_index != raw.color_index => {
                Err(SimulationError::InvalidHistory("open segment color does not match color_index"))
            },
            Some(_) => Ok(TrajectoryHistory {
                samples: raw.samples,
                segments: raw.segments,
                color_index: raw.color_index,
                palette_len: raw.palette_len,
            }),
        }
    }
}

impl TrajectoryHistory {
    /// Creates a history seeded with `(0, initial_velocity, 0)`.
    ///
    /// `palette_len` is the number of colors segments cycle through; zero is
    /// treated as one.
    pub fn new(initial_velocity: f64, palette_len: usize) -> Self {
        let seed = Sample::new(0.0, initial_velocity, 0.0);
        TrajectoryHistory {
            samples: vec![seed],
            segments: vec![Segment { color_index: 0, points: vec![seed] }],
            color_index: 0,
            palette_len: palette_len.max(1),
        }
    }

    /// Discards the current run and starts over from a single seed sample.
    pub fn reset(&mut self, initial_velocity: f64) {
        *self = Self::new(initial_velocity, self.palette_len);
    }

    /// Appends an accepted step.
    ///
    /// `previous_velocity` is only used when `hit_wall` is set, to write the
    /// pre-reflection point that closes the current segment.
    pub fn record(&mut self, sample: Sample, previous_velocity: f64, hit_wall: bool) {
        self.samples.push(sample);

        if hit_wall {
            let before = Sample { velocity: previous_velocity, ..sample };
            let open = self.open_segment_mut();
            open.points.push(before);
            open.points.push(sample);

            self.color_index = (self.color_index + 1) % self.palette_len;
            self.segments.push(Segment {
                color_index: self.color_index,
                points: vec![sample],
            });
        } else {
            self.open_segment_mut().points.push(sample);
        }
    }

    /// Records the state left behind by an accepted integrator step.
    pub fn record_state(&mut self, state: &KinematicState, hit_wall: bool) {
        self.record(Sample::from(state), state.previous_velocity, hit_wall);
    }

    fn open_segment_mut(&mut self) -> &mut Segment {
        // `new` seeds one segment and nothing removes them
        let last = self.segments.len() - 1;
        &mut self.segments[last]
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn color_index(&self) -> usize {
        self.color_index
    }

    pub fn palette_len(&self) -> usize {
        self.palette_len
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Never true: a history always holds its seed sample.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Number of wall collisions recorded so far.
    pub fn collision_count(&self) -> usize {
        self.segments.len() - 1
    }

    /// Concatenates all segments, dropping the collision pair that closes each
    /// segment but the last. The result equals [`samples`](Self::samples).
    pub fn flatten_segments(&self) -> Vec<Sample> {
        let last = self.segments.len() - 1;
        self.segments
            .iter()
            .enumerate()
            .flat_map(|(i, segment)| {
                let keep = if i == last {
                    segment.points.len()
                } else {
                    segment.points.len().saturating_sub(2)
                };
                segment.points[..keep].iter().copied()
            })
            .collect()
    }
}
