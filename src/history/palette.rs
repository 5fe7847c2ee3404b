//! Segment colors for the velocity charts.

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;

/// Default chart colors, one per travel leg, cycled after the last.
pub const DEFAULT_COLORS: [&str; 5] = ["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd"];

/// Non-empty list of colors. Deserializing an empty list fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPalette")]
pub struct Palette {
    colors: Vec<String>,
}

#[derive(Deserialize)]
struct RawPalette {
    colors: Vec<String>,
}

impl TryFrom<RawPalette> for Palette {
    type Error = SimulationError;

    fn try_from(raw: RawPalette) -> Result<Self, Self::Error> {
        Palette::new(raw.colors).ok_or(SimulationError::EmptyPalette)
    }
}

impl Palette {
    /// Builds a palette from the given colors. Returns `None` when `colors` is empty.
    pub fn new(colors: Vec<String>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Palette { colors })
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for a segment index; wraps around the palette.
    pub fn color(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_wraps() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 5);
        assert_eq!(palette.color(0), "#1f77b4");
        assert_eq!(palette.color(4), "#9467bd");
        assert_eq!(palette.color(5), "#1f77b4");
        assert_eq!(palette.color(7), "#2ca02c");
    }

    #[test]
    fn test_empty_palette_rejected() {
        assert!(Palette::new(Vec::new()).is_none());
        let single = Palette::new(vec!["black".to_string()]).unwrap();
        assert_eq!(single.color(3), "black");
    }

    #[test]
    fn test_deserialize_rejects_empty_palette() {
        let result = serde_json::from_str::<Palette>(r#"{"colors":[]}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("at least one color"), "unexpected error: {err}");

        let palette: Palette = serde_json::from_str(r#"{"colors":["red","blue"]}"#).unwrap();
        assert_eq!(palette.color(3), "blue");
        let back: Palette = serde_json::from_str(&serde_json::to_string(&Palette::default()).unwrap()).unwrap();
        assert_eq!(back, Palette::default());
    }
}
