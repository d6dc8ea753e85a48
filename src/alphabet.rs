use crate::error::{ScrivePadError, SpResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

// Four-line ruling (under, base, middle, top). Letter-local y values.
pub const UNDER_LINE: f32 = 0.0;
pub const BASE_LINE: f32 = 1.0 / 3.0;
pub const MIDDLE_LINE: f32 = 2.0 / 3.0;
pub const TOP_LINE: f32 = 1.0;

/// A waypoint in letter-local coordinates. The leftmost point of the letter,
/// projected onto the under line, is `(0, 0)`; x grows rightward, y upward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub x: f32,
    pub y: f32,
}

impl ControlPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One continuous pen stroke: control points visited in listed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetterSegment {
    pub control_points: Vec<ControlPoint>,
}

impl LetterSegment {
    pub fn new(control_points: Vec<ControlPoint>) -> Self {
        Self { control_points }
    }

    pub fn len(&self) -> usize {
        self.control_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.control_points.is_empty()
    }
}

/// A letter as ordered segments; the pen lifts between segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Letter {
    pub segments: Vec<LetterSegment>,
}

impl Letter {
    pub fn new(segments: Vec<LetterSegment>) -> Self {
        Self { segments }
    }

    /// First control point of the first segment.
    pub fn first_point(&self) -> Option<ControlPoint> {
        self.segments
            .first()
            .and_then(|s| s.control_points.first())
            .copied()
    }

    pub fn point_count(&self) -> usize {
        self.segments.iter().map(|s| s.len()).sum()
    }

    /// A usable letter has at least one segment, no empty segments and only
    /// finite coordinates.
    pub fn validate(&self) -> SpResult<()> {
        if self.segments.is_empty() {
            return Err(ScrivePadError::Validation(
                "Letter has no segments".to_string(),
            ));
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if segment.is_empty() {
                return Err(ScrivePadError::Validation(format!(
                    "Segment {} has no control points",
                    i
                )));
            }
            for p in &segment.control_points {
                if !p.x.is_finite() || !p.y.is_finite() {
                    return Err(ScrivePadError::Validation(format!(
                        "Segment {} contains a non-finite control point ({}, {})",
                        i, p.x, p.y
                    )));
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AlphabetMeta {
    pub name: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub notes: String,
}

/// A loadable bundle of letter definitions, keyed by identifier (e.g. "A").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlphabetDefinition {
    #[serde(default)]
    pub meta: AlphabetMeta,
    pub letters: HashMap<String, Letter>,
}

impl AlphabetDefinition {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SpResult<Self> {
        let content = fs::read_to_string(path)?;
        let def: AlphabetDefinition = serde_json::from_str(&content)?;
        for (ident, letter) in &def.letters {
            letter.validate().map_err(|e| {
                ScrivePadError::Validation(format!("Letter '{}': {}", ident, e))
            })?;
        }
        Ok(def)
    }

    pub fn get(&self, identifier: &str) -> Option<&Letter> {
        self.letters.get(identifier)
    }

    pub fn identifiers(&self) -> Vec<&String> {
        let mut names: Vec<_> = self.letters.keys().collect();
        names.sort();
        names
    }
}
