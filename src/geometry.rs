use crate::alphabet::{
    ControlPoint, Letter, LetterSegment, BASE_LINE, MIDDLE_LINE, TOP_LINE, UNDER_LINE,
};
use crate::error::{ScrivePadError, SpResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumString};
use tracing::warn;

/// A position on the drawing canvas. Pixel y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

impl PixelPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

pub type Polyline = Vec<PixelPoint>;

/// Renderable geometry: disjoint polylines, each a straight-line join of
/// consecutive points. The rendering layer decides how to execute it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathGeometry {
    pub polylines: Vec<Polyline>,
}

impl PathGeometry {
    pub fn polyline_count(&self) -> usize {
        self.polylines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty()
    }
}

/// How the anchor position relates to the letter: `Anchor` maps the letter
/// local origin onto it, `First` maps the first control point onto it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Reference {
    Anchor,
    First,
}

impl Reference {
    pub fn parse(s: &str) -> SpResult<Self> {
        Self::from_str(s).map_err(|_| {
            ScrivePadError::InvalidArgument(format!("Unknown reference mode '{}'", s))
        })
    }
}

/// The ruling's letter-local y values, bottom to top.
pub const RULING_LINES: [f32; 4] = [UNDER_LINE, BASE_LINE, MIDDLE_LINE, TOP_LINE];

/// Number of guide lines the ruling renderer actually supports.
pub const SUPPORTED_LINE_COUNT: usize = 4;

fn check_scale(scale: f32) -> SpResult<()> {
    if !(scale > 0.0) {
        return Err(ScrivePadError::InvalidArgument(format!(
            "Scale must be positive, got {}",
            scale
        )));
    }
    Ok(())
}

/// Builds the stroke geometry for `letter`, one polyline per segment.
///
/// `(x, y)` is the anchor position on the canvas and `scale` maps letter
/// local units to pixels. Letter-local y grows upward, so it is subtracted.
pub fn build_letter_path(
    letter: &Letter,
    x: f32,
    y: f32,
    scale: f32,
    reference: Reference,
) -> SpResult<PathGeometry> {
    check_scale(scale)?;
    if letter.segments.is_empty() {
        return Err(ScrivePadError::InvalidArgument(
            "Letter has no segments".to_string(),
        ));
    }
    if letter.segments.iter().any(|s| s.is_empty()) {
        return Err(ScrivePadError::InvalidArgument(
            "Letter has an empty segment".to_string(),
        ));
    }

    let (ox, oy) = match reference {
        Reference::Anchor => (0.0, 0.0),
        Reference::First => {
            let first = letter.first_point().ok_or_else(|| {
                ScrivePadError::InvalidArgument("Letter has no control points".to_string())
            })?;
            (first.x, first.y)
        }
    };

    let polylines = letter
        .segments
        .iter()
        .map(|segment| {
            segment
                .control_points
                .iter()
                .map(|p| PixelPoint::new(x + (p.x - ox) * scale, y - (p.y - oy) * scale))
                .collect()
        })
        .collect();

    Ok(PathGeometry { polylines })
}

/// Re-expresses `letter` in canvas pixels, anchor at `(x, y)`, so checker
/// thresholds can be interpreted in pixel units.
pub fn letter_on_canvas(letter: &Letter, x: f32, y: f32, scale: f32) -> SpResult<Letter> {
    let path = build_letter_path(letter, x, y, scale, Reference::Anchor)?;
    let segments = path
        .polylines
        .into_iter()
        .map(|polyline| {
            LetterSegment::new(
                polyline
                    .into_iter()
                    .map(|p| ControlPoint::new(p.x, p.y))
                    .collect(),
            )
        })
        .collect();
    Ok(Letter::new(segments))
}

/// Builds ruling geometry: horizontal guide lines starting at the under line
/// `(x, y)` and spanning `width` to the right, plus closing verticals.
///
/// Only 4 guide lines are supported; other requests are logged and rendered
/// as 4 anyway.
pub fn build_ruling_path(
    x: f32,
    y: f32,
    width: f32,
    scale: f32,
    line_count: usize,
) -> SpResult<PathGeometry> {
    check_scale(scale)?;
    if width < 0.0 {
        return Err(ScrivePadError::InvalidArgument(format!(
            "Ruling width must be non-negative, got {}",
            width
        )));
    }
    if line_count != SUPPORTED_LINE_COUNT {
        warn!(
            "Requested {} ruling lines, but only {} are supported; drawing {}.",
            line_count, SUPPORTED_LINE_COUNT, SUPPORTED_LINE_COUNT
        );
    }

    let x_begin = x;
    let x_end = x + width;
    let y_values: Vec<f32> = RULING_LINES.iter().map(|ly| y - ly * scale).collect();

    let mut polylines: Vec<Polyline> = y_values
        .iter()
        .map(|&ly| vec![PixelPoint::new(x_begin, ly), PixelPoint::new(x_end, ly)])
        .collect();
    for xv in [x_begin, x_end] {
        polylines.push(vec![
            PixelPoint::new(xv, y_values[0]),
            PixelPoint::new(xv, y_values[y_values.len() - 1]),
        ]);
    }

    Ok(PathGeometry { polylines })
}
