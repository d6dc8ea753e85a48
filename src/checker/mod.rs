pub mod cursor;
pub mod physics;

pub use cursor::TraceCursor;

use crate::alphabet::Letter;
use crate::config::CheckerParams;
use crate::error::{ScrivePadError, SpResult};
use serde::{Deserialize, Serialize};

/// Per-point verdict. Ordered by severity, so `Good < Suboptimal < Bad`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DrawQuality {
    Good,
    Suboptimal,
    Bad,
}

/// Classifies a deviation distance. Thresholds are strict upper bounds and
/// must satisfy `suboptimal_distance < bad_distance` (caller's contract).
pub fn classify_distance(distance: f32, params: &CheckerParams) -> DrawQuality {
    if distance < params.suboptimal_distance {
        return DrawQuality::Good;
    }
    if distance < params.bad_distance {
        return DrawQuality::Suboptimal;
    }
    DrawQuality::Bad
}

/// Deviation of `(x, y)` from the cursor's current target: point distance for
/// a bare target, perpendicular line distance for a line-connected one.
pub fn target_distance(
    letter: &Letter,
    cursor: TraceCursor,
    x: f32,
    y: f32,
) -> SpResult<f32> {
    let next = cursor.next_control_point(letter);
    if cursor.next_on_line {
        let last = cursor.last_control_point(letter).ok_or_else(|| {
            ScrivePadError::IllegalState(
                "Line target without a reached control point".to_string(),
            )
        })?;
        Ok(physics::distance_to_line(x, y, last, next))
    } else {
        Ok(physics::distance_to_point(x, y, next))
    }
}

/// Pure transition: classifies one drawn point and advances the cursor when
/// the point lands within the good threshold of its target control point.
/// Returns the follow-up cursor together with the verdict.
pub fn evaluate(
    letter: &Letter,
    cursor: TraceCursor,
    x: f32,
    y: f32,
    params: &CheckerParams,
) -> SpResult<(TraceCursor, DrawQuality)> {
    let verdict = classify_distance(target_distance(letter, cursor, x, y)?, params);

    let reach = physics::distance_to_point(x, y, cursor.next_control_point(letter));
    let next_cursor = if reach < params.suboptimal_distance {
        cursor.advanced(letter)
    } else {
        cursor
    };

    Ok((next_cursor, verdict))
}

/// Sequential quality checker bound to one letter and one trace attempt.
///
/// Points must arrive in drawing order; one call at a time per instance. The
/// checker works in the coordinate frame the letter is defined in and never
/// transforms input itself.
#[derive(Debug, Clone)]
pub struct TraceChecker {
    letter: Letter,
    params: CheckerParams,
    cursor: TraceCursor,
    last_position: Option<(f32, f32)>,
}

impl TraceChecker {
    pub fn new(letter: Letter) -> SpResult<Self> {
        Self::with_params(letter, CheckerParams::default())
    }

    pub fn with_params(letter: Letter, params: CheckerParams) -> SpResult<Self> {
        letter.validate()?;
        Ok(Self {
            letter,
            params,
            cursor: TraceCursor::start(),
            last_position: None,
        })
    }

    /// Feeds one freehand point and returns its verdict.
    pub fn add_drawn_point(&mut self, x: f32, y: f32) -> SpResult<DrawQuality> {
        self.last_position = Some((x, y));
        let (cursor, verdict) = evaluate(&self.letter, self.cursor, x, y, &self.params)?;
        self.cursor = cursor;
        Ok(verdict)
    }

    pub fn letter(&self) -> &Letter {
        &self.letter
    }

    pub fn params(&self) -> &CheckerParams {
        &self.params
    }

    pub fn cursor(&self) -> TraceCursor {
        self.cursor
    }

    /// All control points of all segments have been reached.
    pub fn is_complete(&self) -> bool {
        self.cursor.complete
    }

    /// Last position fed in, for diagnostics.
    pub fn last_position(&self) -> Option<(f32, f32)> {
        self.last_position
    }
}
