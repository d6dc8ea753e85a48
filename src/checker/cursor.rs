use crate::alphabet::{ControlPoint, Letter};

/// Traversal position inside a letter while a trace is in progress.
///
/// The cursor is a plain value; transitions return a new cursor instead of
/// mutating. `segment`/`next_point` index into the bound letter and are only
/// meaningful together with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceCursor {
    pub segment: usize,
    pub next_point: usize,
    pub last_point: Option<usize>,
    /// Whether a line connects the last control point to the next one. If
    /// false, the next target is a bare point and `last_point` may be None.
    pub next_on_line: bool,
    pub complete: bool,
}

impl TraceCursor {
    /// Start of a trace: the first point of the first segment is a bare
    /// target, nothing has been reached yet.
    pub fn start() -> Self {
        Self {
            segment: 0,
            next_point: 0,
            last_point: None,
            next_on_line: false,
            complete: false,
        }
    }

    pub fn next_control_point(&self, letter: &Letter) -> ControlPoint {
        letter.segments[self.segment].control_points[self.next_point]
    }

    pub fn last_control_point(&self, letter: &Letter) -> Option<ControlPoint> {
        self.last_point
            .map(|i| letter.segments[self.segment].control_points[i])
    }

    /// Steps past the current target: within a segment the reached point
    /// becomes the last point and the following one a line-connected target;
    /// at a segment end the pen lifts to the next segment's first point. The
    /// final point of the final segment parks the cursor as complete.
    pub fn advanced(self, letter: &Letter) -> Self {
        if self.complete {
            return self;
        }
        let segment_len = letter.segments[self.segment].control_points.len();
        if self.next_point + 1 < segment_len {
            return Self {
                segment: self.segment,
                next_point: self.next_point + 1,
                last_point: Some(self.next_point),
                next_on_line: true,
                complete: false,
            };
        }
        if self.segment + 1 < letter.segments.len() {
            return Self {
                segment: self.segment + 1,
                next_point: 0,
                last_point: None,
                next_on_line: false,
                complete: false,
            };
        }
        Self {
            complete: true,
            ..self
        }
    }

    /// Segments fully traced so far.
    pub fn segments_completed(&self) -> usize {
        if self.complete {
            self.segment + 1
        } else {
            self.segment
        }
    }
}

impl Default for TraceCursor {
    fn default() -> Self {
        Self::start()
    }
}
