use crate::alphabet::Letter;
use crate::checker::{DrawQuality, TraceChecker};
use crate::config::CheckerParams;
use crate::error::{ScrivePadError, SpResult};
use crate::geometry::PixelPoint;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum GesturePhase {
    Start,
    Move,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum InputSource {
    Stylus,
    Finger,
}

/// One raw pointer event as delivered by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub phase: GesturePhase,
    pub source: InputSource,
}

/// Verdict counts over a trace attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualitySummary {
    pub good: usize,
    pub suboptimal: usize,
    pub bad: usize,
    pub complete: bool,
}

impl QualitySummary {
    pub fn total(&self) -> usize {
        self.good + self.suboptimal + self.bad
    }

    pub fn good_share(&self) -> f32 {
        if self.total() == 0 {
            return 0.0;
        }
        self.good as f32 / self.total() as f32
    }

    pub fn record(&mut self, verdict: DrawQuality) {
        match verdict {
            DrawQuality::Good => self.good += 1,
            DrawQuality::Suboptimal => self.suboptimal += 1,
            DrawQuality::Bad => self.bad += 1,
        }
    }
}

/// One in-progress trace attempt: the drawing history plus a bound checker.
///
/// The history (one stroke per pointer-down-to-up gesture) exists for the UI;
/// undo pops the last stroke and its verdicts but never rewinds the checker,
/// whose cursor only moves forward. `clear` starts a fresh attempt.
#[derive(Debug, Clone)]
pub struct TraceSession {
    checker: TraceChecker,
    strokes: Vec<Vec<PixelPoint>>,
    verdicts: Vec<Vec<DrawQuality>>,
    accepted_source: Option<InputSource>,
}

impl TraceSession {
    pub fn new(letter: Letter, params: CheckerParams) -> SpResult<Self> {
        Ok(Self {
            checker: TraceChecker::with_params(letter, params)?,
            strokes: Vec::new(),
            verdicts: Vec::new(),
            accepted_source: None,
        })
    }

    /// Restrict input to one source; samples from other sources are dropped
    /// before they reach the checker.
    pub fn with_accepted_source(mut self, source: InputSource) -> Self {
        self.accepted_source = Some(source);
        self
    }

    fn accepts(&self, source: InputSource) -> bool {
        self.accepted_source.map_or(true, |s| s == source)
    }

    /// Routes one pointer sample: `Start` opens a stroke, `Move` extends it,
    /// `End` closes the gesture without producing a verdict. Filtered samples
    /// return None.
    pub fn handle_sample(&mut self, sample: PointerSample) -> SpResult<Option<DrawQuality>> {
        if !self.accepts(sample.source) {
            return Ok(None);
        }
        match sample.phase {
            GesturePhase::Start => self.begin_stroke(sample.x, sample.y).map(Some),
            GesturePhase::Move => self.extend_stroke(sample.x, sample.y).map(Some),
            GesturePhase::End => Ok(None),
        }
    }

    pub fn begin_stroke(&mut self, x: f32, y: f32) -> SpResult<DrawQuality> {
        self.strokes.push(vec![PixelPoint::new(x, y)]);
        self.verdicts.push(Vec::new());
        self.feed(x, y)
    }

    pub fn extend_stroke(&mut self, x: f32, y: f32) -> SpResult<DrawQuality> {
        let stroke = self.strokes.last_mut().ok_or_else(|| {
            ScrivePadError::IllegalState("No stroke in progress".to_string())
        })?;
        stroke.push(PixelPoint::new(x, y));
        self.feed(x, y)
    }

    fn feed(&mut self, x: f32, y: f32) -> SpResult<DrawQuality> {
        let verdict = self.checker.add_drawn_point(x, y)?;
        // begin/extend pushed the stroke entry first.
        self.verdicts.last_mut().unwrap().push(verdict);
        Ok(verdict)
    }

    /// Drops the most recent stroke. Returns false when there is nothing to
    /// undo.
    pub fn undo_stroke(&mut self) -> bool {
        let removed = self.strokes.pop().is_some();
        self.verdicts.pop();
        removed
    }

    /// Discards the history and binds a fresh checker for a new attempt.
    pub fn clear(&mut self) -> SpResult<()> {
        self.checker =
            TraceChecker::with_params(self.checker.letter().clone(), *self.checker.params())?;
        self.strokes.clear();
        self.verdicts.clear();
        Ok(())
    }

    pub fn strokes(&self) -> &[Vec<PixelPoint>] {
        &self.strokes
    }

    pub fn stroke_verdicts(&self) -> &[Vec<DrawQuality>] {
        &self.verdicts
    }

    pub fn checker(&self) -> &TraceChecker {
        &self.checker
    }

    pub fn is_complete(&self) -> bool {
        self.checker.is_complete()
    }

    pub fn summary(&self) -> QualitySummary {
        let mut summary = QualitySummary {
            complete: self.is_complete(),
            ..Default::default()
        };
        for verdict in self.verdicts.iter().flatten() {
            summary.record(*verdict);
        }
        summary
    }
}
