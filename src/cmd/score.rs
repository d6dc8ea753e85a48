use crate::reports;
use clap::Args;
use rayon::prelude::*;
use scrivepad::alphabet::AlphabetDefinition;
use scrivepad::checker::DrawQuality;
use scrivepad::config::Config;
use scrivepad::error::{ScrivePadError, SpResult};
use scrivepad::geometry::{self, PixelPoint};
use scrivepad::session::{QualitySummary, TraceSession};
use serde::Deserialize;
use std::fs::File;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short, long, default_value = "A")]
    pub letter: String,

    /// Trace CSV files (columns: x,y[,stroke]) in canvas pixel space.
    #[arg(required = true)]
    pub traces: Vec<String>,

    /// Trace coordinates are letter-local units; skip the canvas transform.
    #[arg(long, default_value_t = false)]
    pub letter_local: bool,
}

#[derive(Debug, Deserialize)]
struct TraceRecord {
    x: f32,
    y: f32,
    #[serde(default)]
    stroke: Option<u32>,
}

fn load_trace(path: &str) -> SpResult<Vec<Vec<PixelPoint>>> {
    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut strokes: Vec<Vec<PixelPoint>> = Vec::new();
    let mut current_id: Option<u32> = None;
    for result in rdr.deserialize() {
        let rec: TraceRecord = result?;
        let id = rec.stroke.unwrap_or(0);
        if current_id != Some(id) {
            strokes.push(Vec::new());
            current_id = Some(id);
        }
        strokes.last_mut().unwrap().push(PixelPoint::new(rec.x, rec.y));
    }

    if strokes.is_empty() {
        return Err(ScrivePadError::Validation(format!(
            "Trace '{}' contains no points",
            path
        )));
    }
    Ok(strokes)
}

pub fn score_strokes(
    session: &mut TraceSession,
    strokes: &[Vec<PixelPoint>],
) -> SpResult<()> {
    for stroke in strokes {
        let mut points = stroke.iter();
        if let Some(p) = points.next() {
            session.begin_stroke(p.x, p.y)?;
        }
        for p in points {
            session.extend_stroke(p.x, p.y)?;
        }
    }
    Ok(())
}

type ScoredTrace = (String, QualitySummary, Vec<Vec<DrawQuality>>);

pub fn run(args: ScoreArgs, alphabet: &AlphabetDefinition) -> SpResult<()> {
    let base = super::resolve_letter(alphabet, &args.letter)?;
    let r = args.config.ruling;
    let target = if args.letter_local {
        base
    } else {
        geometry::letter_on_canvas(&base, r.ruling_x, r.ruling_y, r.scale)?
    };

    info!(
        "🖊️  Scoring {} trace(s) against letter '{}'",
        args.traces.len(),
        args.letter
    );

    let results: Vec<SpResult<ScoredTrace>> = args
        .traces
        .par_iter()
        .map(|path| {
            let strokes = load_trace(path)?;
            let mut session = TraceSession::new(target.clone(), args.config.checker)?;
            score_strokes(&mut session, &strokes)?;
            Ok((
                path.clone(),
                session.summary(),
                session.stroke_verdicts().to_vec(),
            ))
        })
        .collect();

    let mut scored = Vec::new();
    let mut failed = 0usize;
    for result in results {
        match result {
            Ok(entry) => scored.push(entry),
            Err(e) => {
                failed += 1;
                warn!("⚠️  {}", e);
            }
        }
    }

    if scored.is_empty() {
        return Err(ScrivePadError::Validation(format!(
            "No scorable traces ({} failed)",
            failed
        )));
    }

    let rows: Vec<(String, QualitySummary)> = scored
        .iter()
        .map(|(name, summary, _)| (name.clone(), *summary))
        .collect();
    reports::print_quality_report(&rows);

    if let [(name, _, verdicts)] = scored.as_slice() {
        reports::print_stroke_breakdown(name, verdicts);
    }
    Ok(())
}
