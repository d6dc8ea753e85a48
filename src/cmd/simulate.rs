use crate::reports;
use clap::Args;
use scrivepad::alphabet::AlphabetDefinition;
use scrivepad::config::Config;
use scrivepad::error::SpResult;
use scrivepad::geometry;
use scrivepad::session::TraceSession;
use scrivepad::synth;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short, long, default_value = "A")]
    pub letter: String,

    #[arg(long, default_value_t = 8)]
    pub points_per_edge: usize,

    /// Jitter amplitude in canvas pixels.
    #[arg(long, default_value_t = 4.0)]
    pub jitter: f32,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Write the synthetic trace as a CSV usable by `score`.
    #[arg(short, long)]
    pub out: Option<String>,
}

pub fn run(args: SimulateArgs, alphabet: &AlphabetDefinition) -> SpResult<()> {
    let base = super::resolve_letter(alphabet, &args.letter)?;
    let r = args.config.ruling;
    let target = geometry::letter_on_canvas(&base, r.ruling_x, r.ruling_y, r.scale)?;

    let strokes = synth::synthesize_trace(&target, args.points_per_edge, args.jitter, args.seed);
    info!(
        "🎲 Synthesized {} stroke(s), jitter ±{}px{}",
        strokes.len(),
        args.jitter,
        args.seed
            .map(|s| format!(", seed {}", s))
            .unwrap_or_default()
    );

    let mut session = TraceSession::new(target, args.config.checker)?;
    super::score::score_strokes(&mut session, &strokes)?;

    if let Some(path) = &args.out {
        let mut wtr = csv::Writer::from_path(path)?;
        wtr.write_record(["x", "y", "stroke"])?;
        for (idx, stroke) in strokes.iter().enumerate() {
            for p in stroke {
                wtr.write_record(&[p.x.to_string(), p.y.to_string(), idx.to_string()])?;
            }
        }
        wtr.flush()?;
        info!("💾 Wrote synthetic trace to {}", path);
    }

    let name = format!("simulated '{}'", args.letter);
    reports::print_quality_report(&[(name.clone(), session.summary())]);
    reports::print_stroke_breakdown(&name, session.stroke_verdicts());
    Ok(())
}
