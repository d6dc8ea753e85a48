use clap::Args;
use scrivepad::alphabet::AlphabetDefinition;
use scrivepad::config::Config;
use scrivepad::error::SpResult;
use scrivepad::geometry::{self, PathGeometry, Reference};
use serde::Serialize;
use std::fs;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short, long, default_value = "A")]
    pub letter: String,

    #[arg(short, long, default_value = "anchor")]
    pub reference: String,

    /// Anchor position on the canvas; defaults to the ruling origin.
    #[arg(long)]
    pub anchor_x: Option<f32>,

    #[arg(long)]
    pub anchor_y: Option<f32>,

    #[arg(short, long)]
    pub out: Option<String>,
}

#[derive(Serialize)]
struct RenderOutput {
    letter: String,
    reference: Reference,
    ruling: PathGeometry,
    outline: PathGeometry,
}

pub fn run(args: RenderArgs, alphabet: &AlphabetDefinition) -> SpResult<()> {
    let letter = super::resolve_letter(alphabet, &args.letter)?;
    let reference = Reference::parse(&args.reference)?;

    let r = args.config.ruling;
    let ruling =
        geometry::build_ruling_path(r.ruling_x, r.ruling_y, r.ruling_width, r.scale, r.line_count)?;

    let anchor_x = args.anchor_x.unwrap_or(r.ruling_x);
    let anchor_y = args.anchor_y.unwrap_or(r.ruling_y);
    let outline = geometry::build_letter_path(&letter, anchor_x, anchor_y, r.scale, reference)?;

    let output = RenderOutput {
        letter: args.letter,
        reference,
        ruling,
        outline,
    };
    let json = serde_json::to_string_pretty(&output)?;

    match &args.out {
        Some(path) => {
            fs::write(path, json)?;
            info!("💾 Wrote geometry to {}", path);
        }
        None => println!("{}", json),
    }
    Ok(())
}
