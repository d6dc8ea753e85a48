use clap::{Parser, Subcommand};
use scrivepad::alphabet::AlphabetDefinition;
use scrivepad::letters;
use std::path::Path;
use std::process;
use tracing::{error, info, warn};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long)]
    alphabet: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Render(cmd::render::RenderArgs),
    Score(cmd::score::ScoreArgs),
    Simulate(cmd::simulate::SimulateArgs),
}

fn main() {
    // Keep stdout clean for geometry/report output.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let alphabet = match &cli.alphabet {
        Some(path) if Path::new(path).exists() => {
            info!("📂 Loading Alphabet: {}", path);
            AlphabetDefinition::load_from_file(path).unwrap_or_else(|e| {
                error!("❌ Failed to load alphabet: {}", e);
                process::exit(1);
            })
        }
        Some(path) => {
            warn!(
                "⚠️  Alphabet file '{}' not found. Using built-in letters.",
                path
            );
            letters::builtin_alphabet()
        }
        None => letters::builtin_alphabet(),
    };

    let result = match cli.command {
        Commands::Render(args) => cmd::render::run(args, &alphabet),
        Commands::Score(args) => cmd::score::run(args, &alphabet),
        Commands::Simulate(args) => cmd::simulate::run(args, &alphabet),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
