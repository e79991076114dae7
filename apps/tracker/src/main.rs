//! Score Tracker CLI - keeps the score sheet for a game of Judgement.
//!
//! Prompts for each prediction and tricks report in turn, prints the grid
//! after every round and announces the winner at the end.

mod console;
mod render;
mod telemetry;

use std::error::Error;
use std::fs;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use console::Console;
use judgement_engine::GameConfig;
use tracing::info;

#[derive(Parser)]
#[command(name = "score-tracker")]
#[command(about = "Score sheet for Judgement / Oh Hell")]
struct Args {
    /// Comma-separated player names in seating order (prompted when absent)
    #[arg(short, long)]
    players: Option<String>,

    /// Seed for a reproducible trump order
    #[arg(long)]
    seed: Option<u64>,

    /// Bonus added to an exact prediction
    #[arg(long)]
    exact_bonus: Option<i16>,

    /// Forbid the last player from making the predictions add up
    #[arg(long)]
    restrict_last_prediction: bool,

    /// JSON game config; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the final score sheet as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn build_config(args: &Args) -> Result<GameConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => GameConfig::from_json_str(&fs::read_to_string(path)?)?,
        None => GameConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(bonus) = args.exact_bonus {
        config.exact_bonus = bonus;
    }
    if args.restrict_last_prediction {
        config.restrict_last_prediction = true;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    telemetry::init_tracing(args.verbose);

    let config = build_config(&args)?;
    info!(?config, "starting score tracker");

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut state = console.setup(args.players.as_deref(), &config)?;
    console.play(&mut state)?;
    console.announce_results(&state)?;
    if args.json {
        console.print_json(&state)?;
    }
    Ok(())
}
