//! Play one automatic game and print the standings.
//!
//! ```text
//! tweet-party-demo --seed 7 Ada Grace Linus
//! RUST_LOG=tweet_party=debug tweet-party-demo --catalog cards.json
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tweet_party::{
    run_automatic, CardCatalog, GameRng, NullPresenter, PhaseController, SessionConfig,
    SessionState,
};

#[derive(Debug, Parser)]
#[command(name = "tweet-party-demo", about = "Play a headless game of tweet-party")]
struct Args {
    /// Seed for dealing and voting. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON card catalog. Uses the bundled cards when omitted.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// JSON session config.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Player names, in turn order.
    #[arg(default_values = ["Ada", "Grace", "Linus", "Margaret"])]
    players: Vec<String>,
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tweet_party=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let catalog = match &args.catalog {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading catalog {}", path.display()))?;
            CardCatalog::from_json(&json)?
        }
        None => CardCatalog::builtin(),
    };

    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            SessionConfig::from_json(&json)?
        }
        None => SessionConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut vote_rng = match config.seed {
        Some(seed) => GameRng::new(seed).for_context("votes"),
        None => GameRng::from_entropy(),
    };

    let mut session = SessionState::new(&catalog, config);
    let mut controller = PhaseController::new(NullPresenter);

    controller.start_game(&mut session, args.players.as_slice())?;
    let ranking = run_automatic(&mut controller, &mut session, &mut vote_rng)?;

    for entry in ranking {
        println!(
            "#{} {} ({} votes): {}",
            entry.rank,
            entry.name,
            entry.score,
            entry.composition.as_deref().unwrap_or("")
        );
    }
    Ok(())
}
