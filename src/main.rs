//! Mastermind - CLI
//!
//! Code-breaking game with TUI and plain-text modes.

use anyhow::{Result, ensure};
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{analyze_guess, run_simple, score_guess},
    core::MAX_GUESS,
    game::Game,
    interactive::{App, run_tui},
    output::{print_analysis_result, print_score_result},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind: crack the secret code with exact/misplaced feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for the secret code (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Number of guesses allowed per game
    #[arg(short, long, global = true, default_value_t = MAX_GUESS)]
    max_guesses: usize,

    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain-text mode: one guess per line on stdin
    Simple,

    /// Score a guess against a given secret
    Score {
        /// The secret code, e.g. ABCD
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Show how a guess splits every possible secret by feedback
    Analyze {
        /// Guess to analyze
        guess: String,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!(seed, "seeded secret generator");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    ensure!(cli.max_guesses > 0, "--max-guesses must be at least 1");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let app = App::new(make_rng(cli.seed), cli.max_guesses);
            run_tui(app)
        }
        Commands::Simple => {
            let mut game = Game::random(&mut make_rng(cli.seed), cli.max_guesses);
            run_simple(&mut game)
        }
        Commands::Score { secret, guess } => {
            let result = score_guess(&secret, &guess)?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Analyze { guess } => {
            let result = analyze_guess(&guess)?;
            print_analysis_result(&result);
            Ok(())
        }
    }
}
