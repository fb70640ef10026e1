//! Command-line front end for the hand ranking and equity engine.
//!
//! ```text
//! equity classify 10H JH QH KH AH
//! equity simulate --hole AH AD --opponents 2 --trials 20000 --seed 42
//! equity simulate --hole 9S 9C --board 2C 7D KH --config sim.json --json
//! ```

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use poker_equity::equity_engine::report;
use poker_equity::{
    parse_cards, EquityRequest, EquitySimulator, HandRankEvaluator, ShowdownRule, SimulationConfig,
};

#[derive(Parser)]
#[command(name = "equity")]
#[command(about = "Poker hand ranking and Monte Carlo equity")]
struct Cli {
    /// Log simulation progress (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Name the category of exactly five cards.
    Classify {
        cards: Vec<String>,

        /// Count A-2-3-4-5 as a straight.
        #[arg(long)]
        wheel: bool,

        #[arg(long)]
        json: bool,
    },
    /// Estimate hero equity against random opponents.
    Simulate {
        #[arg(long, num_args = 2, required = true)]
        hole: Vec<String>,

        #[arg(long, num_args = 0..=5)]
        board: Vec<String>,

        #[arg(short, long)]
        opponents: Option<usize>,

        #[arg(short, long)]
        trials: Option<u32>,

        #[arg(short, long)]
        seed: Option<u64>,

        #[arg(long, value_enum)]
        showdown: Option<Showdown>,

        /// Count A-2-3-4-5 as a straight.
        #[arg(long)]
        wheel: bool,

        #[arg(long)]
        threads: Option<usize>,

        /// JSON file with simulation defaults; flags override it.
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Showdown {
    Kickers,
    Category,
}

impl From<Showdown> for ShowdownRule {
    fn from(s: Showdown) -> Self {
        match s {
            Showdown::Kickers  => ShowdownRule::Kickers,
            Showdown::Category => ShowdownRule::Category,
        }
    }
}

/// Filter used when `RUST_LOG` is unset.
fn default_log_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

fn main() {
    let cli = Cli::parse();
    let level = default_log_level(cli.verbose);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli.command) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Classify { cards, wheel, json } => {
            let cards = parse_cards(&cards)?;
            let category = HandRankEvaluator::new(wheel).classify(&cards)?;
            if json {
                println!("{}", report::hand_report(&cards, category));
            } else {
                println!("{category}");
            }
        }
        Commands::Simulate {
            hole,
            board,
            opponents,
            trials,
            seed,
            showdown,
            wheel,
            threads,
            config,
            json,
        } => {
            let mut cfg = match config {
                Some(path) => SimulationConfig::from_path(path)?,
                None => SimulationConfig::default(),
            };
            if let Some(n) = opponents {
                cfg.opponents = n;
            }
            if let Some(n) = trials {
                cfg.trials = n;
            }
            if seed.is_some() {
                cfg.seed = seed;
            }
            if let Some(rule) = showdown {
                cfg.showdown = rule.into();
            }
            if wheel {
                cfg.ace_low_straights = true;
            }
            if threads.is_some() {
                cfg.threads = threads;
            }

            let request = EquityRequest {
                hole: parse_cards(&hole)?,
                board: parse_cards(&board)?,
                opponents: cfg.opponents,
                trials: cfg.trials,
            };
            let simulator = EquitySimulator::from_config(&cfg)?;
            let result = simulator.estimate_request(&request, cfg.seed)?;
            if json {
                println!("{}", report::equity_report(&request, &result));
            } else {
                println!("{result}");
            }
        }
    }
    Ok(())
}
