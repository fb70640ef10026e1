//! Monte Carlo equity against randomly dealt opponents.
//!
//! ## Trial
//!
//! 1. Reset the deck of unseen cards.
//! 2. Draw two hole cards per opponent.
//! 3. Draw the missing board cards up to five.
//! 4. Score hero and every opponent on hole + board (best 5 of 7).
//! 5. Hero beats the best opponent → win; equal → tie; otherwise loss.
//!
//! ## Parallelism
//!
//! `estimate` splits the trial count into fixed-size chunks. Each chunk gets
//! its own generator, seeded from a master generator in chunk order, and its
//! own copy of the deck; chunk tallies are summed at the end. The result is a
//! function of the seed and chunk size only, whatever the thread count.

use std::cmp::Ordering;

use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;

use crate::equity_engine::{
    config::{ShowdownRule, SimulationConfig},
    deck::DeckSampler,
    error::{EngineError, EngineResult},
    evaluator::HandRankEvaluator,
    helpers::cards_str,
    models::{Card, EquityRequest, EquityResult, HandStrength, RankCategory},
};

const DEFAULT_CHUNK_SIZE: u32 = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Win,
    Tie,
    Loss,
}

/// Per-worker subtotal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Tally {
    wins: u64,
    ties: u64,
    trials: u64,
}

impl Tally {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win  => self.wins += 1,
            Outcome::Tie  => self.ties += 1,
            Outcome::Loss => {}
        }
        self.trials += 1;
    }

    fn merge(self, other: Tally) -> Tally {
        Tally {
            wins: self.wins + other.wins,
            ties: self.ties + other.ties,
            trials: self.trials + other.trials,
        }
    }
}

impl From<Tally> for EquityResult {
    fn from(t: Tally) -> Self {
        EquityResult { wins: t.wins, ties: t.ties, trials: t.trials }
    }
}

/// Validated inputs shared read-only by every trial.
#[derive(Debug, Clone)]
struct Table {
    hole: [Card; 2],
    board: Vec<Card>,
    opponents: usize,
}

impl Table {
    /// Cards each trial draws: two per opponent plus the board runout.
    /// Saturates so absurd opponent counts still fail the deck check.
    fn needed(&self) -> usize {
        self.opponents
            .saturating_mul(2)
            .saturating_add(5 - self.board.len())
    }
}

#[derive(Debug)]
pub struct EquitySimulator {
    evaluator: HandRankEvaluator,
    showdown: ShowdownRule,
    chunk_size: u32,
    pool: Option<rayon::ThreadPool>,
}

impl Default for EquitySimulator {
    fn default() -> Self {
        EquitySimulator {
            evaluator: HandRankEvaluator::default(),
            showdown: ShowdownRule::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            pool: None,
        }
    }
}

impl EquitySimulator {
    pub fn new(evaluator: HandRankEvaluator, showdown: ShowdownRule) -> Self {
        EquitySimulator { evaluator, showdown, ..Self::default() }
    }

    /// Build from config; a `threads` setting gets a dedicated pool.
    pub fn from_config(config: &SimulationConfig) -> EngineResult<Self> {
        config.validate()?;
        let pool = match config.threads {
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| EngineError::Config(format!("worker pool: {e}")))?,
            ),
            None => None,
        };
        Ok(EquitySimulator {
            evaluator: HandRankEvaluator::new(config.ace_low_straights),
            showdown: config.showdown,
            chunk_size: config.chunk_size,
            pool,
        })
    }

    pub fn with_chunk_size(mut self, chunk_size: u32) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn evaluator(&self) -> HandRankEvaluator {
        self.evaluator
    }

    pub fn showdown(&self) -> ShowdownRule {
        self.showdown
    }

    /// Run `trials` showdowns sequentially on the injected generator.
    pub fn estimate_with_rng<R: Rng>(
        &self,
        hole: &[Card],
        board: &[Card],
        opponents: usize,
        trials: u32,
        rng: &mut R,
    ) -> EngineResult<EquityResult> {
        let (table, mut deck) = prepare(hole, board, opponents, trials)?;
        log::debug!(
            "simulating {} trials: hole [{}] board [{}] vs {} opponent(s), {} showdown",
            trials, cards_str(hole), cards_str(board), opponents, self.showdown
        );
        let tally = self.run_chunk(&table, &mut deck, trials, rng)?;
        Ok(self.finish(tally))
    }

    /// Run `trials` showdowns across the worker pool.
    ///
    /// `seed: None` seeds the master generator from OS entropy.
    pub fn estimate(
        &self,
        hole: &[Card],
        board: &[Card],
        opponents: usize,
        trials: u32,
        seed: Option<u64>,
    ) -> EngineResult<EquityResult> {
        let (table, deck) = prepare(hole, board, opponents, trials)?;
        let mut master = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };

        let chunk_size = self.chunk_size.max(1);
        let mut chunks: Vec<(u32, u64)> = Vec::new();
        let mut left = trials;
        while left > 0 {
            let n = left.min(chunk_size);
            chunks.push((n, master.gen::<u64>()));
            left -= n;
        }
        log::debug!(
            "simulating {} trials in {} chunks: hole [{}] board [{}] vs {} opponent(s), {} showdown",
            trials, chunks.len(), cards_str(hole), cards_str(board), opponents, self.showdown
        );

        let run = || {
            chunks
                .into_par_iter()
                .map(|(n, chunk_seed)| {
                    let mut rng = StdRng::seed_from_u64(chunk_seed);
                    let mut deck = deck.clone();
                    self.run_chunk(&table, &mut deck, n, &mut rng)
                })
                .collect::<EngineResult<Vec<Tally>>>()
        };
        let tallies = match &self.pool {
            Some(pool) => pool.install(run)?,
            None => run()?,
        };
        let tally = tallies.into_iter().fold(Tally::default(), Tally::merge);
        Ok(self.finish(tally))
    }

    pub fn estimate_request(
        &self,
        request: &EquityRequest,
        seed: Option<u64>,
    ) -> EngineResult<EquityResult> {
        self.estimate(&request.hole, &request.board, request.opponents, request.trials, seed)
    }

    fn finish(&self, tally: Tally) -> EquityResult {
        let result = EquityResult::from(tally);
        log::info!(
            "equity {:.4} over {} trials (wins {}, ties {})",
            result.equity(), result.trials, result.wins, result.ties
        );
        result
    }

    fn run_chunk<R: Rng>(
        &self,
        table: &Table,
        deck: &mut DeckSampler,
        trials: u32,
        rng: &mut R,
    ) -> EngineResult<Tally> {
        let mut tally = Tally::default();
        for _ in 0..trials {
            tally.record(self.play(table, deck, rng)?);
        }
        Ok(tally)
    }

    fn play<R: Rng>(&self, table: &Table, deck: &mut DeckSampler, rng: &mut R) -> EngineResult<Outcome> {
        deck.reset();
        let drawn = deck.draw(table.needed(), rng)?;
        let (holes, runout) = drawn.split_at(2 * table.opponents);

        // Slots 0..2 hold the player's hole cards, 2..7 the completed board.
        let mut seven = [table.hole[0]; 7];
        seven[..2].copy_from_slice(&table.hole);
        seven[2..2 + table.board.len()].copy_from_slice(&table.board);
        seven[2 + table.board.len()..].copy_from_slice(runout);

        let hero = self.score(&seven);
        let best_opponent = holes
            .chunks_exact(2)
            .map(|h| {
                let mut hand = seven;
                hand[..2].copy_from_slice(h);
                self.score(&hand)
            })
            .fold(HandStrength { category: RankCategory::HighCard, ranks: [0; 5] }, Ord::max);

        // `prepare` guarantees at least one opponent, so the fold seed never wins.
        Ok(match hero.cmp(&best_opponent) {
            Ordering::Greater => Outcome::Win,
            Ordering::Equal => Outcome::Tie,
            Ordering::Less => Outcome::Loss,
        })
    }

    fn score(&self, seven: &[Card; 7]) -> HandStrength {
        let best = self.evaluator.best_unchecked(seven);
        match self.showdown {
            ShowdownRule::Kickers => best,
            ShowdownRule::Category => HandStrength { category: best.category, ranks: [0; 5] },
        }
    }
}

fn prepare(
    hole: &[Card],
    board: &[Card],
    opponents: usize,
    trials: u32,
) -> EngineResult<(Table, DeckSampler)> {
    let hole: [Card; 2] = hole.try_into().map_err(|_| EngineError::InvalidHandSize {
        what: "hole",
        expected: "exactly 2 cards",
        found: hole.len(),
    })?;
    if board.len() > 5 {
        return Err(EngineError::InvalidHandSize {
            what: "board",
            expected: "0 to 5 cards",
            found: board.len(),
        });
    }
    if opponents == 0 {
        return Err(EngineError::InvalidParameter("opponent count must be at least 1".into()));
    }
    if trials == 0 {
        return Err(EngineError::InvalidParameter("trial count must be at least 1".into()));
    }

    let known: Vec<Card> = hole.iter().chain(board).copied().collect();
    let deck = DeckSampler::new(&known)?;
    let table = Table { hole, board: board.to_vec(), opponents };
    deck.ensure_available(table.needed())?;
    Ok((table, deck))
}

/// Estimate hero equity with the default simulator on the global pool.
pub fn estimate_equity(
    hole: &[Card],
    board: &[Card],
    opponents: usize,
    trials: u32,
    seed: Option<u64>,
) -> EngineResult<EquityResult> {
    EquitySimulator::default().estimate(hole, board, opponents, trials, seed)
}
