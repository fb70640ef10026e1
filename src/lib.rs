//! # poker_equity
//!
//! Hand ranking and Monte Carlo equity for live poker assistance.
//!
//! Screen capture, OCR and object detection produce lists of card tokens
//! (`"AH"`, `"10d"`, `"TS"`). This crate turns those tokens into cards,
//! names the category of a 5-card hand, and estimates how often a hero hand
//! wins against randomly dealt opponents.
//!
//! ## How it works
//!
//! 1. Parse tokens with [`parse_cards`] (or [`Card::parse`] for one token).
//! 2. Call [`classify`] on exactly five cards to get a [`RankCategory`].
//! 3. Call [`estimate_equity`] (or build an [`EquitySimulator`] from a
//!    [`SimulationConfig`]) with two hole cards, zero to five board cards, an
//!    opponent count and a trial count. Each trial resets the unseen deck,
//!    deals the opponents, completes the board and scores every hand.
//! 4. The returned [`EquityResult`] holds `wins`, `ties` and `trials`;
//!    [`EquityResult::equity`] counts a tie as half a win.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `Some(seed)` to get identical counters on every
//!   run, independent of how many worker threads are used.
//! - **Parallel**: trials are split into chunks and run on a rayon pool.
//! - **Two showdown rules**: [`ShowdownRule::Kickers`] (default) compares
//!   category then kickers; [`ShowdownRule::Category`] ties any two hands of
//!   the same category.
//!
//! ## Quick start
//!
//! ```rust
//! use poker_equity::{classify, estimate_equity, parse_cards, RankCategory};
//!
//! let hand = parse_cards(["10H", "JH", "QH", "KH", "AH"]).unwrap();
//! assert_eq!(classify(&hand).unwrap(), RankCategory::RoyalFlush);
//!
//! let hole = parse_cards(["AH", "AD"]).unwrap();
//! let result = estimate_equity(&hole, &[], 1, 2000, Some(42)).unwrap();
//! println!("pocket aces heads-up: {}", result);
//! ```

pub mod equity_engine;

// Convenience re-exports so callers can use `poker_equity::estimate_equity`
// directly without reaching into `equity_engine::`.
pub use equity_engine::{
    classify, estimate_equity, parse_card_list, parse_cards, Card, DeckSampler, EngineError,
    EngineResult, EquityRequest, EquityResult, EquitySimulator, HandRankEvaluator, HandStrength,
    Rank, RankCategory, ShowdownRule, SimulationConfig, Suit,
};

#[cfg(test)]
mod tests;
