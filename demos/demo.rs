//! Walkthrough of the hand ranking and equity engine.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **Classification**: one reference hand per category, printed with its
//!    label and strength value.
//! 2. **Equity by street**: the same hole cards preflop, on the flop, turn
//!    and river, against one and three opponents.
//! 3. **Showdown rules**: pocket aces scored with kickers and by category
//!    only, using the same seed so both runs see identical deals.

use poker_equity::equity_engine::report;
use poker_equity::{
    classify, parse_card_list, EquityRequest, EquitySimulator, HandRankEvaluator, ShowdownRule,
};

const SEED: u64 = 42;

fn print_classification(tokens: &str) {
    let cards = parse_card_list(tokens).expect("demo tokens are well-formed");
    let category = classify(&cards).expect("demo hands have five distinct cards");
    println!("  {:<20} {:<16} ({})", tokens, category, category.value());
}

fn main() {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Classification");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for hand in [
        "10H JH QH KH AH",
        "9S 10S JS QS KS",
        "7C 7D 7H 7S 2C",
        "2H 2D 2S 5C 5D",
        "2D 7D 9D JD KD",
        "5C 6D 7H 8S 9C",
        "QC QD QH 3S 9C",
        "3H 3D 7S 7C KH",
        "4H 4D 8S JC AH",
        "2H 5D 9S JC AH",
    ] {
        print_classification(hand);
    }

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Equity by street (hole KH QH, 5000 trials, seed {SEED})");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    let simulator = EquitySimulator::default();
    let hole = parse_card_list("KH QH").expect("demo tokens are well-formed");
    for board in ["", "JH 7H 2C", "JH 7H 2C 3D", "JH 7H 2C 3D AS"] {
        for opponents in [1, 3] {
            let request = EquityRequest {
                hole: hole.clone(),
                board: parse_card_list(board).expect("demo tokens are well-formed"),
                opponents,
                trials: 5000,
            };
            match simulator.estimate_request(&request, Some(SEED)) {
                Ok(result) => println!(
                    "  board [{:<15}] vs {} → {}",
                    board, opponents, result
                ),
                Err(e) => println!("  board [{board}] vs {opponents} → error: {e}"),
            }
        }
    }

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Showdown rules (AH AD heads-up, 5000 trials)");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    let request = EquityRequest {
        hole: parse_card_list("AH AD").expect("demo tokens are well-formed"),
        board: Vec::new(),
        opponents: 1,
        trials: 5000,
    };
    for rule in [ShowdownRule::Kickers, ShowdownRule::Category] {
        let sim = EquitySimulator::new(HandRankEvaluator::default(), rule);
        match sim.estimate_request(&request, Some(SEED)) {
            Ok(result) => {
                println!("  {:<9} {}", rule, result);
                println!("  {}", report::equity_report(&request, &result));
            }
            Err(e) => println!("  {rule} → error: {e}"),
        }
    }
}
