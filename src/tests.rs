//! Scenario tests for the `poker_equity` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Classification | Reference hands from the capture layer's token format |
//! | Round-trip | Token → card → token, case-normalised |
//! | Equity bounds | Equity in [0,1]; wins + ties + losses == trials |
//! | Reference equity | Pocket aces heads-up preflop ≈ 0.85 |
//! | Monotonicity | More opponents never raise equity beyond a tolerance |
//! | Determinism | Same seed → identical counters |
//! | Errors | Too many opponents → InsufficientCards |

use crate::equity_engine::{
    classify, estimate_equity, parse_cards, report, Card, EngineError, EquityRequest,
    EquitySimulator, HandRankEvaluator, RankCategory, ShowdownRule, SimulationConfig,
};

// ── helpers ──────────────────────────────────────────────────────────────────

fn cards(tokens: &[&str]) -> Vec<Card> {
    parse_cards(tokens.iter().copied()).unwrap()
}

fn category(tokens: &[&str]) -> RankCategory {
    classify(&cards(tokens)).unwrap()
}

/// Seeds that span different generator states.
const SEEDS: [u64; 4] = [1, 42, 999, 0xDEAD_BEEF];

// ── classification ───────────────────────────────────────────────────────────

#[test]
fn reference_hands_classify_as_expected() {
    assert_eq!(category(&["10H", "JH", "QH", "KH", "AH"]), RankCategory::RoyalFlush);
    assert_eq!(category(&["2H", "2D", "2S", "5C", "5D"]), RankCategory::FullHouse);
    assert_eq!(category(&["2H", "5D", "9S", "JC", "AH"]), RankCategory::HighCard);
    assert_eq!(category(&["3H", "3D", "7S", "7C", "KH"]), RankCategory::TwoPair);
}

#[test]
fn straight_requires_five_unique_ranks() {
    // Pair inside a run of ranks is a pair, never a straight.
    assert_eq!(category(&["5C", "6D", "6H", "7S", "8C"]), RankCategory::Pair);
    assert_eq!(category(&["10C", "JD", "QH", "KS", "AC"]), RankCategory::Straight);
}

#[test]
fn every_five_card_hand_of_a_sample_gets_one_category() {
    let eval = HandRankEvaluator::default();
    let deck: Vec<Card> = (0..52).filter_map(Card::from_index).collect();
    // Sliding windows across a few strides give a spread of hand shapes.
    for stride in [1usize, 4, 13, 17] {
        for start in 0..52 {
            let hand: Vec<Card> = (0..5).map(|k| deck[(start + k * stride) % 52]).collect();
            if let Ok(first) = eval.classify(&hand) {
                assert_eq!(eval.classify(&hand).unwrap(), first);
                assert!(RankCategory::ALL.contains(&first));
            }
        }
    }
}

// ── round-trip ───────────────────────────────────────────────────────────────

#[test]
fn tokens_round_trip_case_normalised() {
    for (input, canonical) in [("ah", "AH"), ("10d", "10D"), ("Td", "10D"), ("2s", "2S"), ("kC", "KC")] {
        let card = Card::parse(input).unwrap();
        assert_eq!(card.to_string(), canonical);
        assert_eq!(Card::parse(&card.to_string()).unwrap(), card);
    }
}

// ── equity bounds ────────────────────────────────────────────────────────────

#[test]
fn equity_is_bounded_and_counters_add_up() {
    let spots: [(&[&str], &[&str], usize); 4] = [
        (&["AH", "AD"], &[], 1),
        (&["7C", "2D"], &["KS", "QS", "3H"], 3),
        (&["JH", "10H"], &["9H", "8C", "2H", "AS"], 2),
        (&["5S", "5D"], &["5C", "9H", "9D", "KC", "2S"], 5),
    ];
    for (hole, board, opponents) in spots {
        for seed in SEEDS {
            let r = estimate_equity(&cards(hole), &cards(board), opponents, 300, Some(seed)).unwrap();
            assert!((0.0..=1.0).contains(&r.equity()), "{r}");
            assert!(r.wins + r.ties <= r.trials);
            assert_eq!(r.wins + r.ties + r.losses(), r.trials);
            assert_eq!(r.trials, 300);
        }
    }
}

// ── reference equity ─────────────────────────────────────────────────────────

#[test]
fn pocket_aces_heads_up_is_about_85_percent() {
    let r = estimate_equity(&cards(&["AH", "AD"]), &[], 1, 2000, Some(42)).unwrap();
    assert!((r.equity() - 0.85).abs() <= 0.03, "equity {}", r.equity());
}

#[test]
fn category_only_showdown_drags_aces_down() {
    // Same-category showdowns all tie, so pocket aces lose most of their edge.
    let sim = EquitySimulator::new(HandRankEvaluator::default(), ShowdownRule::Category);
    let r = sim.estimate(&cards(&["AH", "AD"]), &[], 1, 2000, Some(42)).unwrap();
    assert!(r.equity() > 0.60 && r.equity() < 0.75, "equity {}", r.equity());
    assert!(r.ties > r.trials / 5);
}

#[test]
fn seven_deuce_is_an_underdog() {
    let r = estimate_equity(&cards(&["7H", "2D"]), &[], 1, 3000, Some(7)).unwrap();
    assert!(r.equity() > 0.30 && r.equity() < 0.41, "equity {}", r.equity());
}

// ── monotonicity ─────────────────────────────────────────────────────────────

#[test]
fn more_opponents_do_not_raise_equity() {
    let hole = cards(&["KH", "QH"]);
    let board = cards(&["2C", "8D", "JS"]);
    let mut previous = 1.0f64;
    for opponents in 1..=4 {
        let r = estimate_equity(&hole, &board, opponents, 3000, Some(17)).unwrap();
        assert!(
            r.equity() <= previous + 0.02,
            "{opponents} opponents: {} after {previous}",
            r.equity()
        );
        previous = r.equity();
    }
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn identical_seed_gives_identical_counters() {
    let config = SimulationConfig { seed: Some(42), trials: 1500, opponents: 2, ..Default::default() };
    let sim = EquitySimulator::from_config(&config).unwrap();
    let hole = cards(&["QS", "QD"]);
    let a = sim.estimate(&hole, &[], config.opponents, config.trials, config.seed).unwrap();
    let b = sim.estimate(&hole, &[], config.opponents, config.trials, config.seed).unwrap();
    assert_eq!(a, b);
}

#[test]
fn request_round_trips_through_json() {
    let json = r#"{ "hole": ["AH", "kd"], "board": ["10C", "JC", "QC"], "opponents": 2, "trials": 400 }"#;
    let request: EquityRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.hole, cards(&["AH", "KD"]));

    let result = EquitySimulator::default().estimate_request(&request, Some(3)).unwrap();
    let v = report::equity_report(&request, &result);
    assert_eq!(v["counters"]["trials"], 400);
    assert_eq!(v["hole"][1], "KD");
}

// ── errors ───────────────────────────────────────────────────────────────────

#[test]
fn too_many_opponents_fail_with_insufficient_cards() {
    let hole = cards(&["AH", "AD"]);
    let board = cards(&["2C", "3C", "4C"]);
    // 47 unseen; 22 opponents need 44 + 2 = 46, 23 need 48.
    assert!(estimate_equity(&hole, &board, 22, 10, Some(1)).is_ok());
    assert!(matches!(
        estimate_equity(&hole, &board, 23, 10, Some(1)),
        Err(EngineError::InsufficientCards { requested: 48, available: 47 })
    ));
    assert!(matches!(
        estimate_equity(&hole, &[], 26, 10, Some(1)),
        Err(EngineError::InsufficientCards { .. })
    ));
}

#[test]
fn malformed_tokens_never_reach_the_engine() {
    assert!(matches!(
        parse_cards(["AH", "1H"]),
        Err(EngineError::Parse { .. })
    ));
    assert!(matches!(
        parse_cards(["AH", "AQ"]),
        Err(EngineError::Parse { .. })
    ));
}
