//! JSON reports for the collaborators that display or log engine output.
//!
//! The dashboard and the session log both consume plain JSON: card tokens in
//! the capture layer's format, the category label, and the raw counters next
//! to the derived equity.

use serde_json::{json, Value};

use crate::equity_engine::{
    helpers::card_tokens,
    models::{Card, EquityRequest, EquityResult, RankCategory},
};

/// Derive the street name from the number of board cards.
fn street_str(board_len: usize) -> &'static str {
    match board_len {
        0 => "PreFlop",
        3 => "Flop",
        4 => "Turn",
        5 => "River",
        _ => "Partial",
    }
}

/// Build the 5-slot board array; unseen slots are empty strings.
fn board_slots(board: &[Card]) -> Value {
    let slots: Vec<Value> = (0..5usize)
        .map(|i| {
            let card = board.get(i).map(|c| c.to_string()).unwrap_or_default();
            json!({ "id": i, "card": card, "known": i < board.len() })
        })
        .collect();
    Value::Array(slots)
}

/// Report for a single classified hand.
pub fn hand_report(cards: &[Card], category: RankCategory) -> Value {
    json!({
        "report_type": "HandRank",
        "cards": card_tokens(cards),
        "category": category.to_string(),
        "strength": category.value(),
    })
}

/// Report for one equity estimate.
pub fn equity_report(request: &EquityRequest, result: &EquityResult) -> Value {
    json!({
        "report_type": "Equity",
        "hole": card_tokens(&request.hole),
        "street": street_str(request.board.len()),
        "board": board_slots(&request.board),
        "opponents": request.opponents,
        "counters": {
            "wins": result.wins,
            "ties": result.ties,
            "losses": result.losses(),
            "trials": result.trials,
        },
        "equity": result.equity(),
    })
}
