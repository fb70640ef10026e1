//! Shared helpers for turning capture-layer token lists into cards and back.
//!
//! Detection and OCR hand the engine plain strings (`"AH"`, `"10d"`); these
//! helpers keep that conversion in one place so the CLI, the reports and the
//! tests all agree on the token grammar.

use crate::equity_engine::{
    error::EngineResult,
    models::Card,
};

/// Parse every token, failing on the first malformed one.
pub fn parse_cards<I, S>(tokens: I) -> EngineResult<Vec<Card>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|t| Card::parse(t.as_ref()))
        .collect()
}

/// Parse a whitespace- or comma-separated list (e.g. `"AH, KD 10C"`).
pub fn parse_card_list(s: &str) -> EngineResult<Vec<Card>> {
    parse_cards(
        s.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty()),
    )
}

/// Canonical tokens for a slice of cards.
pub fn card_tokens(cards: &[Card]) -> Vec<String> {
    cards.iter().map(|c| c.to_string()).collect()
}

/// Format cards as a space-separated string (e.g. "AH KS 7D").
pub fn cards_str(cards: &[Card]) -> String {
    card_tokens(cards).join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equity_engine::error::EngineError;
    use crate::equity_engine::models::Suit;

    #[test]
    fn list_accepts_mixed_separators() {
        let cards = parse_card_list("AH, kd  10c,TS").unwrap();
        assert_eq!(
            cards,
            vec![
                Card::new(14, Suit::Hearts).unwrap(),
                Card::new(13, Suit::Diamonds).unwrap(),
                Card::new(10, Suit::Clubs).unwrap(),
                Card::new(10, Suit::Spades).unwrap(),
            ]
        );
        assert!(parse_card_list("").unwrap().is_empty());
    }

    #[test]
    fn first_bad_token_fails_the_list() {
        let err = parse_cards(["AH", "XX", "1Z"]).unwrap_err();
        assert!(matches!(err, EngineError::Parse { ref token, .. } if token == "XX"));
    }

    #[test]
    fn tokens_are_canonical() {
        let cards = parse_cards(["th", "as"]).unwrap();
        assert_eq!(cards_str(&cards), "10H AS");
    }
}
