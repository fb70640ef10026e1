use rand::Rng;

use crate::equity_engine::{
    error::{EngineError, EngineResult},
    models::{Card, Rank, Suit},
};

/// The 52-card universe minus a fixed set of known cards.
///
/// Unseen cards live in a fixed 52-slot array. `draw` runs one step of a
/// Fisher-Yates shuffle per card over `cards[cursor..len]`, so each draw is
/// O(1) and `reset` only rewinds the cursor: the slots always hold a
/// permutation of the same unseen set.
#[derive(Debug, Clone)]
pub struct DeckSampler {
    cards: [Card; 52],
    len: usize,
    cursor: usize,
    known: u64,
}

impl DeckSampler {
    /// Build the unseen deck; fails if any known card repeats or has an
    /// out-of-range rank.
    pub fn new(known: &[Card]) -> EngineResult<Self> {
        let mut mask = 0u64;
        for &c in known {
            c.validate()?;
            if mask & c.mask() != 0 {
                return Err(EngineError::DuplicateCard(c));
            }
            mask |= c.mask();
        }

        let filler = Card { rank: Rank(2), suit: Suit::Clubs };
        let mut cards = [filler; 52];
        let mut len = 0;
        for i in 0..52 {
            if mask & (1u64 << i) == 0 {
                if let Some(card) = Card::from_index(i) {
                    cards[len] = card;
                    len += 1;
                }
            }
        }

        Ok(DeckSampler { cards, len, cursor: 0, known: mask })
    }

    /// Make every unseen card available again.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Remove and return `n` cards chosen uniformly without replacement.
    pub fn draw<R: Rng>(&mut self, n: usize, rng: &mut R) -> EngineResult<&[Card]> {
        self.ensure_available(n)?;
        let start = self.cursor;
        for _ in 0..n {
            let j = rng.gen_range(self.cursor..self.len);
            self.cards.swap(self.cursor, j);
            self.cursor += 1;
        }
        Ok(&self.cards[start..self.cursor])
    }

    /// Fails with `InsufficientCards` unless `n` cards can still be drawn.
    pub fn ensure_available(&self, n: usize) -> EngineResult<()> {
        if n > self.remaining() {
            return Err(EngineError::InsufficientCards {
                requested: n,
                available: self.remaining(),
            });
        }
        Ok(())
    }

    /// Cards still available in the current trial.
    pub fn remaining(&self) -> usize {
        self.len - self.cursor
    }

    /// Size of the unseen universe, `52 - |known|`.
    pub fn unseen(&self) -> usize {
        self.len
    }

    pub fn is_known(&self, card: Card) -> bool {
        self.known & card.mask() != 0
    }

    /// Cards drawn since the last reset.
    pub fn drawn(&self) -> &[Card] {
        &self.cards[..self.cursor]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equity_engine::helpers::parse_cards;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn known_cards_with_bad_ranks_are_rejected() {
        let bad = Card { rank: Rank(0), suit: Suit::Hearts };
        assert_eq!(DeckSampler::new(&[bad]).unwrap_err(), EngineError::InvalidRank(0));
        let high = Card { rank: Rank(200), suit: Suit::Spades };
        let known = [parse_cards(["AS"]).unwrap()[0], high];
        assert_eq!(DeckSampler::new(&known).unwrap_err(), EngineError::InvalidRank(200));
    }

    #[test]
    fn full_deck_has_52_unique_cards() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut deck = DeckSampler::new(&[]).unwrap();
        let all: HashSet<Card> = deck.draw(52, &mut rng).unwrap().iter().copied().collect();
        assert_eq!(all.len(), 52);
        assert_eq!(deck.remaining(), 0);
    }

    #[test]
    fn known_cards_are_never_drawn() {
        let known = parse_cards(["AH", "AD", "10C"]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck = DeckSampler::new(&known).unwrap();
        assert_eq!(deck.unseen(), 49);
        for _ in 0..20 {
            deck.reset();
            let drawn = deck.draw(49, &mut rng).unwrap();
            assert!(drawn.iter().all(|c| !known.contains(c)));
            let unique: HashSet<Card> = drawn.iter().copied().collect();
            assert_eq!(unique.len(), 49);
        }
        assert!(deck.is_known(known[2]));
    }

    #[test]
    fn duplicate_known_cards_are_rejected() {
        let known = parse_cards(["AH", "KD", "AH"]).unwrap();
        assert!(matches!(DeckSampler::new(&known), Err(EngineError::DuplicateCard(_))));
    }

    #[test]
    fn reset_restores_availability() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut deck = DeckSampler::new(&parse_cards(["2C", "3C"]).unwrap()).unwrap();
        deck.draw(40, &mut rng).unwrap();
        assert_eq!(deck.remaining(), 10);
        assert_eq!(deck.drawn().len(), 40);
        deck.reset();
        assert_eq!(deck.remaining(), 50);
        assert!(deck.drawn().is_empty());
    }

    #[test]
    fn overdraw_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut deck = DeckSampler::new(&[]).unwrap();
        deck.draw(50, &mut rng).unwrap();
        let err = deck.draw(3, &mut rng).unwrap_err();
        assert_eq!(err, EngineError::InsufficientCards { requested: 3, available: 2 });
        // A failed draw leaves the deck untouched.
        assert_eq!(deck.remaining(), 2);
    }

    #[test]
    fn draws_are_deterministic_with_seed() {
        let make = |seed: u64| -> Vec<Card> {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut deck = DeckSampler::new(&[]).unwrap();
            deck.draw(5, &mut rng).unwrap().to_vec()
        };
        assert_eq!(make(99), make(99));
        assert_ne!(make(99), make(100));
    }

    #[test]
    fn draws_cover_the_deck_roughly_uniformly() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut deck = DeckSampler::new(&[]).unwrap();
        let mut counts = [0u32; 52];
        for _ in 0..5200 {
            deck.reset();
            let card = deck.draw(1, &mut rng).unwrap()[0];
            counts[card.index()] += 1;
        }
        // Expected 100 per card.
        assert!(counts.iter().all(|&n| (50..=160).contains(&n)), "{counts:?}");
    }
}
