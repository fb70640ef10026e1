use crate::equity_engine::{
    error::{EngineError, EngineResult},
    models::{Card, HandStrength, RankCategory},
};

/// Stateless 5-card hand classifier.
///
/// The only setting is whether the wheel (A-2-3-4-5) counts as a straight.
/// By default it does not: consecutiveness is checked on ascending ranks with
/// the Ace fixed at 14.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandRankEvaluator {
    ace_low_straights: bool,
}

impl HandRankEvaluator {
    pub fn new(ace_low_straights: bool) -> Self {
        HandRankEvaluator { ace_low_straights }
    }

    pub fn with_ace_low_straights() -> Self {
        Self::new(true)
    }

    pub fn ace_low_straights(&self) -> bool {
        self.ace_low_straights
    }

    /// Classify exactly 5 distinct cards.
    pub fn classify(&self, cards: &[Card]) -> EngineResult<RankCategory> {
        let hand = five_distinct(cards)?;
        Ok(self.category(&hand))
    }

    /// Category plus kickers for exactly 5 distinct cards.
    pub fn strength(&self, cards: &[Card]) -> EngineResult<HandStrength> {
        let hand = five_distinct(cards)?;
        Ok(self.score(&hand))
    }

    /// Strongest 5-card subset of 5 to 7 distinct cards.
    pub fn best_strength(&self, cards: &[Card]) -> EngineResult<HandStrength> {
        if !(5..=7).contains(&cards.len()) {
            return Err(EngineError::InvalidHandSize {
                what: "showdown hand",
                expected: "5 to 7 cards",
                found: cards.len(),
            });
        }
        ensure_distinct(cards)?;
        Ok(self.best_unchecked(cards))
    }

    pub fn best_category(&self, cards: &[Card]) -> EngineResult<RankCategory> {
        self.best_strength(cards).map(|s| s.category)
    }

    /// Best subset without input validation; callers guarantee 5..=7 distinct cards.
    pub(crate) fn best_unchecked(&self, cards: &[Card]) -> HandStrength {
        (0u32..1 << cards.len())
            .filter(|mask| mask.count_ones() == 5)
            .map(|mask| {
                let mut hand = [cards[0]; 5];
                let picked = cards
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| (mask >> i) & 1 == 1)
                    .map(|(_, c)| *c);
                for (slot, card) in hand.iter_mut().zip(picked) {
                    *slot = card;
                }
                self.score(&hand)
            })
            .max()
            .unwrap_or(HandStrength { category: RankCategory::HighCard, ranks: [0; 5] })
    }

    pub(crate) fn category(&self, hand: &[Card; 5]) -> RankCategory {
        self.score(hand).category
    }

    /// Independent flush / straight / multiplicity checks, resolved by taking
    /// the strongest category that fires.
    pub(crate) fn score(&self, hand: &[Card; 5]) -> HandStrength {
        let mut ranks: [u8; 5] = hand.map(|c| c.rank.0);
        ranks.sort_unstable();

        let is_flush = hand.iter().all(|c| c.suit == hand[0].suit);
        let straight_top = self.straight_top(&ranks);

        if is_flush && ranks == [10, 11, 12, 13, 14] {
            return HandStrength { category: RankCategory::RoyalFlush, ranks: [14, 0, 0, 0, 0] };
        }
        if let Some(top) = straight_top {
            let category = if is_flush { RankCategory::StraightFlush } else { RankCategory::Straight };
            return HandStrength { category, ranks: [top, 0, 0, 0, 0] };
        }

        let (groups, len) = rank_groups(&ranks);
        let groups = &groups[..len];
        let tiebreak = groups_to_ranks(groups);
        if is_flush {
            // Flush kickers are the five ranks high to low.
            let mut desc = ranks;
            desc.reverse();
            return HandStrength { category: RankCategory::Flush, ranks: desc };
        }

        let category = match groups.len() {
            2 if groups[0].0 == 4 => RankCategory::FourOfAKind,
            2 => RankCategory::FullHouse,
            3 if groups[0].0 == 3 => RankCategory::ThreeOfAKind,
            3 => RankCategory::TwoPair,
            4 => RankCategory::Pair,
            _ => RankCategory::HighCard,
        };
        HandStrength { category, ranks: tiebreak }
    }

    /// Top card of a straight over the sorted ranks, if they form one.
    fn straight_top(&self, sorted: &[u8; 5]) -> Option<u8> {
        if sorted.windows(2).all(|w| w[1] == w[0] + 1) {
            return Some(sorted[4]);
        }
        if self.ace_low_straights && *sorted == [2, 3, 4, 5, 14] {
            return Some(5);
        }
        None
    }
}

/// Classify exactly 5 distinct cards with the default evaluator.
pub fn classify(cards: &[Card]) -> EngineResult<RankCategory> {
    HandRankEvaluator::default().classify(cards)
}

/// `(count, rank)` groups ordered by count, then rank, both descending.
fn rank_groups(sorted: &[u8; 5]) -> ([(u8, u8); 5], usize) {
    let mut counts = [0u8; 15];
    for &r in sorted {
        counts[r as usize] += 1;
    }
    let mut groups = [(0u8, 0u8); 5];
    let mut len = 0;
    for r in (2..=14u8).rev() {
        if counts[r as usize] > 0 {
            groups[len] = (counts[r as usize], r);
            len += 1;
        }
    }
    groups[..len].sort_unstable_by(|a, b| b.cmp(a));
    (groups, len)
}

fn groups_to_ranks(groups: &[(u8, u8)]) -> [u8; 5] {
    let mut out = [0u8; 5];
    for (slot, (_, rank)) in out.iter_mut().zip(groups) {
        *slot = *rank;
    }
    out
}

fn five_distinct(cards: &[Card]) -> EngineResult<[Card; 5]> {
    let hand: [Card; 5] = cards.try_into().map_err(|_| EngineError::InvalidHandSize {
        what: "hand",
        expected: "exactly 5 cards",
        found: cards.len(),
    })?;
    ensure_distinct(&hand)?;
    Ok(hand)
}

pub(crate) fn ensure_distinct(cards: &[Card]) -> EngineResult<()> {
    let mut seen = 0u64;
    for &c in cards {
        c.validate()?;
        if seen & c.mask() != 0 {
            return Err(EngineError::DuplicateCard(c));
        }
        seen |= c.mask();
    }
    Ok(())
}
