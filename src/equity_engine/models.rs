use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::equity_engine::error::EngineError;

// ---------------------------------------------------------------------------
// Card primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs    => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts   => 'H',
            Suit::Spades   => 'S',
        }
    }

    fn from_symbol(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Rank 2..=14 where 14 = Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    pub fn symbol(self) -> &'static str {
        match self.0 {
            2 => "2", 3 => "3", 4 => "4", 5 => "5", 6 => "6",
            7 => "7", 8 => "8", 9 => "9", 10 => "10",
            11 => "J", 12 => "Q", 13 => "K", 14 => "A",
            _ => "?",
        }
    }

    /// Accepts `2`-`9`, `10` or `T`, `J`, `Q`, `K`, `A` in either case.
    fn from_symbol(s: &str) -> Option<Rank> {
        let r = match s.to_ascii_uppercase().as_str() {
            "2" => 2, "3" => 3, "4" => 4, "5" => 5, "6" => 6,
            "7" => 7, "8" => 8, "9" => 9, "10" | "T" => 10,
            "J" => 11, "Q" => 12, "K" => 13, "A" => 14,
            _ => return None,
        };
        Some(Rank(r))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single playing card.
///
/// Equality is on `(rank, suit)`. Ordering is by rank first; the suit only
/// breaks ties between equal ranks so that `Ord` stays consistent with `Eq`.
///
/// Cards serialize as their canonical token (`"10H"`, `"AS"`), the same form
/// the capture layer hands over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Fails with `InvalidRank` unless `rank` is in `2..=14`.
    pub fn new(rank: u8, suit: Suit) -> Result<Card, EngineError> {
        let card = Card { rank: Rank(rank), suit };
        card.validate()?;
        Ok(card)
    }

    pub fn is_valid(self) -> bool {
        (2..=14).contains(&self.rank.0)
    }

    /// Fields are public, so cards built by hand are checked before use.
    pub(crate) fn validate(self) -> Result<(), EngineError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(EngineError::InvalidRank(self.rank.0))
        }
    }

    /// Parse a single token such as `"AH"`, `"td"` or `"10S"`.
    pub fn parse(token: &str) -> Result<Card, EngineError> {
        let trimmed = token.trim();
        let chars: Vec<char> = trimmed.chars().collect();
        if !(2..=3).contains(&chars.len()) {
            return Err(EngineError::parse(token, "expected 2 or 3 characters"));
        }
        let (rank_part, suit_char) = chars.split_at(chars.len() - 1);
        let rank_str: String = rank_part.iter().collect();
        let rank = Rank::from_symbol(&rank_str)
            .ok_or_else(|| EngineError::parse(token, format!("unknown rank {rank_str:?}")))?;
        let suit = Suit::from_symbol(suit_char[0])
            .ok_or_else(|| EngineError::parse(token, format!("unknown suit {:?}", suit_char[0])))?;
        Ok(Card { rank, suit })
    }

    /// Canonical slot in `0..52`: rank-major, suit-minor. Only meaningful
    /// for valid cards.
    pub fn index(self) -> usize {
        (self.rank.0 as usize - 2) * 4 + self.suit as usize
    }

    pub fn from_index(index: usize) -> Option<Card> {
        if index >= 52 {
            return None;
        }
        Some(Card {
            rank: Rank((index / 4) as u8 + 2),
            suit: Suit::ALL[index % 4],
        })
    }

    /// Single-bit mask used for set membership.
    pub(crate) fn mask(self) -> u64 {
        1u64 << self.index()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = EngineError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::parse(s)
    }
}

impl TryFrom<String> for Card {
    type Error = EngineError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Card::parse(&s)
    }
}

impl From<Card> for String {
    fn from(c: Card) -> String {
        c.to_string()
    }
}

// ---------------------------------------------------------------------------
// Hand ranking
// ---------------------------------------------------------------------------

/// The ten hand categories, weakest first. The discriminant is the strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RankCategory {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl RankCategory {
    pub const ALL: [RankCategory; 10] = [
        RankCategory::HighCard,
        RankCategory::Pair,
        RankCategory::TwoPair,
        RankCategory::ThreeOfAKind,
        RankCategory::Straight,
        RankCategory::Flush,
        RankCategory::FullHouse,
        RankCategory::FourOfAKind,
        RankCategory::StraightFlush,
        RankCategory::RoyalFlush,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for RankCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RankCategory::HighCard      => "High Card",
            RankCategory::Pair          => "Pair",
            RankCategory::TwoPair       => "Two Pair",
            RankCategory::ThreeOfAKind  => "Three of a Kind",
            RankCategory::Straight      => "Straight",
            RankCategory::Flush         => "Flush",
            RankCategory::FullHouse     => "Full House",
            RankCategory::FourOfAKind   => "Four of a Kind",
            RankCategory::StraightFlush => "Straight Flush",
            RankCategory::RoyalFlush    => "Royal Flush",
        };
        write!(f, "{}", s)
    }
}

/// Category plus tiebreak ranks, compared lexicographically.
///
/// `ranks` lists the rank groups by group size, then by rank, both descending
/// (`KKK44` → `[13, 4, 0, 0, 0]`). Straights carry only their top card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct HandStrength {
    pub category: RankCategory,
    pub ranks: [u8; 5],
}

// ---------------------------------------------------------------------------
// Equity request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquityRequest {
    pub hole: Vec<Card>,
    #[serde(default)]
    pub board: Vec<Card>,
    pub opponents: usize,
    pub trials: u32,
}

/// Aggregate showdown counters for one equity estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquityResult {
    pub wins: u64,
    pub ties: u64,
    pub trials: u64,
}

impl EquityResult {
    /// `(wins + ties / 2) / trials`, in `[0, 1]`.
    pub fn equity(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        (self.wins as f64 + 0.5 * self.ties as f64) / self.trials as f64
    }

    pub fn losses(&self) -> u64 {
        self.trials.saturating_sub(self.wins).saturating_sub(self.ties)
    }
}

impl fmt::Display for EquityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2}% (wins {}, ties {}, losses {}, trials {})",
            self.equity() * 100.0,
            self.wins,
            self.ties,
            self.losses(),
            self.trials
        )
    }
}
