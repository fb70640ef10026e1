//! Hand ranking and Monte Carlo equity engine.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: cards, rank categories, hand strength, equity request/result |
//! | `error`     | `EngineError`, the single error type of the engine |
//! | `config`    | `SimulationConfig` and `ShowdownRule`, loadable from JSON |
//! | `evaluator` | 5-card classification and best-of-7 hand strength |
//! | `deck`      | Unseen-card deck with O(1) draw and reset |
//! | `simulator` | Trial loop, worker-pool fan-out and tally merging |
//! | `helpers`   | Token list parsing and formatting |
//! | `report`    | JSON reports for display and logging collaborators |

pub mod config;
pub mod deck;
pub mod error;
pub mod evaluator;
pub mod helpers;
pub mod models;
pub mod report;
pub mod simulator;

pub use config::{ShowdownRule, SimulationConfig};
pub use deck::DeckSampler;
pub use error::{EngineError, EngineResult};
pub use evaluator::{classify, HandRankEvaluator};
pub use helpers::{parse_card_list, parse_cards};
pub use models::{
    Card, EquityRequest, EquityResult, HandStrength, Rank, RankCategory, Suit,
};
pub use simulator::{estimate_equity, EquitySimulator};
