//! Simulation settings, loadable from JSON.
//!
//! Every field has a default, so a config file only needs the keys it wants
//! to change:
//!
//! ```json
//! { "trials": 20000, "opponents": 2, "seed": 42, "showdown": "kickers" }
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::equity_engine::error::{EngineError, EngineResult};

/// How a showdown between two hands is decided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowdownRule {
    /// Category first, then kickers; exact ties only on identical strength.
    #[default]
    Kickers,
    /// Category only; any two hands of the same category tie.
    Category,
}

impl fmt::Display for ShowdownRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShowdownRule::Kickers  => write!(f, "kickers"),
            ShowdownRule::Category => write!(f, "category"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub trials: u32,
    pub opponents: usize,
    /// `None` draws the master seed from OS entropy.
    pub seed: Option<u64>,
    pub showdown: ShowdownRule,
    /// Count A-2-3-4-5 as a five-high straight.
    pub ace_low_straights: bool,
    /// Trials per parallel task. Results depend on this, not on thread count.
    pub chunk_size: u32,
    /// Size of a dedicated worker pool; `None` uses rayon's global pool.
    pub threads: Option<usize>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            trials: 1000,
            opponents: 1,
            seed: None,
            showdown: ShowdownRule::Kickers,
            ace_low_straights: false,
            chunk_size: 256,
            threads: None,
        }
    }
}

impl SimulationConfig {
    pub fn from_json_str(json: &str) -> EngineResult<Self> {
        let config: SimulationConfig =
            serde_json::from_str(json).map_err(|e| EngineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| EngineError::Config(format!("{}: {e}", path.display())))?;
        log::debug!("loaded simulation config from {}", path.display());
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.trials == 0 {
            return Err(EngineError::Config("trials must be at least 1".into()));
        }
        if self.opponents == 0 {
            return Err(EngineError::Config("opponents must be at least 1".into()));
        }
        if self.chunk_size == 0 {
            return Err(EngineError::Config("chunk_size must be at least 1".into()));
        }
        if self.threads == Some(0) {
            return Err(EngineError::Config("threads must be at least 1".into()));
        }
        Ok(())
    }
}
