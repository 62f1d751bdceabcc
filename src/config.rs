//! Validator configuration, read from TOML
//!
//! ```toml
//! grid_size = 14
//! history_capacity = 50
//!
//! [search]
//! max_states = 10000
//! max_moves = 100
//! timeout_ms = 5000
//! ```
//!
//! Every key is optional. Unknown keys are an error so typos do not silently
//! fall back to defaults.

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Geometry, Level, Session};
use crate::engine::SearchLimits;
use crate::types::{DEFAULT_MAX_MOVES, DEFAULT_MAX_STATES, GRID_SIZE, HISTORY_CAPACITY};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub max_states: usize,
    pub max_moves: u32,
    pub timeout_ms: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_states: DEFAULT_MAX_STATES,
            max_moves: DEFAULT_MAX_MOVES,
            timeout_ms: None,
        }
    }
}

impl SearchConfig {
    pub fn limits(&self) -> SearchLimits {
        let limits = SearchLimits::new(self.max_states, self.max_moves);
        match self.timeout_ms {
            Some(ms) => limits.with_time_budget(Duration::from_millis(ms)),
            None => limits,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub grid_size: u8,
    pub history_capacity: usize,
    pub search: SearchConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            history_capacity: HISTORY_CAPACITY,
            search: SearchConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            bail!("grid_size must be at least 1");
        }
        if self.search.max_states == 0 {
            bail!("search.max_states must be at least 1");
        }
        Ok(())
    }

    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.grid_size)
    }

    pub fn limits(&self) -> SearchLimits {
        self.search.limits()
    }

    /// Start a play session on this config's grid with its history depth
    pub fn start_session(&self, level: Level) -> Session {
        Session::start(level, self.geometry(), self.history_capacity)
    }
}
