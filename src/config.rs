//! Runner configuration from environment variables.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::core::Rules;
use crate::types::{LEVEL_STEP_MAX_MS, LEVEL_STEP_MIN_MS, LEVEL_STEP_MS};

pub const ENV_SEED: &str = "FALLING_BLOCKS_SEED";
pub const ENV_LEVEL_STEP_MS: &str = "FALLING_BLOCKS_LEVEL_STEP_MS";
pub const ENV_LOG_PATH: &str = "FALLING_BLOCKS_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Piece source seed
    pub seed: u32,
    /// Gravity speed-up per level, 10..=50ms
    pub level_step_ms: u32,
    /// Event log file; `None` disables logging
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            level_step_ms: LEVEL_STEP_MS,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Read from the process environment.
    ///
    /// Unset or unparsable values fall back to defaults; without a seed one is
    /// derived from the wall clock.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup(ENV_SEED)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let level_step_ms = lookup(ENV_LEVEL_STEP_MS)
            .and_then(|s| s.trim().parse::<u32>().ok())
            .map(|v| v.clamp(LEVEL_STEP_MIN_MS, LEVEL_STEP_MAX_MS))
            .unwrap_or(LEVEL_STEP_MS);

        let log_path = lookup(ENV_LOG_PATH)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            level_step_ms,
            log_path,
        }
    }

    pub fn rules(&self) -> Rules {
        Rules::default().with_level_step_ms(self.level_step_ms)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}
