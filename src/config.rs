use std::path::Path;

use serde::Deserialize;

use crate::engine::{MAX_SIZE, MIN_SIZE};
use crate::lookahead::LookaheadConfig;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Settings for a batch of self-played games.
///
/// ```
/// use slide_2048::config::SelfPlayConfig;
/// let cfg = SelfPlayConfig::from_toml_str("games = 8\n[lookahead]\ndepth_cap = 2\n").unwrap();
/// assert_eq!(cfg.games, 8);
/// assert_eq!(cfg.size, 4);
/// assert_eq!(cfg.lookahead.depth_cap, Some(2));
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SelfPlayConfig {
    #[serde(default = "defaults::size")]
    pub size: usize,
    #[serde(default = "defaults::games")]
    pub games: u32,
    /// Game `i` is seeded with `seed + i`; entropy-seeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Stop a game after this many successful moves.
    #[serde(default)]
    pub max_moves: Option<u64>,
    #[serde(default)]
    pub lookahead: LookaheadConfig,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            size: defaults::size(),
            games: defaults::games(),
            seed: None,
            max_moves: None,
            lookahead: LookaheadConfig::default(),
        }
    }
}

impl SelfPlayConfig {
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(contents)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            return Err(ConfigError::Invalid(format!("size {} outside {MIN_SIZE}..={MAX_SIZE}", self.size)));
        }
        if self.games == 0 {
            return Err(ConfigError::Invalid("games must be at least 1".into()));
        }
        let p = self.lookahead.prob_cutoff;
        if !p.is_finite() || !(0.0..1.0).contains(&p) {
            return Err(ConfigError::Invalid(format!("prob_cutoff {p} outside [0, 1)")));
        }
        Ok(())
    }
}

mod defaults {
    pub fn size() -> usize { 4 }
    pub fn games() -> u32 { 16 }
}
