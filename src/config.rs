//! Engine configuration loaded from `capfill.toml`
//!
//! Every tunable number the CPU uses lives here. Each section and field has a
//! serde default, so a partial file overrides only what it names and the
//! built-in defaults reproduce the stock engine exactly.

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "capfill.toml";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub search: SearchConfig,
    pub eval: EvalConfig,
    pub shogo: ShogoConfig,
}

/// Search depth schedule and root selection
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// First iterative-deepening depth
    pub min_depth: u8,
    /// Depth cap while more than `open_empty` cells are empty
    pub open_depth: u8,
    pub open_empty: usize,
    /// Depth cap while more than `mid_empty` cells are empty
    pub mid_depth: u8,
    pub mid_empty: usize,
    /// Depth cap for the endgame
    pub late_depth: u8,
    /// Root moves within this many points of the best are equally good
    pub root_margin: i32,
    /// Base score of a decided game, before the depth adjustment
    pub win_score: i32,
}

impl SearchConfig {
    /// Depth cap for a board with `empty` free cells.
    pub fn depth_cap(&self, empty: usize) -> u8 {
        let cap = if empty > self.open_empty {
            self.open_depth
        } else if empty > self.mid_empty {
            self.mid_depth
        } else {
            self.late_depth
        };
        cap.max(self.min_depth)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_depth: 2,
            open_depth: 4,
            open_empty: 15,
            mid_depth: 5,
            mid_empty: 10,
            late_depth: 6,
            root_margin: 25,
            win_score: 10_000,
        }
    }
}

/// Line-ownership evaluation weights
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Multiplier on the squared count of an uncontested line
    pub line_weight: i32,
    /// Bonus for holding the center cell
    pub center_bonus: i32,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            line_weight: 20,
            center_bonus: 30,
        }
    }
}

/// Shogo round selector weights
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShogoConfig {
    pub eval_weight: i32,
    pub own_potential_weight: i32,
    pub opp_potential_weight: i32,
    /// Cap on points awarded for one round
    pub max_round_points: u32,
}

impl Default for ShogoConfig {
    fn default() -> Self {
        Self {
            eval_weight: 2,
            own_potential_weight: 85,
            opp_potential_weight: 75,
            max_round_points: 3,
        }
    }
}

impl EngineConfig {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml(&contents)
    }

    /// Parses configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Attempts to load from file, falls back to built-in defaults on error
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        Self::from_file(path).unwrap_or_else(|e| {
            log::warn!(
                "could not load {} ({}), using built-in defaults",
                path.display(),
                e
            );
            Self::default()
        })
    }
}
