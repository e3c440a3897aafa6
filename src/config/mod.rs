//! Configuration loading.
//!
//! Reads `instacalc/config.toml` from the platform config directory. A
//! missing file means defaults; a malformed file logs a warning and also
//! means defaults, so a bad edit never takes the tool down.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::warn;

use crate::calculator::DEFAULT_MAX_DEPTH;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Ceiling for nested-expression recursion.
    pub max_depth: usize,
    /// Quiescence window for watch mode, in milliseconds.
    pub debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            debounce_ms: 200,
        }
    }
}

impl Config {
    /// Load the user configuration, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        let Ok(raw) = fs::read_to_string(&path) else {
            return Self::default();
        };
        match toml::from_str(&raw) {
            Ok(config) => config,
            Err(err) => {
                warn!(path = %path.display(), %err, "ignoring malformed config");
                Self::default()
            }
        }
    }

    fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("instacalc").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.debounce_ms, 200);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let config: Config = toml::from_str("max_depth = 8").unwrap();
        assert_eq!(config.max_depth, 8);
        assert_eq!(config.debounce_ms, 200);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(toml::from_str::<Config>("max_deepth = 8").is_err());
    }
}
