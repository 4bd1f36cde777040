//! Engine configuration
//!
//! [`EngineConfig`] holds the search limits. Every field has a default, so
//! a config file only needs the values it changes:
//!
//! ```json
//! { "max_depth": 10, "time_budget_secs": 2.5 }
//! ```
//!
//! # File Location
//!
//! `config.json` in the user's configuration directory, e.g.
//! `~/.config/chess-analysis/config.json` on Linux. Callers may pass an
//! explicit path instead.
//!
//! # Error Handling
//!
//! [`EngineConfig::load`] reports I/O and parse failures;
//! [`EngineConfig::load_or_default`] logs them and falls back to defaults.

use crate::constants::*;
use crate::error::EngineResult;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Config filename
const CONFIG_FILENAME: &str = "config.json";

/// Search limits for one [`Analyzer`](crate::Analyzer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Requested depths are clamped to `1..=max_depth`, never past
    /// [`MAX_SEARCH_DEPTH`]
    pub max_depth: u8,
    /// Deepening stops after the first completed depth past this budget
    pub time_budget_secs: f64,
    /// Deepening stops once `|evaluation|` exceeds this
    pub mate_threshold: i32,
    /// Capped at [`TT_CAPACITY`]
    pub tt_capacity: usize,
    /// Capped at [`QUIESCENCE_HORIZON`]
    pub quiescence_horizon: i32,
    pub result_count: usize,
    /// Padding moves score this much below the evaluation
    pub padding_penalty: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_SEARCH_DEPTH,
            time_budget_secs: TIME_BUDGET_SECS,
            mate_threshold: MATE_THRESHOLD,
            tt_capacity: TT_CAPACITY,
            quiescence_horizon: QUIESCENCE_HORIZON,
            result_count: RESULT_COUNT,
            padding_penalty: PADDING_PENALTY,
        }
    }
}

impl EngineConfig {
    /// `config.json` in the platform config directory
    ///
    /// Returns `None` if no home directory can be determined.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "trilltino", "chess-analysis")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
    }

    /// Read a config file
    ///
    /// # Errors
    ///
    /// Returns [`ConfigIo`](crate::EngineError::ConfigIo) if the file cannot
    /// be read and [`ConfigSerialization`](crate::EngineError::ConfigSerialization)
    /// if it is not valid JSON for this struct.
    pub fn load(path: &Path) -> EngineResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config = serde_json::from_str::<EngineConfig>(&contents)?;
        Ok(config.sanitized())
    }

    /// Load `path`, else the default location, else defaults
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let resolved = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    info!("[CONFIG] No config file found. Using defaults.");
                    return Self::default();
                }
            },
        };

        match Self::load(&resolved) {
            Ok(config) => {
                info!("[CONFIG] Loaded config from {:?}", resolved);
                config
            }
            Err(e) => {
                warn!(
                    "[CONFIG] Failed to load config at {:?}: {}. Using defaults.",
                    resolved, e
                );
                Self::default()
            }
        }
    }

    /// Write the config as pretty JSON, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, path: &Path) -> EngineResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Pull out-of-range values back inside the engine's hard limits
    pub(crate) fn sanitized(mut self) -> Self {
        self.max_depth = self.max_depth.clamp(1, MAX_SEARCH_DEPTH);
        self.tt_capacity = self.tt_capacity.min(TT_CAPACITY);
        self.result_count = self.result_count.max(1);
        self.quiescence_horizon = self.quiescence_horizon.clamp(0, QUIESCENCE_HORIZON);
        if !self.time_budget_secs.is_finite() || self.time_budget_secs < 0.0 {
            self.time_budget_secs = TIME_BUDGET_SECS;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("analysis_engine_config_{}_{}", std::process::id(), name))
            .join(CONFIG_FILENAME)
    }

    #[test]
    fn test_defaults_match_constants() {
        let config = EngineConfig::default();
        assert_eq!(config.max_depth, 12);
        assert_eq!(config.tt_capacity, 200_000);
        assert_eq!(config.result_count, 3);
        assert_eq!(config.quiescence_horizon, 4);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{ "max_depth": 6, "time_budget_secs": 1.5 }"#).unwrap();
        assert_eq!(config.max_depth, 6);
        assert_eq!(config.time_budget_secs, 1.5);
        assert_eq!(config.mate_threshold, MATE_THRESHOLD);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("roundtrip");
        let config = EngineConfig {
            max_depth: 5,
            ..EngineConfig::default()
        };
        config.save(&path).unwrap();
        assert_eq!(EngineConfig::load(&path).unwrap(), config);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_bad_files_fall_back_to_defaults() {
        let missing = temp_path("missing");
        assert!(matches!(
            EngineConfig::load(&missing),
            Err(EngineError::ConfigIo(_))
        ));
        assert_eq!(
            EngineConfig::load_or_default(Some(&missing)),
            EngineConfig::default()
        );

        let garbled = temp_path("garbled");
        fs::create_dir_all(garbled.parent().unwrap()).unwrap();
        fs::write(&garbled, "{ not json").unwrap();
        assert!(matches!(
            EngineConfig::load(&garbled),
            Err(EngineError::ConfigSerialization(_))
        ));
        assert_eq!(
            EngineConfig::load_or_default(Some(&garbled)),
            EngineConfig::default()
        );
        let _ = fs::remove_dir_all(garbled.parent().unwrap());
    }

    #[test]
    fn test_zero_depth_is_sanitized() {
        let path = temp_path("zero_depth");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{ "max_depth": 0, "result_count": 0 }"#).unwrap();
        let config = EngineConfig::load(&path).unwrap();
        assert_eq!(config.max_depth, 1);
        assert_eq!(config.result_count, 1);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_limits_cannot_be_raised_by_file() {
        let path = temp_path("over_limit");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            r#"{ "max_depth": 20, "tt_capacity": 5000000, "quiescence_horizon": 9 }"#,
        )
        .unwrap();
        let config = EngineConfig::load(&path).unwrap();
        assert_eq!(config.max_depth, MAX_SEARCH_DEPTH);
        assert_eq!(config.tt_capacity, TT_CAPACITY);
        assert_eq!(config.quiescence_horizon, QUIESCENCE_HORIZON);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
