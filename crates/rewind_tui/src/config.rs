//! Runtime configuration for the terminal client.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Top-level configuration, read from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Redraw interval while an animation is running, in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    tick_rate_ms: u64,

    /// File that receives tracing output.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Animation settings.
    #[serde(default)]
    animation: AnimationConfig,
}

/// Timing of the decorative effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Whether effects run at all.
    #[serde(default = "default_enabled")]
    enabled: bool,

    /// How long a freshly placed mark bounces, in milliseconds.
    #[serde(default = "default_stage_ms")]
    move_ms: u64,

    /// First win stage: the banner becomes visible.
    #[serde(default = "default_stage_ms")]
    reveal_ms: u64,

    /// Second win stage: the confetti fades in.
    #[serde(default = "default_stage_ms")]
    fade_ms: u64,
}

#[instrument]
fn default_tick_rate_ms() -> u64 {
    50
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("rewind_tui.log")
}

#[instrument]
fn default_enabled() -> bool {
    true
}

#[instrument]
fn default_stage_ms() -> u64 {
    1000
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            log_file: default_log_file(),
            animation: AnimationConfig::default(),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            move_ms: default_stage_ms(),
            reveal_ms: default_stage_ms(),
            fade_ms: default_stage_ms(),
        }
    }
}

impl AnimationConfig {
    /// Settings with every effect switched off.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Move bounce length.
    pub fn move_duration(&self) -> Duration {
        Duration::from_millis(self.move_ms)
    }

    /// Win banner reveal length.
    pub fn reveal_duration(&self) -> Duration {
        Duration::from_millis(self.reveal_ms)
    }

    /// Confetti fade-in length.
    pub fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.tick_rate_ms == 0 {
            return Err(ConfigError::new("tick_rate_ms must be positive".to_string()));
        }

        info!(tick_rate_ms = config.tick_rate_ms, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of file values.
    #[instrument(skip(self))]
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(tick_rate_ms) = cli.tick_rate_ms {
            self.tick_rate_ms = tick_rate_ms.max(1);
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = log_file.clone();
        }
        if cli.no_animation {
            self.animation.enabled = false;
        }
        self
    }

    /// Redraw interval.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write");
        file
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = write_config("");
        let config = TuiConfig::from_file(file.path()).expect("valid config");
        assert_eq!(config, TuiConfig::default());
        assert_eq!(config.tick_rate(), Duration::from_millis(50));
        assert_eq!(config.animation().move_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_partial_animation_table() {
        let file = write_config("tick_rate_ms = 30\n[animation]\nfade_ms = 250\n");
        let config = TuiConfig::from_file(file.path()).expect("valid config");
        assert_eq!(*config.tick_rate_ms(), 30);
        assert_eq!(*config.animation().fade_ms(), 250);
        assert_eq!(*config.animation().reveal_ms(), 1000);
        assert!(*config.animation().enabled());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let file = write_config("tick_rate_ms = \"fast\"");
        let err = TuiConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_zero_tick_rate_is_error() {
        let file = write_config("tick_rate_ms = 0");
        assert!(TuiConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = TuiConfig::load(dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(config, TuiConfig::default());
    }

    #[test]
    fn test_cli_overrides_file_values() {
        let cli = Cli::parse_from(["rewind", "--tick-rate-ms", "0", "--no-animation"]);
        let config = TuiConfig::default().with_cli(&cli);
        assert_eq!(*config.tick_rate_ms(), 1);
        assert!(!*config.animation().enabled());
        assert_eq!(config.log_file(), &PathBuf::from("rewind_tui.log"));
    }
}
