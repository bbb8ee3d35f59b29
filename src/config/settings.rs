//! Application configuration

use anyhow::{bail, Context, Result};
use barline_core::DEFAULT_TICK_MS;
use barline_types::BlockConfig;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::defaults::default_blocks;

fn default_tick_ms() -> u64 {
    DEFAULT_TICK_MS
}

fn default_stop_signal() -> i32 {
    signal_hook::consts::SIGUSR1
}

fn default_cont_signal() -> i32 {
    signal_hook::consts::SIGUSR2
}

fn default_click_events() -> bool {
    true
}

fn default_command_timeout_ms() -> u64 {
    5000
}

/// Application-wide configuration, read once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Main loop tick in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Signal the renderer sends to pause output
    #[serde(default = "default_stop_signal")]
    pub stop_signal: i32,
    /// Signal the renderer sends to resume output
    #[serde(default = "default_cont_signal")]
    pub cont_signal: i32,
    #[serde(default = "default_click_events")]
    pub click_events: bool,
    /// Kill external commands after this long (0 = wait forever)
    #[serde(default = "default_command_timeout_ms")]
    pub command_timeout_ms: u64,
    /// Blocks in left-to-right order
    #[serde(default = "default_blocks")]
    pub blocks: Vec<BlockConfig>,
}

impl AppConfig {
    /// Load the configuration for this run.
    ///
    /// An explicit path must exist. Without one, the per-user config file is
    /// used if present, otherwise the built-in defaults.
    pub fn load_effective(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load_from_path(path)?,
            None => Self::load()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the per-user config directory
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            info!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("org", "barline", "barline")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }

    /// Reject configurations the main loop cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.blocks.is_empty() {
            bail!("Config must define at least one block");
        }
        if self.tick_ms == 0 {
            bail!("tick_ms must be greater than zero");
        }
        if self.stop_signal == self.cont_signal {
            bail!(
                "stop_signal and cont_signal must differ (both are {})",
                self.stop_signal
            );
        }

        let mut names = HashSet::new();
        for block in &self.blocks {
            if !names.insert(block.name.as_str()) {
                warn!("Block name '{}' is used more than once", block.name);
            }
        }
        Ok(())
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn command_timeout(&self) -> Option<Duration> {
        match self.command_timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            stop_signal: default_stop_signal(),
            cont_signal: default_cont_signal(),
            click_events: default_click_events(),
            command_timeout_ms: default_command_timeout_ms(),
            blocks: default_blocks(),
        }
    }
}
