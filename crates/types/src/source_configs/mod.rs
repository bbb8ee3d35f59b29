//! Source configuration types for all data sources.

pub mod audio;
pub mod clock;
pub mod cpu;
pub mod keyboard;
pub mod memory;
pub mod network;

use serde::{Deserialize, Serialize};
use std::time::Duration;

// Re-export all source config types for convenience
pub use audio::AudioSourceConfig;
pub use clock::{DateSourceConfig, TimeSourceConfig};
pub use cpu::CpuSourceConfig;
pub use keyboard::KeyboardSourceConfig;
pub use memory::MemorySourceConfig;
pub use network::{IwdSourceConfig, NetworkManagerSourceConfig};

/// Type-safe enum for all source configurations.
/// Uses serde tag for JSON serialization: {"source_type": "cpu", ...}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source_type")]
pub enum SourceConfig {
    #[serde(rename = "time")]
    Time(TimeSourceConfig),

    #[serde(rename = "date")]
    Date(DateSourceConfig),

    #[serde(rename = "iwd")]
    Iwd(IwdSourceConfig),

    #[serde(rename = "network_manager")]
    NetworkManager(NetworkManagerSourceConfig),

    #[serde(rename = "audio")]
    Audio(AudioSourceConfig),

    #[serde(rename = "cpu")]
    Cpu(CpuSourceConfig),

    #[serde(rename = "memory")]
    Memory(MemorySourceConfig),

    #[serde(rename = "keyboard")]
    Keyboard(KeyboardSourceConfig),
}

impl SourceConfig {
    /// Get the source type ID string
    pub fn source_type(&self) -> &'static str {
        match self {
            SourceConfig::Time(_) => "time",
            SourceConfig::Date(_) => "date",
            SourceConfig::Iwd(_) => "iwd",
            SourceConfig::NetworkManager(_) => "network_manager",
            SourceConfig::Audio(_) => "audio",
            SourceConfig::Cpu(_) => "cpu",
            SourceConfig::Memory(_) => "memory",
            SourceConfig::Keyboard(_) => "keyboard",
        }
    }

    /// Get the update interval in milliseconds from this source config
    pub fn update_interval_ms(&self) -> u64 {
        match self {
            SourceConfig::Time(cfg) => cfg.update_interval_ms,
            SourceConfig::Date(cfg) => cfg.update_interval_ms,
            SourceConfig::Iwd(cfg) => cfg.update_interval_ms,
            SourceConfig::NetworkManager(cfg) => cfg.update_interval_ms,
            SourceConfig::Audio(cfg) => cfg.update_interval_ms,
            SourceConfig::Cpu(cfg) => cfg.update_interval_ms,
            SourceConfig::Memory(cfg) => cfg.update_interval_ms,
            SourceConfig::Keyboard(cfg) => cfg.update_interval_ms,
        }
    }

    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms())
    }
}
