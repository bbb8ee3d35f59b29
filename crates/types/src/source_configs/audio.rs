//! Audio source configuration types.

use serde::{Deserialize, Serialize};

fn default_mixer() -> String {
    "pamixer".to_string()
}

fn default_update_interval() -> u64 {
    1000
}

/// Audio volume source configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioSourceConfig {
    /// Mixer CLI accepting `--get-volume` and `--get-mute`
    #[serde(default = "default_mixer")]
    pub mixer: String,
    #[serde(default = "default_update_interval")]
    pub update_interval_ms: u64,
}

impl Default for AudioSourceConfig {
    fn default() -> Self {
        Self {
            mixer: default_mixer(),
            update_interval_ms: default_update_interval(),
        }
    }
}
