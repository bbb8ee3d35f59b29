//! Keyboard layout source configuration types.

use serde::{Deserialize, Serialize};

fn default_command() -> Vec<String> {
    vec!["xkb-switch".to_string(), "-p".to_string()]
}

fn default_update_interval() -> u64 {
    1000
}

/// Keyboard layout source configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyboardSourceConfig {
    /// Program followed by its arguments; stdout is the layout name
    #[serde(default = "default_command")]
    pub command: Vec<String>,
    #[serde(default = "default_update_interval")]
    pub update_interval_ms: u64,
}

impl Default for KeyboardSourceConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            update_interval_ms: default_update_interval(),
        }
    }
}
