//! Wireless network source configuration types.

use serde::{Deserialize, Serialize};

fn default_interface() -> String {
    "wlan0".to_string()
}

fn default_update_interval() -> u64 {
    10_000
}

/// iwd (`iwctl station <iface> show`) source configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IwdSourceConfig {
    #[serde(default = "default_interface")]
    pub interface: String,
    #[serde(default = "default_update_interval")]
    pub update_interval_ms: u64,
}

impl Default for IwdSourceConfig {
    fn default() -> Self {
        Self {
            interface: default_interface(),
            update_interval_ms: default_update_interval(),
        }
    }
}

/// NetworkManager (`nmcli device show <iface>`) source configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkManagerSourceConfig {
    #[serde(default = "default_interface")]
    pub interface: String,
    #[serde(default = "default_update_interval")]
    pub update_interval_ms: u64,
}

impl Default for NetworkManagerSourceConfig {
    fn default() -> Self {
        Self {
            interface: default_interface(),
            update_interval_ms: default_update_interval(),
        }
    }
}
