//! Clock source configuration types.

use serde::{Deserialize, Serialize};

fn default_timezone() -> String {
    "Europe/Berlin".to_string()
}

fn default_time_format() -> String {
    "%H:%M".to_string()
}

fn default_date_format() -> String {
    "%d.%m.%Y".to_string()
}

fn default_time_interval() -> u64 {
    1000
}

fn default_date_interval() -> u64 {
    100_000
}

/// Time-of-day source configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSourceConfig {
    /// Timezone ID (e.g., "Europe/Berlin", "America/New_York", "Local")
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// strftime-style format string
    #[serde(default = "default_time_format")]
    pub format: String,
    #[serde(default = "default_time_interval")]
    pub update_interval_ms: u64,
}

impl Default for TimeSourceConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            format: default_time_format(),
            update_interval_ms: default_time_interval(),
        }
    }
}

/// Calendar date source configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateSourceConfig {
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_date_format")]
    pub format: String,
    #[serde(default = "default_date_interval")]
    pub update_interval_ms: u64,
}

impl Default for DateSourceConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            format: default_date_format(),
            update_interval_ms: default_date_interval(),
        }
    }
}
