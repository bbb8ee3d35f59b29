//! Memory source configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_meminfo_path() -> PathBuf {
    PathBuf::from("/proc/meminfo")
}

fn default_update_interval() -> u64 {
    3000
}

/// RAM usage source configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemorySourceConfig {
    #[serde(default = "default_meminfo_path")]
    pub meminfo_path: PathBuf,
    #[serde(default = "default_update_interval")]
    pub update_interval_ms: u64,
}

impl Default for MemorySourceConfig {
    fn default() -> Self {
        Self {
            meminfo_path: default_meminfo_path(),
            update_interval_ms: default_update_interval(),
        }
    }
}
