//! CPU source configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_cpuinfo_path() -> PathBuf {
    PathBuf::from("/proc/cpuinfo")
}

fn default_update_interval() -> u64 {
    3000
}

/// CPU frequency source configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuSourceConfig {
    #[serde(default = "default_cpuinfo_path")]
    pub cpuinfo_path: PathBuf,
    #[serde(default = "default_update_interval")]
    pub update_interval_ms: u64,
}

impl Default for CpuSourceConfig {
    fn default() -> Self {
        Self {
            cpuinfo_path: default_cpuinfo_path(),
            update_interval_ms: default_update_interval(),
        }
    }
}
