//! Shared constants

use std::time::Duration;

/// Tick granularity of the main loop
pub const DEFAULT_TICK_MS: u64 = 100;
pub const DEFAULT_TICK: Duration = Duration::from_millis(DEFAULT_TICK_MS);

/// Divisor for the kB -> GB conversion of memory statistics
pub const KB_PER_GB: f64 = 1_000_000.0;

/// Text rendered by a block whose source failed
pub const FAILED_BLOCK_SUFFIX: &str = "n/a";
