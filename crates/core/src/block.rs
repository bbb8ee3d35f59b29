//! A named, independently timed display unit with a cached result

use crate::constants::FAILED_BLOCK_SUFFIX;
use crate::data_source::{BoxedDataSource, SourceOutput};
use barline_types::{BlockAppearance, BlockAttributes};
use log::{trace, warn};
use std::time::{Duration, Instant};

/// Wraps a data source with a name, an update interval and the attributes
/// computed by the most recent refresh.
///
/// The cache is filled eagerly on construction and afterwards only changes
/// when a staleness check finds the interval elapsed.
pub struct Block {
    name: String,
    interval: Duration,
    last_refresh: Instant,
    /// Appearance-only attributes every refresh starts from
    base: BlockAttributes,
    cached: BlockAttributes,
    source: BoxedDataSource,
}

impl Block {
    pub fn new(name: impl Into<String>, interval: Duration, source: BoxedDataSource) -> Self {
        Self::with_appearance(name, interval, source, &BlockAppearance::default())
    }

    pub fn with_appearance(
        name: impl Into<String>,
        interval: Duration,
        source: BoxedDataSource,
        appearance: &BlockAppearance,
    ) -> Self {
        let name = name.into();
        let base = appearance.to_attributes(&name);
        let now = Instant::now();

        let mut block = Self {
            name,
            interval,
            last_refresh: now,
            cached: base.clone(),
            base,
            source,
        };
        block.refresh(now);
        block
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn last_refresh(&self) -> Instant {
        self.last_refresh
    }

    /// Attributes from the last refresh, without a staleness check
    pub fn cached(&self) -> &BlockAttributes {
        &self.cached
    }

    /// Refresh the cache if `interval` has elapsed since the last refresh.
    ///
    /// Returns whether a refresh happened.
    pub fn refresh_if_stale(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_refresh) >= self.interval {
            self.refresh(now);
            true
        } else {
            false
        }
    }

    /// Current attributes, refreshing first if the cache is stale
    pub fn attributes_at(&mut self, now: Instant) -> &BlockAttributes {
        self.refresh_if_stale(now);
        &self.cached
    }

    pub fn attributes(&mut self) -> &BlockAttributes {
        self.attributes_at(Instant::now())
    }

    fn refresh(&mut self, now: Instant) {
        let output = match self.source.query() {
            Ok(output) => output,
            Err(e) => {
                warn!(
                    "Block '{}' ({}) failed to update: {}",
                    self.name,
                    self.source.metadata().id,
                    e
                );
                SourceOutput::text(format!("{}: {}", self.name, FAILED_BLOCK_SUFFIX))
            }
        };
        trace!("Block '{}' refreshed: {}", self.name, output.full_text);

        let mut attrs = self.base.clone();
        attrs.full_text = Some(output.full_text);
        if output.short_text.is_some() {
            attrs.short_text = output.short_text;
        }
        if output.color.is_some() {
            attrs.color = output.color;
        }
        if output.urgent.is_some() {
            attrs.urgent = output.urgent;
        }

        self.cached = attrs;
        self.last_refresh = now;
    }
}

impl std::fmt::Debug for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Block")
            .field("name", &self.name)
            .field("interval", &self.interval)
            .field("source", &self.source.metadata().id)
            .field("cached", &self.cached)
            .finish()
    }
}
