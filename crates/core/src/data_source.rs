//! Data source trait and related types

use crate::error::SourceResult;
use std::time::Duration;

/// Metadata about a data source
#[derive(Debug, Clone)]
pub struct SourceMetadata {
    /// Unique identifier for this source type
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Description of what this source provides
    pub description: String,
    /// Recommended update interval
    pub default_interval: Duration,
}

/// Display value produced by one query.
///
/// Optional fields override the block's configured appearance for the
/// refresh that produced them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceOutput {
    pub full_text: String,
    pub short_text: Option<String>,
    pub color: Option<String>,
    pub urgent: Option<bool>,
}

impl SourceOutput {
    pub fn text(full_text: impl Into<String>) -> Self {
        Self {
            full_text: full_text.into(),
            ..Default::default()
        }
    }
}

impl From<String> for SourceOutput {
    fn from(full_text: String) -> Self {
        Self::text(full_text)
    }
}

impl From<&str> for SourceOutput {
    fn from(full_text: &str) -> Self {
        Self::text(full_text)
    }
}

/// Trait for all data sources
///
/// A data source queries the environment (clock, external commands,
/// pseudo-files) and turns the result into display text. Anticipated
/// unavailability is reported as fallback text; anything else is an error
/// that the owning block renders in place of the value.
pub trait DataSource: Send {
    /// Get metadata about this source
    fn metadata(&self) -> &SourceMetadata;

    /// Query the environment for the current display value
    fn query(&mut self) -> SourceResult<SourceOutput>;
}

/// Type-erased data source for dynamic dispatch
pub type BoxedDataSource = Box<dyn DataSource>;
