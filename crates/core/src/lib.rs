//! barline-core: Core traits, blocks and the status line.
//!
//! This crate contains the `DataSource` trait, the caching `Block` wrapper,
//! the ordered `StatusLine`, and shared constants.

pub mod constants;
mod block;
mod data_source;
mod error;
mod status_line;

pub use block::Block;
pub use constants::{DEFAULT_TICK, DEFAULT_TICK_MS, FAILED_BLOCK_SUFFIX, KB_PER_GB};
pub use data_source::{BoxedDataSource, DataSource, SourceMetadata, SourceOutput};
pub use error::{SourceError, SourceResult};
pub use status_line::StatusLine;

// Re-export types used in public signatures for convenience
pub use barline_types::{BlockAppearance, BlockAttributes};
