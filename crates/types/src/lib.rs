//! barline-types: Shared data types for the barline status line generator.
//!
//! This crate contains pure data types (protocol records, source configs,
//! block configs) shared across all barline crates. Nothing here touches
//! the environment.

pub mod block;
pub mod protocol;
pub mod source_configs;

// Re-export commonly used types at the crate root for convenience
pub use block::{BlockAppearance, BlockConfig};
pub use protocol::{
    Align, BlockAttributes, ClickEvent, Markup, ProtocolHeader, PROTOCOL_VERSION,
};
pub use source_configs::{
    AudioSourceConfig, CpuSourceConfig, DateSourceConfig, IwdSourceConfig,
    KeyboardSourceConfig, MemorySourceConfig, NetworkManagerSourceConfig, SourceConfig,
    TimeSourceConfig,
};
