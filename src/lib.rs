//! barline: a block-based status line generator for i3bar and swaybar
//!
//! This library provides the runtime around the block caching core:
//! - Configuration loading and the built-in block composition
//! - The line-based protocol writer
//! - Signal-driven pause/resume and the click event reader
//! - The main loop that ties them together

pub mod click;
pub mod config;
pub mod control;
pub mod protocol;
pub mod scheduler;

// Re-export commonly used types
pub use config::AppConfig;
pub use control::Control;
pub use protocol::ProtocolWriter;
pub use scheduler::{MainLoop, RunState};

use anyhow::Result;
use barline_core::StatusLine;
use barline_sources::{build_blocks, SystemCommandRunner};
use barline_types::ProtocolHeader;

/// Build every configured block (running its first refresh) in order
pub fn build_status_line(config: &AppConfig) -> Result<StatusLine> {
    let runner = SystemCommandRunner::shared(config.command_timeout());
    let blocks = build_blocks(&config.blocks, &runner)?;
    Ok(StatusLine::new(blocks))
}

/// Header announcing this configuration's signals and click support
pub fn protocol_header(config: &AppConfig) -> ProtocolHeader {
    ProtocolHeader::new(config.stop_signal, config.cont_signal, config.click_events)
}
