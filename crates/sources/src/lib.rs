//! barline-sources: Data source implementations for barline.

mod audio;
mod clock;
mod command;
mod cpu;
mod keyboard;
mod memory;
mod network;

pub use audio::{format_volume, AudioSource, NO_AUDIO};
pub use clock::ClockSource;
pub use command::{CommandOutput, CommandRunner, SharedRunner, SystemCommandRunner};
pub use cpu::{average_frequency, CpuSource};
pub use keyboard::KeyboardSource;
pub use memory::{format_gigabytes, parse_meminfo, used_kilobytes, MemorySource};
pub use network::{parse_network_name, IwdSource, NetworkManagerSource, NO_CONNECTION};

use anyhow::{Context, Result};
use barline_core::{Block, BoxedDataSource};
use barline_types::{BlockConfig, SourceConfig};

/// Construct the data source described by `config`.
///
/// Command-backed sources share `runner`.
pub fn build_source(config: &SourceConfig, runner: &SharedRunner) -> Result<BoxedDataSource> {
    let source: BoxedDataSource = match config {
        SourceConfig::Time(cfg) => {
            Box::new(ClockSource::time(cfg).context("Invalid time configuration")?)
        }
        SourceConfig::Date(cfg) => {
            Box::new(ClockSource::date(cfg).context("Invalid date configuration")?)
        }
        SourceConfig::Iwd(cfg) => Box::new(IwdSource::new(cfg, runner.clone())),
        SourceConfig::NetworkManager(cfg) => {
            Box::new(NetworkManagerSource::new(cfg, runner.clone()))
        }
        SourceConfig::Audio(cfg) => Box::new(AudioSource::new(cfg, runner.clone())),
        SourceConfig::Cpu(cfg) => Box::new(CpuSource::new(cfg)),
        SourceConfig::Memory(cfg) => Box::new(MemorySource::new(cfg)),
        SourceConfig::Keyboard(cfg) => Box::new(
            KeyboardSource::new(cfg, runner.clone())
                .context("Invalid keyboard configuration")?,
        ),
    };
    Ok(source)
}

/// Construct one block; this runs its first refresh
pub fn build_block(config: &BlockConfig, runner: &SharedRunner) -> Result<Block> {
    let source = build_source(&config.source, runner)?;
    log::debug!(
        "Creating block '{}' ({}, every {}ms)",
        config.name,
        config.source.source_type(),
        config.source.update_interval_ms()
    );
    Ok(Block::with_appearance(
        config.name.clone(),
        config.source.update_interval(),
        source,
        &config.appearance,
    ))
}

/// Construct all blocks in configured order
pub fn build_blocks(configs: &[BlockConfig], runner: &SharedRunner) -> Result<Vec<Block>> {
    configs
        .iter()
        .map(|config| {
            build_block(config, runner).with_context(|| format!("Failed to create block '{}'", config.name))
        })
        .collect()
}
