//! Built-in block composition used when no config file exists

use barline_types::{
    AudioSourceConfig, BlockConfig, CpuSourceConfig, DateSourceConfig, IwdSourceConfig,
    KeyboardSourceConfig, MemorySourceConfig, SourceConfig, TimeSourceConfig,
};

/// ram, cpu, audio, iwctl, keyboard, time, date
pub fn default_blocks() -> Vec<BlockConfig> {
    vec![
        BlockConfig::new("ram", SourceConfig::Memory(MemorySourceConfig::default())),
        BlockConfig::new("cpu", SourceConfig::Cpu(CpuSourceConfig::default())),
        BlockConfig::new("audio", SourceConfig::Audio(AudioSourceConfig::default())),
        BlockConfig::new("iwctl", SourceConfig::Iwd(IwdSourceConfig::default())),
        BlockConfig::new(
            "keyboard",
            SourceConfig::Keyboard(KeyboardSourceConfig::default()),
        ),
        BlockConfig::new("time", SourceConfig::Time(TimeSourceConfig::default())),
        BlockConfig::new("date", SourceConfig::Date(DateSourceConfig::default())),
    ]
}
