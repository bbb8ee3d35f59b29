//! Configuration management

mod defaults;
mod settings;

pub use defaults::default_blocks;
pub use settings::AppConfig;
