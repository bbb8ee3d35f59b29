//! Block configuration: identity, data source and static appearance.

use serde::{Deserialize, Serialize};

use crate::protocol::{Align, BlockAttributes, Markup};
use crate::source_configs::SourceConfig;

/// Static presentation attributes for a block.
///
/// Anything left `None` is omitted from the protocol record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BlockAppearance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator_block_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markup: Option<Markup>,
}

impl BlockAppearance {
    /// Build the initial attribute set for a block named `name`
    pub fn to_attributes(&self, name: &str) -> BlockAttributes {
        BlockAttributes {
            short_text: self.short_text.clone(),
            color: self.color.clone(),
            background: self.background.clone(),
            border: self.border.clone(),
            min_width: self.min_width,
            align: self.align,
            instance: self.instance.clone(),
            separator: self.separator,
            separator_block_width: self.separator_block_width,
            markup: self.markup,
            ..BlockAttributes::named(name)
        }
    }
}

/// One configured block of the status line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockConfig {
    pub name: String,
    pub source: SourceConfig,
    #[serde(default)]
    pub appearance: BlockAppearance,
}

impl BlockConfig {
    pub fn new(name: impl Into<String>, source: SourceConfig) -> Self {
        Self {
            name: name.into(),
            source,
            appearance: BlockAppearance::default(),
        }
    }
}
