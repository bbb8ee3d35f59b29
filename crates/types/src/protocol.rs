//! Bar protocol types: header, block attributes and click events.
//!
//! Optional block attributes are omitted from the serialized object when
//! unset, so a default block only carries `full_text` and `name`.

use serde::{Deserialize, Serialize};

/// Protocol version announced in the header
pub const PROTOCOL_VERSION: u32 = 1;

/// Header record, written once before the record stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolHeader {
    pub version: u32,
    pub stop_signal: i32,
    pub cont_signal: i32,
    pub click_events: bool,
}

impl ProtocolHeader {
    pub fn new(stop_signal: i32, cont_signal: i32, click_events: bool) -> Self {
        Self {
            version: PROTOCOL_VERSION,
            stop_signal,
            cont_signal,
            click_events,
        }
    }
}

/// Text alignment inside a block with `min_width`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Markup language used for `full_text`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Markup {
    #[default]
    None,
    Pango,
}

/// One block object of a protocol record.
///
/// `full_text` is always serialized (as `null` if never set); every other
/// key is skipped while `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BlockAttributes {
    pub full_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_top: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_right: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_bottom: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_left: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgent: Option<bool>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator_block_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markup: Option<Markup>,
}

impl BlockAttributes {
    /// Attributes with only the block identity set
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Click event sent by the renderer on stdin when `click_events` is enabled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickEvent {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub instance: Option<String>,
    pub button: u32,
    #[serde(default)]
    pub modifiers: Vec<String>,
    #[serde(default)]
    pub x: Option<i32>,
    #[serde(default)]
    pub y: Option<i32>,
    #[serde(default)]
    pub relative_x: Option<i32>,
    #[serde(default)]
    pub relative_y: Option<i32>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_serialization() {
        let header = ProtocolHeader::new(10, 12, true);
        let json = serde_json::to_string(&header).unwrap();
        assert_eq!(
            json,
            r#"{"version":1,"stop_signal":10,"cont_signal":12,"click_events":true}"#
        );
    }

    #[test]
    fn test_unset_attributes_are_omitted() {
        let mut attrs = BlockAttributes::named("time");
        attrs.full_text = Some("12:30".to_string());
        let json = serde_json::to_string(&attrs).unwrap();
        assert_eq!(json, r#"{"full_text":"12:30","name":"time"}"#);
    }

    #[test]
    fn test_unrefreshed_full_text_is_null() {
        let json = serde_json::to_string(&BlockAttributes::named("cpu")).unwrap();
        assert_eq!(json, r#"{"full_text":null,"name":"cpu"}"#);
    }

    #[test]
    fn test_optional_attributes_serialize_lowercase() {
        let attrs = BlockAttributes {
            full_text: Some("x".to_string()),
            align: Some(Align::Right),
            markup: Some(Markup::Pango),
            urgent: Some(true),
            ..BlockAttributes::named("audio")
        };
        let json = serde_json::to_string(&attrs).unwrap();
        assert!(json.contains(r#""align":"right""#));
        assert!(json.contains(r#""markup":"pango""#));
        assert!(json.contains(r#""urgent":true"#));
    }

    #[test]
    fn test_click_event_parsing() {
        let line = r#"{"name":"audio","instance":null,"button":1,"modifiers":["Mod4"],"x":1320,"y":1400,"relative_x":12,"relative_y":8,"width":60,"height":22}"#;
        let event: ClickEvent = serde_json::from_str(line).unwrap();
        assert_eq!(event.name.as_deref(), Some("audio"));
        assert_eq!(event.button, 1);
        assert_eq!(event.modifiers, vec!["Mod4".to_string()]);
        assert_eq!(event.relative_x, Some(12));
    }

    #[test]
    fn test_click_event_minimal() {
        let event: ClickEvent = serde_json::from_str(r#"{"button":3}"#).unwrap();
        assert!(event.name.is_none());
        assert!(event.modifiers.is_empty());
    }
}
