//! Construction-time theming: the four dial colors and the label table.

use dial_core::{Color, DialError};
use serde::Deserialize;

use crate::DialPosition;

/// Fill color per position. Missing entries are `Color::UNSET`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DialColors {
    pub off: Color,
    pub low: Color,
    pub medium: Color,
    pub high: Color,
}

impl DialColors {
    pub fn for_position(&self, position: DialPosition) -> Color {
        match position {
            DialPosition::Off => self.off,
            DialPosition::Low => self.low,
            DialPosition::Medium => self.medium,
            DialPosition::High => self.high,
        }
    }
}

/// Localized text: one label per position plus the two action prompts.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DialStrings {
    pub off: String,
    pub low: String,
    pub medium: String,
    pub high: String,
    pub change: String,
    pub reset: String,
}

impl Default for DialStrings {
    fn default() -> Self {
        Self {
            off: "off".into(),
            low: "1".into(),
            medium: "2".into(),
            high: "3".into(),
            change: "change".into(),
            reset: "reset".into(),
        }
    }
}

impl DialStrings {
    pub fn label_for(&self, position: DialPosition) -> &str {
        match position {
            DialPosition::Off => &self.off,
            DialPosition::Low => &self.low,
            DialPosition::Medium => &self.medium,
            DialPosition::High => &self.high,
        }
    }
}

/// Resolved style a `DialView` is built with.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DialStyle {
    pub colors: DialColors,
    pub strings: DialStrings,
}

/// Raw styled attributes as an embedder supplies them, e.g. from a layout
/// file:
///
/// ```json
/// { "colorOff": "#9E9E9E", "colorLow": "#2196F3", "strings": { "off": "aus" } }
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DialAttributes {
    pub color_off: Option<String>,
    pub color_low: Option<String>,
    pub color_medium: Option<String>,
    pub color_high: Option<String>,
    pub strings: Option<DialStrings>,
}

impl DialAttributes {
    pub fn resolve(&self) -> Result<DialStyle, DialError> {
        Ok(DialStyle {
            colors: DialColors {
                off: resolve_color("colorOff", self.color_off.as_deref())?,
                low: resolve_color("colorLow", self.color_low.as_deref())?,
                medium: resolve_color("colorMedium", self.color_medium.as_deref())?,
                high: resolve_color("colorHigh", self.color_high.as_deref())?,
            },
            strings: self.strings.clone().unwrap_or_default(),
        })
    }
}

fn resolve_color(attribute: &'static str, value: Option<&str>) -> Result<Color, DialError> {
    match value {
        None => Ok(Color::UNSET),
        Some(v) => Color::parse_hex(v).map_err(|_| DialError::InvalidColor {
            attribute,
            value: v.to_string(),
        }),
    }
}
