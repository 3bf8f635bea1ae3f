//! Configuration enum types.

use crate::draw::Color;
use log::warn;
use serde::{Deserialize, Serialize};

/// Color specification - a named color, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// color = "black"
///
/// # Hex string
/// background = "#FAFAFA"
///
/// # Custom RGB color (0-255 per component)
/// color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, yellow, orange, pink, white, black)
    /// or a "#RRGGBB" hex string
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Resolves the specification to a [`Color`].
    ///
    /// Names and hex strings are parsed with `util::parse_color()`; an
    /// unrecognized string falls back to the given color with a warning.
    /// RGB arrays are converted from 0-255 range to 0.0-1.0 range with
    /// full opacity.
    pub fn to_color(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::parse_color(name).unwrap_or_else(|| {
                warn!(
                    "Unknown color '{}', using {}",
                    name,
                    crate::util::color_to_name(&fallback)
                );
                fallback
            }),
            ColorSpec::Rgb([r, g, b]) => Color {
                r: *r as f64 / 255.0,
                g: *g as f64 / 255.0,
                b: *b as f64 / 255.0,
                a: 1.0,
            },
        }
    }
}
