//! Utility functions for colors and geometry.
//!
//! This module provides:
//! - Color name and hex string parsing for the config file and script driver
//! - The client-space rectangle handed to the input normalizer

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system and the script driver to parse color
/// names.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
///
/// # Arguments
/// * `name` - Color name string
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Parses a `#RRGGBB` hex string into a fully opaque Color.
///
/// The leading `#` is required and exactly six hex digits must follow.
pub fn hex_to_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Color {
        r: r as f64 / 255.0,
        g: g as f64 / 255.0,
        b: b as f64 / 255.0,
        a: 1.0,
    })
}

/// Parses a color token that is either a predefined name or a `#RRGGBB` hex
/// string.
pub fn parse_color(token: &str) -> Option<Color> {
    name_to_color(token).or_else(|| hex_to_color(token))
}

/// Maps a Color value to its human-readable name.
///
/// Uses approximate matching (threshold-based) to identify colors.
/// Used in log output to describe the active color.
///
/// # Arguments
/// * `color` - The color to identify
///
/// # Returns
/// A static string with the color name, or "Custom" if the color doesn't
/// match any predefined color.
pub fn color_to_name(color: &Color) -> &'static str {
    // Match colors approximately with 0.1 tolerance
    if color.r > 0.9 && color.g < 0.1 && color.b < 0.1 {
        "Red"
    } else if color.r < 0.1 && color.g > 0.9 && color.b < 0.1 {
        "Green"
    } else if color.r < 0.1 && color.g < 0.1 && color.b > 0.9 {
        "Blue"
    } else if color.r > 0.9 && color.g > 0.9 && color.b < 0.1 {
        "Yellow"
    } else if color.r > 0.9 && (0.4..=0.6).contains(&color.g) && color.b < 0.1 {
        "Orange"
    } else if color.r > 0.9 && color.g < 0.1 && color.b > 0.9 {
        "Pink"
    } else if color.r > 0.9 && color.g > 0.9 && color.b > 0.9 {
        "White"
    } else if color.r < 0.1 && color.g < 0.1 && color.b < 0.1 {
        "Black"
    } else {
        "Custom"
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Axis-aligned rectangle describing where the canvas sits in host
/// client-space coordinates.
///
/// The input normalizer subtracts the origin of this rectangle from incoming
/// event coordinates to produce canvas-local points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, ORANGE, RED, WHITE};

    #[test]
    fn name_color_mappings_cover_the_palette() {
        assert_eq!(name_to_color("white").unwrap(), WHITE);
        assert_eq!(name_to_color("Black").unwrap(), BLACK);
        assert!(name_to_color("chartreuse").is_none());
    }

    #[test]
    fn hex_colors_parse_when_well_formed() {
        assert_eq!(hex_to_color("#ff0000").unwrap(), RED);
        assert_eq!(hex_to_color("#FF8000").unwrap().to_rgba8(), ORANGE.to_rgba8());
        assert!(hex_to_color("ff0000").is_none());
        assert!(hex_to_color("#ff00").is_none());
        assert!(hex_to_color("#gg0000").is_none());
    }

    #[test]
    fn parse_color_accepts_names_and_hex() {
        assert_eq!(parse_color("red").unwrap(), RED);
        assert_eq!(parse_color("#000000").unwrap(), BLACK);
        assert!(parse_color("#12345").is_none());
    }

    #[test]
    fn color_to_name_matches_known_colors() {
        assert_eq!(color_to_name(&RED), "Red");
        assert_eq!(color_to_name(&BLACK), "Black");
        assert_eq!(
            color_to_name(&Color {
                r: 0.42,
                g: 0.42,
                b: 0.42,
                a: 1.0
            }),
            "Custom"
        );
    }

    #[test]
    fn rect_rejects_non_positive_dimensions() {
        assert!(Rect::new(0, 0, 10, 10).is_some());
        assert!(Rect::new(5, 5, 0, 10).is_none());
        assert!(Rect::new(5, 5, 10, -1).is_none());
    }
}
