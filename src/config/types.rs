//! Configuration type definitions.

use super::enums::ColorSpec;
use serde::{Deserialize, Serialize};

/// Canvas settings.
///
/// Controls the size of the drawing surface and its background color. The
/// background doubles as the eraser paint, so changing it changes what
/// erased regions look like.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_height")]
    pub height: u32,

    /// Background color - a named color, a "#RRGGBB" hex string,
    /// or an RGB array like `[250, 250, 250]`
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
        }
    }
}

/// Tool defaults applied when the engine starts.
///
/// The interactive surface changes these at runtime through the toolbar;
/// the values here only seed the initial state.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ToolsConfig {
    /// Initial brush color - a named color, a "#RRGGBB" hex string,
    /// or an RGB array
    #[serde(default = "default_tool_color")]
    pub color: ColorSpec,

    /// Initial stroke width in pixels (valid range: 1 - 50)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: u32,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            color: default_tool_color(),
            stroke_width: default_stroke_width(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_tool_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_stroke_width() -> u32 {
    5
}
