//! Drawing tool selection and per-tool drawing parameters.

use crate::draw::Color;
use crate::util;

/// Drawing tool selection.
///
/// The active tool determines what the engine does with pointer movement:
/// brush and eraser render incrementally, the shape tools run a live preview
/// that is committed on release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Freehand drawing with the active color (default)
    Brush,
    /// Freehand painting with the canvas background color
    Eraser,
    /// Straight line between press and release points
    Line,
    /// Axis-aligned rectangle outline between press and release points
    Rectangle,
    /// Circle outline centered on the press point
    Circle,
}

impl Tool {
    /// Parses a tool name as used by the config file and script driver.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "brush" => Some(Self::Brush),
            "eraser" => Some(Self::Eraser),
            "line" => Some(Self::Line),
            "rect" | "rectangle" => Some(Self::Rectangle),
            "circle" => Some(Self::Circle),
            _ => None,
        }
    }

    /// True for the tools that render incrementally as the pointer moves.
    pub fn is_freehand(self) -> bool {
        matches!(self, Self::Brush | Self::Eraser)
    }
}

/// Active tool, stroke color, stroke width, and the brush-color memory used
/// to restore the color after eraser use.
///
/// Exactly one tool is active at any time. `remembered_color` is `Some` only
/// while an eraser episode is pending: it is set when switching into Eraser
/// and consumed when the color is restored on the way back to Brush.
#[derive(Debug, Clone)]
pub struct ToolState {
    tool: Tool,
    color: Color,
    stroke_width: u32,
    remembered_color: Option<Color>,
}

impl ToolState {
    /// Creates tool state with the Brush tool active.
    ///
    /// `stroke_width` must be positive; the engine uses it verbatim as the
    /// stroke diameter in pixels.
    pub fn new(color: Color, stroke_width: u32) -> Self {
        Self {
            tool: Tool::Brush,
            color,
            stroke_width,
            remembered_color: None,
        }
    }

    /// The currently active tool.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// The color strokes are painted with right now.
    ///
    /// While the eraser is active this is the canvas background color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Stroke diameter in pixels.
    pub fn stroke_width(&self) -> u32 {
        self.stroke_width
    }

    /// The brush color saved while an eraser episode is pending.
    pub fn remembered_color(&self) -> Option<Color> {
        self.remembered_color
    }

    /// Switches the active tool.
    ///
    /// Switching into Eraser remembers the current stroke color and forces
    /// the drawing color to `background`. Switching to Brush restores a
    /// remembered color when one is pending. Every other transition keeps
    /// the color as-is, so leaving the eraser for a shape tool strokes in
    /// the background color until the user picks a color or returns to the
    /// brush. Re-selecting the active tool is a no-op.
    pub fn select_tool(&mut self, tool: Tool, background: Color) {
        if tool == self.tool {
            return;
        }

        if tool == Tool::Eraser {
            self.remembered_color = Some(self.color);
            self.color = background;
        } else if tool == Tool::Brush {
            if let Some(color) = self.remembered_color.take() {
                self.color = color;
            }
        }

        self.tool = tool;
        log::debug!(
            "Tool switched to {:?} (color: {})",
            tool,
            util::color_to_name(&self.color)
        );
    }

    /// Sets the stroke color.
    ///
    /// While the eraser is active only the remembered color is updated; the
    /// eraser keeps painting the background color regardless of the picker.
    /// Outside the eraser the color applies directly and clears any stale
    /// remembered color, so a later return to Brush keeps the user's choice.
    pub fn set_color(&mut self, color: Color) {
        if self.tool == Tool::Eraser {
            self.remembered_color = Some(color);
        } else {
            self.color = color;
            self.remembered_color = None;
        }
    }

    /// Sets the stroke width in pixels.
    ///
    /// The value is used verbatim. Constraining it to a sensible range is
    /// the caller's responsibility (the config and script layers clamp to
    /// 1-50); zero produces no visible strokes.
    pub fn set_stroke_width(&mut self, width: u32) {
        self.stroke_width = width;
    }
}
