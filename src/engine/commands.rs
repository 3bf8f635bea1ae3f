//! Host commands: tool selection, color, width, clear, undo, and export.

use super::session::Engine;
use crate::draw::{Color, ExportError};
use crate::input::Tool;

/// A host-surface command targeting the engine.
///
/// Commands mirror the controls of a drawing surface: the tool buttons,
/// the color picker, the width slider, and the clear and undo buttons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Switch the active tool
    SelectTool(Tool),
    /// Set the stroke color (updates the remembered color while erasing)
    SetColor(Color),
    /// Set the stroke width in pixels
    SetStrokeWidth(u32),
    /// Blank the canvas and reset history
    Clear,
    /// Revert to the previous committed snapshot
    Undo,
}

impl Engine {
    /// Applies a single host command.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SelectTool(tool) => self.select_tool(tool),
            Command::SetColor(color) => self.set_color(color),
            Command::SetStrokeWidth(width) => self.set_stroke_width(width),
            Command::Clear => self.clear(),
            Command::Undo => self.undo(),
        }
    }

    /// Switches the active tool, handling the eraser color save/restore.
    pub fn select_tool(&mut self, tool: Tool) {
        let background = self.canvas.background();
        self.tools.select_tool(tool, background);
    }

    /// Sets the stroke color.
    ///
    /// While the eraser is active only the remembered color changes; the
    /// eraser keeps painting in the background color.
    pub fn set_color(&mut self, color: Color) {
        self.tools.set_color(color);
    }

    /// Sets the stroke width in pixels.
    pub fn set_stroke_width(&mut self, width: u32) {
        self.tools.set_stroke_width(width);
    }

    /// Blanks the canvas and resets the history to a single blank baseline.
    ///
    /// Clearing is not undoable: all prior snapshots are discarded.
    pub fn clear(&mut self) {
        self.canvas.clear();
        self.history.reset();
        self.history.push(self.canvas.snapshot());
        log::debug!("Canvas cleared, history reset");
    }

    /// Reverts the canvas to the previous committed snapshot.
    ///
    /// At the baseline the oldest surviving snapshot is re-applied instead
    /// of popped, so the canvas never goes further back than the oldest
    /// state the history still holds.
    pub fn undo(&mut self) {
        if self.history.len() > 1 {
            self.history.pop_newest();
        }
        if let Some(snapshot) = self.history.latest() {
            self.canvas.restore(snapshot);
        }
        log::debug!("Undo, history depth {}", self.history.len());
    }

    /// Encodes the current canvas as a PNG.
    pub fn export_png(&self) -> Result<Vec<u8>, ExportError> {
        self.canvas.encode_png()
    }
}
