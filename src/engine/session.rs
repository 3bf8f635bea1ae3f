//! Engine state and construction.

use crate::draw::{Canvas, Color, HistoryStack};
use crate::input::ToolState;
use crate::util::Rect;

/// Current gesture state machine.
///
/// Tracks whether the pointer is between gestures or mid-gesture with the
/// button (or a touch contact) held down. Transitions occur on pointer
/// down, move, and up events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionState {
    /// Not drawing - waiting for a pointer-down
    Idle,
    /// A gesture is in progress (button or contact held down)
    Active {
        /// Canvas-local point where the gesture started
        start: (f64, f64),
        /// Most recent canvas-local point seen during the gesture
        last: (f64, f64),
    },
}

/// The drawing engine tying the raster canvas, tool state, and snapshot
/// history together.
///
/// Pointer events go through [`Engine::pointer_down`],
/// [`Engine::pointer_move`], and [`Engine::pointer_up`]; host commands
/// (tool selection, color, width, clear, undo) through [`Engine::apply`]
/// or the individual command methods.
pub struct Engine {
    /// Backing raster surface
    pub(super) canvas: Canvas,
    /// Active tool, stroke color and width, eraser color memory
    pub(super) tools: ToolState,
    /// Committed snapshots, newest last
    pub(super) history: HistoryStack,
    /// Gesture state machine
    pub(super) session: SessionState,
    /// Top-left corner of the canvas in host client coordinates
    pub(super) client_origin: (i32, i32),
}

impl Engine {
    /// Creates an engine with the given canvas size and tool defaults.
    ///
    /// The history starts with a single snapshot of the blank canvas, so
    /// undo always has a baseline to return to.
    ///
    /// # Arguments
    /// * `width` - Canvas width in pixels
    /// * `height` - Canvas height in pixels
    /// * `background` - Background color, also used as eraser paint
    /// * `color` - Initial brush color
    /// * `stroke_width` - Initial stroke width in pixels
    pub fn new(
        width: u32,
        height: u32,
        background: Color,
        color: Color,
        stroke_width: u32,
    ) -> Self {
        let canvas = Canvas::new(width, height, background);
        let mut history = HistoryStack::new();
        history.push(canvas.snapshot());

        Self {
            canvas,
            tools: ToolState::new(color, stroke_width),
            history,
            session: SessionState::Idle,
            client_origin: (0, 0),
        }
    }

    /// Returns the raster canvas.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Returns the tool state.
    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    /// Number of committed snapshots currently held.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Returns true while a gesture is in progress.
    pub fn is_drawing(&self) -> bool {
        matches!(self.session, SessionState::Active { .. })
    }

    /// Records the canvas position within the host window.
    ///
    /// Pointer events arrive in client coordinates; this origin is
    /// subtracted to map them onto the canvas.
    pub fn set_client_origin(&mut self, x: i32, y: i32) {
        self.client_origin = (x, y);
    }

    /// Resizes the canvas, repainting the committed content at the origin.
    ///
    /// The raster is recreated at the new size and the most recent snapshot
    /// is painted back anchored at the top-left corner. Growing exposes
    /// fresh background along the right and bottom edges; shrinking crops.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas.resize(width, height);
        if let Some(snapshot) = self.history.latest() {
            self.canvas.restore(snapshot);
        }
        log::debug!("Canvas resized to {width}x{height}");
    }

    /// Bounding rectangle of the canvas in host client coordinates.
    pub(super) fn client_bounds(&self) -> Rect {
        Rect {
            x: self.client_origin.0,
            y: self.client_origin.1,
            width: self.canvas.width() as i32,
            height: self.canvas.height() as i32,
        }
    }
}
