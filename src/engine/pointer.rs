//! Pointer event handling for the gesture state machine.

use super::session::{Engine, SessionState};
use crate::draw::{brush, shape};
use crate::input::{PointerInput, Tool, normalize};

impl Engine {
    /// Handles a pointer-down (mouse press or first touch contact).
    ///
    /// Starts a gesture at the event position. Freehand tools stamp an
    /// immediate dot so a click without motion still leaves a mark.
    /// A second press during an active gesture, multi-contact touches,
    /// and events with no usable position are ignored.
    pub fn pointer_down(&mut self, input: &PointerInput) {
        if input.contact_count() > 1 {
            log::debug!(
                "Ignoring pointer-down with {} contacts",
                input.contact_count()
            );
            return;
        }
        if !matches!(self.session, SessionState::Idle) {
            log::debug!("Ignoring pointer-down during an active gesture");
            return;
        }
        let Some((x, y)) = normalize(input, &self.client_bounds()) else {
            return;
        };

        self.session = SessionState::Active {
            start: (x, y),
            last: (x, y),
        };

        if self.tools.tool().is_freehand() {
            brush::stamp_dot(
                &mut self.canvas,
                x,
                y,
                self.tools.stroke_width(),
                self.tools.color(),
            );
        }
    }

    /// Handles pointer motion.
    ///
    /// Freehand tools extend the stroke from the last point; shape tools
    /// repaint the committed raster and draw the candidate shape from the
    /// gesture origin to the current position. Motion while idle and
    /// multi-contact touches are ignored.
    pub fn pointer_move(&mut self, input: &PointerInput) {
        let SessionState::Active { start, last } = self.session else {
            return;
        };
        if input.contact_count() > 1 {
            return;
        }
        let Some((x, y)) = normalize(input, &self.client_bounds()) else {
            return;
        };

        let color = self.tools.color();
        let width = self.tools.stroke_width();

        match self.tools.tool() {
            Tool::Brush | Tool::Eraser => {
                brush::stroke_segment(&mut self.canvas, last.0, last.1, x, y, width, color);
                brush::stamp_dot(&mut self.canvas, x, y, width, color);
            }
            tool => self.preview_shape(tool, start, x, y),
        }

        self.session = SessionState::Active {
            start,
            last: (x, y),
        };
    }

    /// Handles a pointer release, committing the gesture.
    ///
    /// The finished raster is pushed onto the history. Releases with no
    /// gesture in progress are ignored.
    pub fn pointer_up(&mut self) {
        if matches!(self.session, SessionState::Idle) {
            return;
        }
        self.session = SessionState::Idle;
        self.history.push(self.canvas.snapshot());
        log::debug!("Gesture committed, history depth {}", self.history.len());
    }

    /// Handles the pointer leaving the canvas mid-gesture.
    ///
    /// Works exactly like a release: the gesture ends and commits where
    /// the pointer was last seen.
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    /// Repaints the committed raster, then strokes the candidate shape on
    /// top of it. Keeps the live preview from accumulating ghosts.
    fn preview_shape(&mut self, tool: Tool, start: (f64, f64), x: f64, y: f64) {
        if let Some(snapshot) = self.history.latest() {
            self.canvas.restore(snapshot);
        }

        let color = self.tools.color();
        let width = self.tools.stroke_width();

        match tool {
            Tool::Line => shape::stroke_line(&mut self.canvas, start, (x, y), width, color),
            Tool::Rectangle => shape::stroke_rect(&mut self.canvas, start, (x, y), width, color),
            Tool::Circle => shape::stroke_circle(&mut self.canvas, start, (x, y), width, color),
            Tool::Brush | Tool::Eraser => {}
        }
    }
}
