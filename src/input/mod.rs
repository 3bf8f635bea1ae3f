//! Pointer input handling and tool state.
//!
//! This module translates host pointer and touch events into canvas-local
//! coordinates and maintains the tool state: the active tool, the stroke
//! color and width, and the color memory used while the eraser is selected.

pub mod events;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{PointerInput, TouchPoint, normalize};
pub use tool::{Tool, ToolState};
