//! Raster drawing primitives.
//!
//! This module defines the core drawing types used by the engine:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Canvas`]: the owned pixel surface every tool draws on
//! - [`HistoryStack`] / [`Snapshot`]: bounded undo history of raster copies
//! - Brush and shape stroking functions shared by strokes and previews

pub mod brush;
pub mod canvas;
pub mod color;
pub mod history;
pub mod shape;

// Re-export commonly used types at module level
pub use canvas::{Canvas, ExportError};
pub use color::Color;
pub use history::{HISTORY_CAPACITY, HistoryStack, Snapshot};

// Re-export color constants at module level
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
