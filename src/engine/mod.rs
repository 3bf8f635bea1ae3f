//! Drawing engine: canvas, tools, history, and the gesture state machine.
//!
//! [`Engine`] owns the raster [`Canvas`](crate::draw::Canvas), the
//! [`ToolState`](crate::input::ToolState), and the snapshot history, and
//! drives them from normalized pointer events and host commands.

mod commands;
mod pointer;
mod session;

pub use commands::Command;
pub use session::{Engine, SessionState};
