//! Library exports for embedding the inkboard drawing engine.
//!
//! Exposes the engine and its supporting modules so that embedders and the
//! bundled script driver share one implementation of the canvas, tool, and
//! history semantics.

pub mod config;
pub mod draw;
pub mod engine;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
pub use draw::{Canvas, Color};
pub use engine::{Command, Engine};
pub use input::{PointerInput, Tool};
