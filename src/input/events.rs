//! Generic pointer event types and the coordinate normalizer.
//!
//! Hosts deliver mouse and touch events in their own client coordinate
//! space. This module unifies both into a single canvas-local coordinate
//! stream: the normalizer subtracts the canvas bounding rectangle's origin
//! and, for touch input, reads the first contact point.

use crate::util::Rect;

/// A single touch contact with client-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Client-space X coordinate
    pub x: f64,
    /// Client-space Y coordinate
    pub y: f64,
}

/// Coordinate payload of a pointer event.
///
/// Mouse events always carry a position. Touch events carry however many
/// contacts the host reports, which may be none (a touch-end often has no
/// remaining contacts) or several (multi-touch, which the engine ignores).
#[derive(Debug, Clone, PartialEq)]
pub enum PointerInput {
    /// Mouse event with client-space coordinates
    Mouse {
        /// Client-space X coordinate
        x: f64,
        /// Client-space Y coordinate
        y: f64,
    },
    /// Touch event with zero or more contact points
    Touch {
        /// Active contacts, in the order the host reports them
        contacts: Vec<TouchPoint>,
    },
}

impl PointerInput {
    /// Convenience constructor for a mouse position.
    pub fn mouse(x: f64, y: f64) -> Self {
        Self::Mouse { x, y }
    }

    /// Convenience constructor for a single-contact touch.
    pub fn touch(x: f64, y: f64) -> Self {
        Self::Touch {
            contacts: vec![TouchPoint { x, y }],
        }
    }

    /// Number of simultaneous contact points carried by the event.
    ///
    /// A mouse position counts as one contact. The engine uses this to
    /// reject multi-touch gestures before normalization.
    pub fn contact_count(&self) -> usize {
        match self {
            Self::Mouse { .. } => 1,
            Self::Touch { contacts } => contacts.len(),
        }
    }
}

/// Converts a pointer event into a canvas-local point.
///
/// Subtracts the canvas bounding rectangle's origin from the event's client
/// coordinates. Touch events use the first contact point.
///
/// # Returns
/// - `Some((x, y))` in canvas-local coordinates
/// - `None` when the event carries no coordinates (an empty touch list);
///   callers treat this as a silent no-op
pub fn normalize(input: &PointerInput, bounds: &Rect) -> Option<(f64, f64)> {
    let (client_x, client_y) = match input {
        PointerInput::Mouse { x, y } => (*x, *y),
        PointerInput::Touch { contacts } => {
            let first = contacts.first()?;
            (first.x, first.y)
        }
    };
    Some((client_x - bounds.x as f64, client_y - bounds.y as f64))
}
