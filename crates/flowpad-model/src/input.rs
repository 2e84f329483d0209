//! Pointer input forwarded to pad actions

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Pointer-originated input event
///
/// The host editor forwards the originating pointer event to entry
/// actions; create sessions use its position as the drag origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Pointer position in diagram coordinates
    pub position: Point,
}

impl PointerEvent {
    /// Event at a position
    #[inline]
    #[must_use]
    pub const fn new(position: Point) -> Self {
        Self { position }
    }

    /// Event at raw coordinates
    #[inline]
    #[must_use]
    pub const fn at(x: f32, y: f32) -> Self {
        Self::new(Point::new(x, y))
    }
}
