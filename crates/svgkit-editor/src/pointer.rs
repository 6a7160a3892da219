//! Pointer drag tracking for container translation.
//!
//! Converts continuous pointer motion into incremental translation
//! deltas. The drag start is reset to the current position after every
//! move, so translation accumulates step by step instead of jumping
//! from the original press point. Deltas feed only the container-level
//! view transform, never scene objects.

use svgkit_core::{Offset, Point};

/// Tracks an in-progress drag on the container surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerDragController {
    dragging: bool,
    drag_start: Point,
}

impl PointerDragController {
    /// Creates an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Drag started at the given pointer position.
    pub fn begin(&mut self, pos: Point) {
        self.dragging = true;
        self.drag_start = pos;
    }

    /// Pointer moved. While dragging, returns the delta since the last
    /// position and resets the drag start to the current position.
    /// Returns `None` when no drag is in progress.
    pub fn update(&mut self, pos: Point) -> Option<Offset> {
        if !self.dragging {
            return None;
        }
        let delta = Offset::new(
            (pos.x - self.drag_start.x).round() as i32,
            (pos.y - self.drag_start.y).round() as i32,
        );
        self.drag_start = pos;
        Some(delta)
    }

    /// Drag ended (pointer up or pointer leaving the surface).
    pub fn end(&mut self) {
        self.dragging = false;
    }
}
