//! Container-level view transform state.
//!
//! Holds the scale factor, rotation angle, and translation offset
//! applied to the whole viewing surface via outer styling. This is
//! independent of per-object transforms: drag and arrow-key input move
//! the container only and never touch scene objects, while numeric
//! translate fields additionally mutate the active object through the
//! editor's dispatch. The two pathways are deliberately distinct.

use serde::{Deserialize, Serialize};
use std::fmt;
use svgkit_core::Offset;

/// The container-level transform: scale, rotation, translation.
///
/// A pure value holder. The UI offers scale 0.1-2.0 and rotation 0-360
/// as input hints, but out-of-range values are accepted as-is; no
/// clamping is enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub scale_factor: f64,
    pub rotation_angle: f64,
    pub translation: Offset,
}

impl ViewTransform {
    /// Creates the identity transform (scale 1.0, rotation 0, offset 0,0).
    pub fn new() -> Self {
        Self {
            scale_factor: 1.0,
            rotation_angle: 0.0,
            translation: Offset::default(),
        }
    }

    /// Returns a new state with the given scale factor.
    pub fn with_scale(self, scale_factor: f64) -> Self {
        Self {
            scale_factor,
            ..self
        }
    }

    /// Returns a new state with the given rotation angle, in degrees.
    pub fn with_rotation(self, rotation_angle: f64) -> Self {
        Self {
            rotation_angle,
            ..self
        }
    }

    /// Returns a new state with the given translation offset.
    pub fn with_translation(self, x: i32, y: i32) -> Self {
        Self {
            translation: Offset::new(x, y),
            ..self
        }
    }

    /// Returns a new state translated by a delta (arrow keys, drag).
    pub fn translated_by(self, dx: i32, dy: i32) -> Self {
        Self {
            translation: self.translation.shifted(dx, dy),
            ..self
        }
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ViewTransform {
    /// Renders the CSS-style transform string applied to the container.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scale({}) rotate({}deg) translate({}px, {}px)",
            self.scale_factor, self.rotation_angle, self.translation.x, self.translation.y
        )
    }
}
