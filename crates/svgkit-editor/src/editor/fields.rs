//! Numeric-field changes and the per-object transform dispatch.
//!
//! Field changes update the container-level transform *and* apply an
//! absolute transform to the active object. Scale field values are
//! multiplied by 100 before being applied to the object: the UI works
//! in view scale factors, objects in object-scale units.

use super::SceneEditor;
use svgkit_core::constants::OBJECT_SCALE_PER_FACTOR;
use svgkit_core::Point;

/// The kind of per-object transform being dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    Scale,
    Rotate,
    Translate,
}

/// The value accompanying a transform dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformValue {
    Scalar(f64),
    Position { x: f64, y: f64 },
}

impl SceneEditor {
    /// Scale field changed: stores the factor in the view transform,
    /// applies the unit-converted value to the active object, and
    /// resizes the display surface to the full viewport.
    pub fn set_scale_field(&mut self, value: f64) {
        self.view = self.view.with_scale(value);
        self.apply_transform(
            TransformKind::Scale,
            TransformValue::Scalar(value * OBJECT_SCALE_PER_FACTOR),
        );
        self.resize_surface_to_viewport();
    }

    /// Rotation field changed: stores the angle and applies it to the
    /// active object as an absolute value.
    pub fn set_rotation_field(&mut self, angle: f64) {
        self.view = self.view.with_rotation(angle);
        self.apply_transform(TransformKind::Rotate, TransformValue::Scalar(angle));
    }

    /// Translate X field changed: updates the container offset and the
    /// active object's absolute position. This is the object-mutating
    /// translation pathway, distinct from drag and arrow keys.
    pub fn set_translate_x_field(&mut self, x: i32) {
        let y = self.view.translation.y;
        self.view = self.view.with_translation(x, y);
        self.apply_transform(
            TransformKind::Translate,
            TransformValue::Position {
                x: x as f64,
                y: y as f64,
            },
        );
    }

    /// Translate Y field changed: see [`Self::set_translate_x_field`].
    pub fn set_translate_y_field(&mut self, y: i32) {
        let x = self.view.translation.x;
        self.view = self.view.with_translation(x, y);
        self.apply_transform(
            TransformKind::Translate,
            TransformValue::Position {
                x: x as f64,
                y: y as f64,
            },
        );
    }

    /// Applies an absolute transform to the active object.
    ///
    /// With no active object this is a silent no-op, not an error. A
    /// kind/value mismatch is an internal dispatch error: it is logged
    /// and execution continues.
    pub fn apply_transform(&mut self, kind: TransformKind, value: TransformValue) {
        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        let Some(obj) = scene.active_object_mut() else {
            return;
        };
        match (kind, value) {
            (TransformKind::Scale, TransformValue::Scalar(v)) => obj.scale = v,
            (TransformKind::Rotate, TransformValue::Scalar(a)) => obj.rotation = a,
            (TransformKind::Translate, TransformValue::Position { x, y }) => {
                obj.position = Point::new(x, y);
            }
            (kind, value) => {
                tracing::error!(?kind, ?value, "invalid transform dispatch");
            }
        }
    }
}
