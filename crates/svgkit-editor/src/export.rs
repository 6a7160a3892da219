//! SVG serialization of the scene.
//!
//! Builds the vector-image text handed to the download collaborator:
//! an `<svg>` document sized to the drawing surface, with a group
//! carrying the container-level transform around the background image
//! and every drawn object.

use crate::drawing::BrushSettings;
use crate::editor::SurfaceSize;
use crate::scene::{ObjectKind, Scene, SceneObject};
use crate::transform::ViewTransform;

/// Serializes the scene to SVG text.
pub fn render_scene_svg(
    scene: &Scene,
    view: &ViewTransform,
    brush: &BrushSettings,
    surface: SurfaceSize,
) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
        surface.width, surface.height, surface.width, surface.height
    ));

    // Container-level transform wraps the whole scene.
    svg.push_str(&format!("  <g transform=\"{}\">\n", view));

    for obj in scene.objects() {
        match obj.kind {
            ObjectKind::Image => {
                if let Some(source) = &obj.source {
                    svg.push_str(&format!(
                        "    <image href=\"{}\" x=\"{}\" y=\"{}\" transform=\"{}\"/>\n",
                        source,
                        obj.position.x,
                        obj.position.y,
                        object_transform(obj)
                    ));
                }
            }
            ObjectKind::Path => {
                svg.push_str(&format!(
                    "    <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" transform=\"{}\"/>\n",
                    render_path_data(obj),
                    brush.color,
                    brush.width,
                    object_transform(obj)
                ));
            }
            ObjectKind::Other => {
                svg.push_str(&format!(
                    "    <rect x=\"{}\" y=\"{}\" width=\"1\" height=\"1\" transform=\"{}\"/>\n",
                    obj.position.x,
                    obj.position.y,
                    object_transform(obj)
                ));
            }
        }
    }

    svg.push_str("  </g>\n");
    svg.push_str("</svg>\n");
    svg
}

/// Renders a stroke's captured points as SVG path commands.
fn render_path_data(obj: &SceneObject) -> String {
    let mut d = String::new();
    for (i, p) in obj.points.iter().enumerate() {
        if i == 0 {
            d.push_str(&format!("M {} {}", p.x, p.y));
        } else {
            d.push_str(&format!(" L {} {}", p.x, p.y));
        }
    }
    d
}

/// Renders an object's own transform attribute. Object scale is kept in
/// object-scale units (100 = unscaled).
fn object_transform(obj: &SceneObject) -> String {
    format!(
        "rotate({}) scale({})",
        obj.rotation,
        obj.scale / svgkit_core::constants::OBJECT_SCALE_PER_FACTOR
    )
}
