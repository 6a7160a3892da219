//! # SVGKit
//!
//! An interactive vector-graphics editing core. A loaded image becomes
//! an editable scene: the view can be scaled, rotated, and translated,
//! freehand strokes can be drawn on top, every addition is reversible
//! through a bounded undo / unbounded redo history, and the composed
//! scene exports as SVG text.
//!
//! ## Architecture
//!
//! SVGKit is organized as a workspace with two crates:
//!
//! 1. **svgkit-core** - Constants, geometry primitives, error taxonomy
//! 2. **svgkit-editor** - The editing core: scene graph, view
//!    transform, drawing and drag controllers, history, export, and
//!    the load/download collaborator seams
//!
//! The root crate provides the binary entry point and logging setup.

pub use svgkit_editor as editor;

pub use svgkit_core::{EditorError, Offset, Point, Result};
pub use svgkit_editor::{
    run_guarded, DownloadSink, DrawMode, EditorSettings, FileDownloadSink, FileImageSource,
    ImageSource, KeyInput, ObjectKind, Scene, SceneEditor, SceneHistory, SceneObject, SurfaceSize,
    ViewTransform, FALLBACK_NOTICE,
};

/// Initializes logging for the application.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer().with_target(true).with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
