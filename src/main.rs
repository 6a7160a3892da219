use anyhow::Context;
use std::path::{Path, PathBuf};

use svgkit::init_logging;
use svgkit::{
    run_guarded, FileDownloadSink, FileImageSource, ImageSource, SceneEditor, SurfaceSize,
};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    let path: PathBuf = std::env::args_os()
        .nth(1)
        .map(Into::into)
        .context("usage: svgkit <image-file>")?;

    // Any fault inside the editor replaces the whole surface with the
    // static notice; no partial recovery.
    match run_guarded(|| run(&path)) {
        Ok(result) => result,
        Err(notice) => {
            eprintln!("{notice}");
            Ok(())
        }
    }
}

fn run(path: &Path) -> anyhow::Result<()> {
    let data_uri = FileImageSource::new().load(path)?;

    let mut editor = SceneEditor::new(SurfaceSize::new(1920.0, 1080.0));
    editor.load_image(data_uri);

    let mut sink = FileDownloadSink::new(std::env::current_dir()?);
    editor.export_scene(&mut sink)?;
    editor.close();

    Ok(())
}
