//! Export download collaborator.

use std::path::PathBuf;
use svgkit_core::{EditorError, Result};

/// Collaborator that receives an exported scene serialization.
///
/// Mirrors a browser-style download trigger: the editor hands over a
/// filename, a MIME type, and the serialized contents, and consumes no
/// return value beyond success.
pub trait DownloadSink {
    /// Delivers the exported contents.
    fn deliver(&mut self, filename: &str, mime: &str, contents: &str) -> Result<()>;
}

/// Download sink that writes the export into a directory.
#[derive(Debug, Clone)]
pub struct FileDownloadSink {
    dir: PathBuf,
}

impl FileDownloadSink {
    /// Creates a sink that writes into the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DownloadSink for FileDownloadSink {
    fn deliver(&mut self, filename: &str, mime: &str, contents: &str) -> Result<()> {
        let target = self.dir.join(filename);
        std::fs::write(&target, contents).map_err(|e| EditorError::Export {
            filename: filename.to_string(),
            reason: e.to_string(),
        })?;
        tracing::info!(target = %target.display(), mime, bytes = contents.len(), "delivered export");
        Ok(())
    }
}
