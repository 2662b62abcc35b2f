//! Download sinks: where a finished portmark is persisted.
//!
//! The core only needs something that accepts (content, filename) and saves it
//! exactly once per call. [`DirectorySink`] writes to a local directory through a
//! `.part` temp file and an atomic rename.

mod directory;
mod guard;

pub use directory::DirectorySink;

use crate::error::DownloadError;
use crate::portmark::Portmark;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Receives a portmark and its proposed filename and persists it.
pub trait DownloadSink {
    /// Saves `portmark` under `filename`, returning where it ended up.
    fn save(&mut self, portmark: &Portmark, filename: &str) -> Result<PathBuf, DownloadError>;
}

/// Path for the temp file: appends `.part` to the final path (e.g. `a.portmark.html` → `a.portmark.html.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}
