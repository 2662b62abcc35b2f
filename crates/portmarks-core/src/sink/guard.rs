//! RAII guard that removes an uncommitted temp file when dropped.

use std::path::{Path, PathBuf};

/// Deletes the temp file on drop unless [`TempFileGuard::commit`] was called.
pub(super) struct TempFileGuard {
    path: PathBuf,
    committed: bool,
}

impl TempFileGuard {
    pub(super) fn new(path: PathBuf) -> Self {
        Self {
            path,
            committed: false,
        }
    }

    pub(super) fn path(&self) -> &Path {
        &self.path
    }

    /// The temp file was renamed into place; nothing left to clean up.
    pub(super) fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        if let Err(err) = std::fs::remove_file(&self.path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %self.path.display(), error = %err, "failed to remove temp file");
            }
        }
    }
}
