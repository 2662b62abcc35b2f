//! Sink that saves portmarks into a local directory.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::guard::TempFileGuard;
use super::{temp_path, DownloadSink};
use crate::error::DownloadError;
use crate::portmark::Portmark;

/// Writes each portmark to `<dir>/<filename>`.
///
/// Content is written to `<filename>.part`, synced, then renamed into place, so a
/// failed save never leaves a half-written portmark behind.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
    overwrite: bool,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            overwrite: false,
        }
    }

    /// Replace an existing file with the same name instead of failing.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn target_for(&self, filename: &str) -> Result<PathBuf, DownloadError> {
        let plain = Path::new(filename).file_name().and_then(|n| n.to_str()) == Some(filename);
        if filename.is_empty() || !plain || filename.contains(['/', '\\']) || filename == ".." {
            return Err(DownloadError::InvalidFilename(filename.to_string()));
        }
        Ok(self.dir.join(filename))
    }
}

impl DownloadSink for DirectorySink {
    fn save(&mut self, portmark: &Portmark, filename: &str) -> Result<PathBuf, DownloadError> {
        let final_path = self.target_for(filename)?;
        if !self.overwrite && final_path.exists() {
            return Err(DownloadError::AlreadyExists(final_path));
        }

        let guard = TempFileGuard::new(temp_path(&final_path));
        let tp = guard.path().to_path_buf();

        let mut file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&tp)
            .map_err(|e| DownloadError::io(&tp, e))?;
        file.write_all(portmark.as_bytes())
            .map_err(|e| DownloadError::io(&tp, e))?;
        file.sync_all().map_err(|e| DownloadError::io(&tp, e))?;
        drop(file);

        std::fs::rename(&tp, &final_path).map_err(|e| DownloadError::io(&final_path, e))?;
        guard.commit();

        tracing::debug!(path = %final_path.display(), bytes = portmark.as_bytes().len(), "portmark written");
        Ok(final_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portmark() -> Portmark {
        Portmark::new("https://example.com/page").unwrap()
    }

    #[test]
    fn writes_file_and_removes_temp() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path());
        let path = sink.save(&portmark(), "example.com_page.portmark.html").unwrap();

        assert_eq!(path, dir.path().join("example.com_page.portmark.html"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), portmark().html());
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn existing_file_is_not_overwritten_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a.portmark.html");
        std::fs::write(&target, "keep me").unwrap();

        let mut sink = DirectorySink::new(dir.path());
        let err = sink.save(&portmark(), "a.portmark.html").unwrap_err();
        assert!(matches!(err, DownloadError::AlreadyExists(p) if p == target));
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "keep me");
    }

    #[test]
    fn overwrite_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a.portmark.html");
        std::fs::write(&target, "old").unwrap();

        let mut sink = DirectorySink::new(dir.path()).overwrite(true);
        sink.save(&portmark(), "a.portmark.html").unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), portmark().html());
    }

    #[test]
    fn rejects_path_like_filenames() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path());
        for name in ["", "..", ".", "../x.html", "a/b.html", "a\\b.html"] {
            let err = sink.save(&portmark(), name).unwrap_err();
            assert!(matches!(err, DownloadError::InvalidFilename(_)), "{:?}", name);
        }
    }

    #[test]
    fn missing_directory_is_an_io_error_and_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let mut sink = DirectorySink::new(&missing);
        let err = sink.save(&portmark(), "a.portmark.html").unwrap_err();
        assert!(matches!(err, DownloadError::Io { .. }));
        assert!(!missing.exists());
    }
}
