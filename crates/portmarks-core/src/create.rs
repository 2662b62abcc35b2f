//! The end-to-end flow: URL → filename + content → download sink.

use std::path::PathBuf;

use crate::config::PortmarkConfig;
use crate::error::PortmarkError;
use crate::portmark::Portmark;
use crate::sink::DownloadSink;
use crate::url_model::url_to_filename_with;

/// Application name used in user-facing messages.
pub const APP_NAME: &str = "Portmarks";

/// Outcome of a successful [`create_portmark`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedPortmark {
    pub filename: String,
    pub path: PathBuf,
}

/// Creates a portmark for `url` and hands it to `sink` exactly once.
///
/// Filename derivation cannot fail. Only content generation and the sink can, and
/// their errors are returned unchanged; nothing is retried.
pub fn create_portmark<S: DownloadSink + ?Sized>(
    url: &str,
    cfg: &PortmarkConfig,
    sink: &mut S,
) -> Result<SavedPortmark, PortmarkError> {
    let filename = url_to_filename_with(url, cfg);
    let portmark = Portmark::new(url)?;
    let path = sink.save(&portmark, &filename)?;

    tracing::info!(%filename, path = %path.display(), "{}: successfully created", APP_NAME);
    Ok(SavedPortmark { filename, path })
}

/// The single human-readable alert shown when creating a portmark fails.
pub fn alert_message(err: &PortmarkError) -> String {
    format!("{}: Failed to save bookmark.\n\n{}", APP_NAME, err)
}
