//! Portmarks: portable HTML bookmark files named after the page they point to.

pub mod config;
pub mod create;
pub mod error;
pub mod logging;
pub mod portmark;
pub mod sink;
pub mod url_model;

pub use config::PortmarkConfig;
pub use create::{alert_message, create_portmark, SavedPortmark};
pub use error::{DownloadError, GenerationError, PortmarkError};
pub use portmark::Portmark;
pub use sink::{DirectorySink, DownloadSink};
pub use url_model::{sanitize_filename, url_to_filename, url_to_filename_with};
