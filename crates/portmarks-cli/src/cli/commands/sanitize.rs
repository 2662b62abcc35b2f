//! `portmarks sanitize <text>` – print text sanitized for use as a filename.

use portmarks_core::url_model::sanitize_filename_with;
use portmarks_core::PortmarkConfig;

pub fn run_sanitize(cfg: &PortmarkConfig, text: &str) {
    println!("{}", sanitize_filename_with(text, cfg.delimiter));
}
