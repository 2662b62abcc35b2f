//! `portmarks filename <url>` – print the derived filename.

use portmarks_core::{url_to_filename_with, PortmarkConfig};

pub fn run_filename(cfg: &PortmarkConfig, url: &str) {
    println!("{}", url_to_filename_with(url, cfg));
}
