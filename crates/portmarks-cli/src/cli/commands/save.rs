//! `portmarks save <url>` – create a portmark file.

use anyhow::{Context, Result};
use portmarks_core::{create_portmark, DirectorySink, PortmarkConfig};
use std::path::{Path, PathBuf};

/// Picks the output directory: `--dir`, then config `download_dir`, then the current directory.
pub(crate) fn resolve_dir(cfg: &PortmarkConfig, dir: Option<&Path>) -> Result<PathBuf> {
    match dir.or(cfg.download_dir.as_deref()) {
        Some(d) => Ok(d.to_path_buf()),
        None => std::env::current_dir().context("resolve current directory"),
    }
}

pub fn run_save(cfg: &PortmarkConfig, url: &str, dir: Option<&Path>, force: bool) -> Result<()> {
    let dir = resolve_dir(cfg, dir)?;
    let mut sink = DirectorySink::new(dir).overwrite(force);
    let saved = create_portmark(url, cfg, &mut sink)?;
    println!("{}", saved.path.display());
    Ok(())
}
