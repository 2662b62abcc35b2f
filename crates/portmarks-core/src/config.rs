use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::sink::TEMP_SUFFIX;
use crate::url_model::{is_reserved_char, sanitize_filename_with, NAME_MAX_BYTES};

/// Filename and output settings, loaded from `~/.config/portmarks/config.toml`.
///
/// Built once and passed by reference; nothing in the crate mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortmarkConfig {
    /// Maximum length of the whole filename, extension included (in characters).
    pub max_filename_length: usize,
    /// Literal extension appended to every generated filename.
    pub file_extension: String,
    /// Base name used when nothing recognizable can be taken from the URL.
    pub fallback_filename: String,
    /// Replacement for invalid characters and whitespace runs.
    pub delimiter: char,
    /// Percent-decode path segments and the query before sanitizing (`%20` → space → delimiter).
    pub decode_percent_encoding: bool,
    /// Directory the CLI saves into; `None` means the current directory.
    pub download_dir: Option<PathBuf>,
}

impl Default for PortmarkConfig {
    fn default() -> Self {
        Self {
            max_filename_length: 150,
            file_extension: ".portmark.html".to_string(),
            fallback_filename: "bookmark".to_string(),
            delimiter: '_',
            decode_percent_encoding: true,
            download_dir: None,
        }
    }
}

impl PortmarkConfig {
    /// Maximum length of the base filename (everything before the extension).
    pub fn max_base_length(&self) -> usize {
        self.max_filename_length
            .saturating_sub(self.file_extension.chars().count())
    }

    /// Maximum UTF-8 size of the base filename, so that base, extension and the
    /// sink's `.part` suffix together stay within `NAME_MAX_BYTES`.
    pub fn max_base_bytes(&self) -> usize {
        NAME_MAX_BYTES
            .saturating_sub(self.file_extension.len())
            .saturating_sub(TEMP_SUFFIX.len())
    }

    /// Check that the settings can produce filenames satisfying the safety rules.
    pub fn validate(&self) -> Result<()> {
        let d = self.delimiter;
        if d == '.' || d.is_whitespace() || d.is_ascii_control() || is_reserved_char(d) {
            bail!("invalid delimiter {:?}: must be a filesystem-safe, non-dot, non-space character", d);
        }

        let ext = &self.file_extension;
        if !ext.starts_with('.') || ext.len() < 2 {
            bail!("invalid file extension {:?}: must start with '.' and name a type", ext);
        }
        if ext
            .chars()
            .any(|c| is_reserved_char(c) || c.is_ascii_control() || c.is_whitespace())
        {
            bail!("invalid file extension {:?}: contains reserved characters", ext);
        }

        // Truncation keeps `max_base_length - 3` characters before the ellipsis.
        if self.max_base_length() <= 3 || self.max_base_bytes() <= 3 {
            bail!(
                "max_filename_length {} leaves no room for a base name next to {:?}",
                self.max_filename_length,
                ext
            );
        }

        let fallback = &self.fallback_filename;
        if fallback.is_empty() || sanitize_filename_with(fallback, d) != *fallback {
            bail!("invalid fallback filename {:?}: must already be a sanitized name", fallback);
        }
        if fallback.chars().count() > self.max_base_length() || fallback.len() > self.max_base_bytes() {
            bail!("fallback filename {:?} exceeds the maximum base length", fallback);
        }

        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("portmarks")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PortmarkConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PortmarkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load and validate configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<PortmarkConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: PortmarkConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
