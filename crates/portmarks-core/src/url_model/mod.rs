//! URL modeling and filename derivation.
//!
//! Turns an arbitrary URL into a portmark filename that is legal on Windows,
//! macOS and Linux, bounded in length, and recognizable to a person.
//! URLs are parsed with the WHATWG grammar of the `url` crate, the same one
//! browsers implement.

mod parts;
mod sanitize;

pub use parts::ParsedUrlParts;
pub use sanitize::{
    is_reserved_char, sanitize_filename, sanitize_filename_with, DEFAULT_DELIMITER,
    RESERVED_CHARS,
};

use crate::config::PortmarkConfig;
use url::{Host, Url};

/// Marker appended to truncated base names.
const ELLIPSIS: &str = "...";

/// Longest filename, in bytes, that Linux filesystems accept (`NAME_MAX`).
pub const NAME_MAX_BYTES: usize = 255;

/// Where the base filename came from, best tier first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilenameSource {
    /// Hostname, path segments and query, sanitized.
    FullySegmented(String),
    /// Only a hostname could be recovered from an unparsable input.
    HostnameOnly(String),
    /// Nothing recognizable; use the configured fallback name.
    Fallback,
}

impl FilenameSource {
    /// The sanitized base name for this tier, before length limits.
    pub fn base<'a>(&'a self, cfg: &'a PortmarkConfig) -> &'a str {
        match self {
            FilenameSource::FullySegmented(s) | FilenameSource::HostnameOnly(s) => s,
            FilenameSource::Fallback => &cfg.fallback_filename,
        }
    }
}

/// Picks the filename tier for `url`. Never fails.
pub fn classify_url(url: &str, cfg: &PortmarkConfig) -> FilenameSource {
    match Url::parse(url) {
        Ok(parsed) => {
            let parts = ParsedUrlParts::from_url(&parsed, cfg.decode_percent_encoding);
            let candidate = sanitize_filename_with(&parts.candidate(cfg.delimiter), cfg.delimiter);
            if candidate.is_empty() {
                tracing::debug!(url, "url has no usable parts, using fallback filename");
                FilenameSource::Fallback
            } else {
                FilenameSource::FullySegmented(candidate)
            }
        }
        Err(err) => {
            tracing::debug!(url, error = %err, "url parsing failed, trying hostname-only");
            match recover_hostname(url, err) {
                Some(host) => {
                    let host = sanitize_filename_with(&host, cfg.delimiter);
                    if host.is_empty() {
                        FilenameSource::Fallback
                    } else {
                        FilenameSource::HostnameOnly(host)
                    }
                }
                None => FilenameSource::Fallback,
            }
        }
    }
}

/// Second, lenient parse: a scheme-less input like `example.com/page` is read as `http://`.
///
/// Bare words (`null`, `undefined`, `garbage`) are not hosts; only dotted names,
/// `localhost` and IP literals are kept.
fn recover_hostname(url: &str, err: url::ParseError) -> Option<String> {
    if err != url::ParseError::RelativeUrlWithoutBase {
        return None;
    }
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return None;
    }
    let authority = trimmed.split(['/', '?', '#']).next().unwrap_or_default();
    let parsed = Url::parse(&format!("http://{}", trimmed)).ok()?;
    match parsed.host()? {
        Host::Domain(d) if d.contains('.') || d == "localhost" => Some(d.to_string()),
        Host::Domain(_) => None,
        // The parser reads bare numbers like "123" as IPv4; require the dotted form.
        Host::Ipv4(ip) if authority.contains('.') => Some(ip.to_string()),
        Host::Ipv4(_) => None,
        Host::Ipv6(_) => parsed.host_str().map(str::to_string),
    }
}

/// Shortens `base` to at most `max_chars` characters and `max_bytes` UTF-8 bytes,
/// marking the cut with `...`.
///
/// The cut always lands on a character boundary.
pub fn truncate_base(base: &str, max_chars: usize, max_bytes: usize) -> String {
    if base.chars().count() <= max_chars && base.len() <= max_bytes {
        return base.to_string();
    }
    let keep_chars = max_chars.saturating_sub(ELLIPSIS.len());
    let keep_bytes = max_bytes.saturating_sub(ELLIPSIS.len());

    let mut out = String::with_capacity(keep_bytes + ELLIPSIS.len());
    for c in base.chars().take(keep_chars) {
        if out.len() + c.len_utf8() > keep_bytes {
            break;
        }
        out.push(c);
    }
    out.push_str(ELLIPSIS);
    out
}

/// Converts a URL to a portmark filename using the default configuration.
///
/// # Examples
///
/// - `url_to_filename("https://example.com/path/to/page")` → `"example.com_path_to_page.portmark.html"`
/// - `url_to_filename("not a url")` → `"bookmark.portmark.html"`
pub fn url_to_filename(url: &str) -> String {
    url_to_filename_with(url, &PortmarkConfig::default())
}

/// Converts a URL to a portmark filename.
///
/// Always returns a non-empty base name followed by `cfg.file_extension`, at most
/// `cfg.max_filename_length` characters and [`NAME_MAX_BYTES`] bytes (with room
/// for the sink's `.part` suffix), for a configuration that passes
/// [`PortmarkConfig::validate`].
pub fn url_to_filename_with(url: &str, cfg: &PortmarkConfig) -> String {
    let source = classify_url(url, cfg);
    let base = truncate_base(source.base(cfg), cfg.max_base_length(), cfg.max_base_bytes());
    format!("{}{}", base, cfg.file_extension)
}
