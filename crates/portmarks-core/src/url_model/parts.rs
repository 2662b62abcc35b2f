//! Structural pieces of a URL used to build a filename.

use percent_encoding::percent_decode_str;
use url::Url;

/// Hostname, non-empty path segments, and query of a parsed URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrlParts {
    pub hostname: String,
    pub path_segments: Vec<String>,
    /// Query without the leading `?`; `None` when absent or empty.
    pub query: Option<String>,
}

impl ParsedUrlParts {
    /// Splits a parsed URL into filename parts. With `decode` set, path segments and
    /// the query are percent-decoded (invalid UTF-8 is replaced, not rejected).
    pub fn from_url(url: &Url, decode: bool) -> Self {
        let text = |s: &str| -> String {
            if decode {
                percent_decode_str(s).decode_utf8_lossy().into_owned()
            } else {
                s.to_string()
            }
        };

        let path_segments = url
            .path()
            .split('/')
            .filter(|s| !s.is_empty())
            .map(text)
            .collect();

        let query = url.query().filter(|q| !q.is_empty()).map(text);

        Self {
            hostname: url.host_str().unwrap_or_default().to_string(),
            path_segments,
            query,
        }
    }

    /// Joins hostname, segments, and query with `delimiter`. Not yet sanitized.
    pub fn candidate(&self, delimiter: char) -> String {
        let mut sep = [0u8; 4];
        let sep = delimiter.encode_utf8(&mut sep);

        std::iter::once(self.hostname.as_str())
            .chain(self.path_segments.iter().map(String::as_str))
            .chain(self.query.as_deref())
            .collect::<Vec<_>>()
            .join(sep)
    }
}
