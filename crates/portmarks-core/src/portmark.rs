//! Portmark content: a minimal HTML page that redirects to the saved URL.

use crate::error::GenerationError;

/// Media type of the generated document.
pub const CONTENT_TYPE: &str = "text/html";

/// A generated portmark document for one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portmark {
    url: String,
    html: String,
}

impl Portmark {
    /// Builds the redirect document for `url`.
    ///
    /// The URL is embedded as-is apart from attribute escaping; it is not checked for
    /// reachability or validity.
    pub fn new(url: &str) -> Result<Self, GenerationError> {
        if url.trim().is_empty() {
            return Err(GenerationError::EmptyUrl);
        }
        Ok(Self {
            url: url.to_string(),
            html: render_portmark_html(url),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn content_type(&self) -> &'static str {
        CONTENT_TYPE
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.html.as_bytes()
    }
}

/// Renders the zero-delay meta-refresh page for `url`.
pub fn render_portmark_html(url: &str) -> String {
    format!(
        "<html><head><meta http-equiv=\"refresh\" content=\"0;url={}\" /></head><body></body></html>",
        escape_attribute(url)
    )
}

/// Escapes `url` for a double-quoted HTML attribute. Decoding the attribute yields `url` again.
fn escape_attribute(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for c in url.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
