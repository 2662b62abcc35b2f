//! Cross-platform filename sanitization (Windows, macOS, Linux).

/// Delimiter used by [`sanitize_filename`].
pub const DEFAULT_DELIMITER: char = '_';

/// Characters no major filesystem accepts in a filename.
pub const RESERVED_CHARS: [char; 9] = ['<', '>', ':', '"', '|', '?', '*', '\\', '/'];

pub fn is_reserved_char(c: char) -> bool {
    RESERVED_CHARS.contains(&c)
}

fn is_control(c: char) -> bool {
    ('\u{0}'..='\u{1f}').contains(&c)
}

// Browsers treat the BOM as whitespace in `\s`; `char::is_whitespace` does not.
fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Sanitizes a string for use as a filename on every major OS, using `_` as the delimiter.
///
/// See [`sanitize_filename_with`].
pub fn sanitize_filename(raw: &str) -> String {
    sanitize_filename_with(raw, DEFAULT_DELIMITER)
}

/// Sanitizes `raw` for use as a filename, replacing rather than deleting unsafe characters.
///
/// - Reserved characters (`< > : " | ? * \ /`) and control characters become `delimiter`
/// - Each whitespace run becomes one `delimiter`
/// - Runs of `delimiter` collapse to one
/// - Leading dots and delimiters are trimmed, as are trailing delimiters
///
/// Never fails; an input made only of unsafe characters yields an empty string.
/// The result is stable: sanitizing it again returns it unchanged.
pub fn sanitize_filename_with(raw: &str, delimiter: char) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_delimiter = false;

    for c in raw.chars() {
        let replacement = if is_reserved_char(c) || is_control(c) || is_space(c) {
            delimiter
        } else {
            c
        };

        if replacement == delimiter {
            if !prev_delimiter {
                out.push(delimiter);
            }
            prev_delimiter = true;
        } else {
            out.push(replacement);
            prev_delimiter = false;
        }
    }

    // Leading dots trim like delimiters: "..x" and "_.x" must not come out hidden.
    out.trim_start_matches(|c: char| c == delimiter || c == '.')
        .trim_end_matches(delimiter)
        .to_string()
}
