//! Escaping utilities for report output.
//!
//! Items come straight from user documents and can contain anything:
//! markup, quotes, separators, line breaks. Every item must go through one
//! of these functions before it is embedded in HTML or CSV.

/// Escape a string for safe inclusion in HTML content.
///
/// # Examples
///
/// ```
/// use list_comparer::reports::escape::escape_html;
///
/// assert_eq!(escape_html("<b>O'Hara & Sons</b>"),
///     "&lt;b&gt;O&#x27;Hara &amp; Sons&lt;/b&gt;");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for an HTML attribute value.
///
/// Stricter than [`escape_html`]: whitespace that would break attribute
/// parsing is encoded too.
#[must_use]
pub fn escape_html_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => result.push_str("&#10;"),
            '\r' => result.push_str("&#13;"),
            '\t' => result.push_str("&#9;"),
            _ => result.push_str(&escape_html(c.encode_utf8(&mut [0; 4]))),
        }
    }
    result
}

/// Render one CSV field per RFC 4180.
///
/// Fields containing a comma, quote or line break are wrapped in double
/// quotes with inner quotes doubled; anything else is returned as is.
///
/// ```
/// use list_comparer::reports::escape::escape_csv;
///
/// assert_eq!(escape_csv("plain"), "plain");
/// assert_eq!(escape_csv("Smith, John"), "\"Smith, John\"");
/// assert_eq!(escape_csv("5\" pipe"), "\"5\"\" pipe\"");
/// ```
#[must_use]
pub fn escape_csv(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_basic() {
        assert_eq!(escape_html("hello"), "hello");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("a < b > c"), "a &lt; b &gt; c");
        assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }

    #[test]
    fn test_escape_html_script_item() {
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"
        );
        // Already-escaped text is escaped again, not decoded
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_escape_html_attr() {
        assert_eq!(escape_html_attr("normal"), "normal");
        assert_eq!(escape_html_attr("line1\nline2"), "line1&#10;line2");
        assert_eq!(escape_html_attr("a\t\"b\""), "a&#9;&quot;b&quot;");
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv(""), "");
        assert_eq!(escape_csv("multi\nline"), "\"multi\nline\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_unicode_preservation() {
        assert_eq!(escape_html("Zoë Ångström"), "Zoë Ångström");
        assert_eq!(escape_csv("日本語"), "日本語");
    }
}
