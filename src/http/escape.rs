//! HTML escaping module
//!
//! Sanitizes untrusted text before it is embedded in a response body.

/// Escape the five HTML-special characters in `input`.
///
/// Replacements (single pass, so already-escaped text is never re-scanned):
/// - `&` becomes `&amp;`
/// - `<` becomes `&lt;`
/// - `>` becomes `&gt;`
/// - `"` becomes `&#34;`
/// - `'` becomes `&#39;`
///
/// Every other character, including multi-byte Unicode, passes through
/// untouched.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(escape_html("/foo/bar.txt"), "/foo/bar.txt");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_all_specials_replaced() {
        assert_eq!(escape_html("&<>\"'"), "&amp;&lt;&gt;&#34;&#39;");
    }

    #[test]
    fn test_every_occurrence_replaced() {
        assert_eq!(escape_html("a&b&c"), "a&amp;b&amp;c");
        assert_eq!(escape_html("<<>>"), "&lt;&lt;&gt;&gt;");
    }

    #[test]
    fn test_markup_in_path() {
        assert_eq!(escape_html("/<script>"), "/&lt;script&gt;");
    }

    #[test]
    fn test_entity_text_is_not_special_cased() {
        // A literal ampersand is always escaped, even when the input already
        // looks like an entity.
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_unicode_passes_through() {
        assert_eq!(escape_html("/héllo/世界"), "/héllo/世界");
    }
}
