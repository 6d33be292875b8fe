//! HTML escaping

use std::borrow::Cow;

fn entity(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape the five HTML-significant characters
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.chars().any(|c| entity(c).is_some()) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    escape_html_into(&mut out, s);
    Cow::Owned(out)
}

/// Append `s` to `out`, escaping HTML-significant characters
pub fn escape_html_into(out: &mut String, s: &str) {
    let mut last = 0;
    for (i, c) in s.char_indices() {
        if let Some(replacement) = entity(c) {
            out.push_str(&s[last..i]);
            out.push_str(replacement);
            last = i + c.len_utf8();
        }
    }
    out.push_str(&s[last..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b"), "a &lt; b");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape_html(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_html("it's"), "it&#39;s");
    }

    #[test]
    fn test_escape_html_borrows_clean_input() {
        assert!(matches!(escape_html("plain text"), Cow::Borrowed(_)));
        assert!(matches!(escape_html(""), Cow::Borrowed(_)));
        assert!(matches!(escape_html("x&y"), Cow::Owned(_)));
    }

    #[test]
    fn test_escape_html_does_not_double_unescape() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_escape_html_multibyte() {
        assert_eq!(escape_html("héllo <wörld> ✓"), "héllo &lt;wörld&gt; ✓");
    }

    #[test]
    fn test_escape_html_into_appends() {
        let mut out = String::from("<p>");
        escape_html_into(&mut out, "1 > 0");
        assert_eq!(out, "<p>1 &gt; 0");
    }

    #[test]
    fn test_escaped_output_has_no_raw_specials() {
        let nasty = r#"<script>alert('x' && "y")</script>"#;
        let escaped = escape_html(nasty);
        for c in ['<', '>', '"', '\''] {
            assert!(!escaped.contains(c), "raw {:?} in {}", c, escaped);
        }
        // every remaining '&' starts an entity
        for (i, _) in escaped.match_indices('&') {
            let rest = &escaped[i..];
            assert!(
                ["&amp;", "&lt;", "&gt;", "&quot;", "&#39;"]
                    .iter()
                    .any(|e| rest.starts_with(e)),
                "bare '&' at {} in {}",
                i,
                escaped
            );
        }
    }
}
