//! Markup escaping for untrusted catalog text
//!
//! Every record field interpolated into a fragment goes through
//! [`escape_html`]. Catalog text must never become active markup.

/// Replace the five markup-significant characters with entities.
///
/// Accepts `&str`, `Option<&str>` or `&Option<String>`-derived values; an
/// absent value escapes to the empty string.
///
/// ```
/// use ptk_html::escape_html;
///
/// assert_eq!(escape_html("<b>&\"'</b>"), "&lt;b&gt;&amp;&quot;&#039;&lt;/b&gt;");
/// assert_eq!(escape_html(None::<&str>), "");
/// ```
pub fn escape_html<'a>(text: impl Into<Option<&'a str>>) -> String {
    let Some(text) = text.into() else {
        return String::new();
    };

    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_all_five() {
        assert_eq!(
            escape_html("<b>&\"'</b>"),
            "&lt;b&gt;&amp;&quot;&#039;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_absent_and_empty() {
        assert_eq!(escape_html(None::<&str>), "");
        assert_eq!(escape_html(""), "");
        let missing: Option<String> = None;
        assert_eq!(escape_html(missing.as_deref()), "");
    }

    #[test]
    fn test_other_characters_unchanged() {
        assert_eq!(escape_html("5–10 minutes, naïve café"), "5–10 minutes, naïve café");
        assert_eq!(escape_html("line one\nline two"), "line one\nline two");
    }

    #[test]
    fn test_existing_entities_are_escaped_again() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_script_injection_neutralized() {
        let out = escape_html("<script>alert('xss')</script>");
        assert!(!out.contains('<'));
        assert!(!out.contains('\''));
        assert_eq!(out, "&lt;script&gt;alert(&#039;xss&#039;)&lt;/script&gt;");
    }
}
