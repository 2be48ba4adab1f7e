//! Copy-paste HTML for the chosen crop.

/// Escape the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render an `<img>` tag cropping `src` around `object_position`.
///
/// # Arguments
///
/// * `src` - Image URL, escaped before insertion
/// * `object_position` - Encoded focal point, e.g. `"33.30% 66.60%"`, inserted as is
///
/// # Example
///
/// ```ignore
/// let html = crop_snippet("cat.jpg", "50.00% 50.00%");
/// assert!(html.contains("object-position: 50.00% 50.00%;"));
/// ```
pub fn crop_snippet(src: &str, object_position: &str) -> String {
    format!(
        "<img\n  src=\"{}\"\n  style=\"object-fit: cover; object-position: {};\"\n/>",
        escape_html(src),
        object_position,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_plain_text_unchanged() {
        assert_eq!(escape_html("photo.jpg"), "photo.jpg");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_crop_snippet() {
        let html = crop_snippet("cat.jpg", "33.30% 66.60%");
        assert_eq!(
            html,
            "<img\n  src=\"cat.jpg\"\n  style=\"object-fit: cover; object-position: 33.30% 66.60%;\"\n/>"
        );
    }

    #[test]
    fn test_crop_snippet_inserts_position_verbatim() {
        let html = crop_snippet("cat.jpg", "left & top");
        assert!(html.contains("object-position: left & top;"));
        assert!(!html.contains("&amp;"));
    }

    #[test]
    fn test_crop_snippet_escapes_src() {
        let html = crop_snippet("a.jpg\" onload=\"alert(1)", "50.00% 50.00%");
        assert!(html.contains("src=\"a.jpg&quot; onload=&quot;alert(1)\""));
    }
}
