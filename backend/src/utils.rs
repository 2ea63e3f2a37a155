use crate::error::ApiError;

pub fn parse_record_id(id: &str) -> Result<i64, ApiError> {
    id.trim().parse::<i64>().map_err(|_| ApiError::InvalidId(id.to_string()))
}

/// Escapes text for interpolation into HTML element content or attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ids() {
        assert_eq!(parse_record_id("42").unwrap(), 42);
        assert!(matches!(parse_record_id("abc"), Err(ApiError::InvalidId(id)) if id == "abc"));
        assert!(parse_record_id("1.5").is_err());
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html("<b>Tom & 'Jerry'</b>"), "&lt;b&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/b&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
