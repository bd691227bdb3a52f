//! Minimal HTML/XML string assembly helpers.
//!
//! The page renderers build markup by pushing escaped fragments into a
//! `String`; these helpers keep the escaping rules in one place.

/// Escape text for element content (`&`, `<`, `>`).
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape text for attribute values (element escapes plus quotes).
pub fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Percent-encode a string for use in a query component.
///
/// Unreserved characters (RFC 3986 §2.3) pass through; everything else is
/// encoded byte-wise. Used when embedding page titles in preview-image URLs.
pub fn encode_query_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            b' ' => out.push_str("%20"),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_element_content() {
        assert_eq!(
            escape_text("Tables & <Charts>"),
            "Tables &amp; &lt;Charts&gt;"
        );
        assert_eq!(escape_text("plain"), "plain");
    }

    #[test]
    fn escapes_attribute_values() {
        assert_eq!(
            escape_attr(r#"a "quoted" value"#),
            "a &quot;quoted&quot; value"
        );
        assert_eq!(escape_attr("it's <b>"), "it&#39;s &lt;b&gt;");
    }

    #[test]
    fn query_encoding_round_trips_reserved_chars() {
        assert_eq!(encode_query_component("Hello World"), "Hello%20World");
        assert_eq!(
            encode_query_component("ZFish - Ultra-Light"),
            "ZFish%20-%20Ultra-Light"
        );
        assert_eq!(encode_query_component("a&b=c"), "a%26b%3Dc");
    }
}
