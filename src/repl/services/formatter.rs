//! # Response Formatter
//!
//! Turns a raw response body into display text. JSON bodies are re-indented
//! with two spaces and end with a newline; anything else passes through as
//! decoded text. Formatting never fails.

use encoding_rs::UTF_8;
use serde_json::Value;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Format a response body for the result viewport
pub fn format_response(raw: &[u8]) -> String {
    // Malformed UTF-8 sequences become U+FFFD instead of failing
    let (text, _had_errors) = UTF_8.decode_without_bom_handling(raw);

    match pretty_json(text.trim_start_matches(BYTE_ORDER_MARK)) {
        Some(pretty) => pretty,
        None => text.into_owned(),
    }
}

fn pretty_json(text: &str) -> Option<String> {
    let value: Value = serde_json::from_str(text).ok()?;
    let mut pretty = serde_json::to_string_pretty(&value).ok()?;
    pretty.push('\n');
    Some(pretty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_object_should_be_indented_with_trailing_newline() {
        let formatted = format_response(br#"{"a":1,"b":[1,2]}"#);
        assert_eq!(
            formatted,
            "{\n  \"a\": 1,\n  \"b\": [\n    1,\n    2\n  ]\n}\n"
        );
    }

    #[test]
    fn formatted_json_should_reparse_to_same_value() {
        let raw = br#"{"a":1,"b":[1,2]}"#;
        let formatted = format_response(raw);
        let original: Value = serde_json::from_slice(raw).unwrap();
        let reparsed: Value = serde_json::from_str(&formatted).unwrap();
        assert_eq!(original, reparsed);
        assert!(formatted.lines().count() > 1);
    }

    #[test]
    fn plain_text_should_pass_through_unchanged() {
        assert_eq!(format_response(b"plain text"), "plain text");
    }

    #[test]
    fn truncated_json_should_pass_through_unchanged() {
        let raw = r#"{"a": [1, 2"#;
        assert_eq!(format_response(raw.as_bytes()), raw);
    }

    #[test]
    fn empty_body_should_format_to_empty_string() {
        assert_eq!(format_response(b""), "");
    }

    #[test]
    fn key_order_should_be_preserved() {
        let formatted = format_response(br#"{"zeta":1,"alpha":2}"#);
        let zeta = formatted.find("zeta").unwrap();
        let alpha = formatted.find("alpha").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn leading_bom_should_not_prevent_json_formatting() {
        let mut raw = "\u{feff}".as_bytes().to_vec();
        raw.extend_from_slice(br#"{"ok":true}"#);
        assert_eq!(format_response(&raw), "{\n  \"ok\": true\n}\n");
    }

    #[test]
    fn invalid_utf8_should_be_replaced_not_rejected() {
        let formatted = format_response(&[b'a', 0xff, b'b']);
        assert_eq!(formatted, "a\u{fffd}b");
    }

    #[test]
    fn html_should_pass_through() {
        let html = "<html>\n  <body>hi</body>\n</html>\n";
        assert_eq!(format_response(html.as_bytes()), html);
    }
}
