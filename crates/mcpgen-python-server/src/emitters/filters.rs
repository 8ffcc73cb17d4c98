//! Text sanitization shared by the tool and prompt emitters.
//!
//! Descriptions are untrusted free text headed for Python source; anything
//! that could terminate a string literal early is neutralized here.

/// Longest description embedded in generated source before truncation.
const MAX_DESCRIPTION_LEN: usize = 500;

/// Make free text safe inside a `"""` docstring: truncate over-long input
/// with a trailing ellipsis, swap triple-quote delimiters for a
/// non-colliding substitute, and escape backslashes. Trailing quotes are
/// escaped so they cannot merge with the closing delimiter.
pub fn sanitize_docstring(value: &str) -> String {
    let mut result = truncate(value).replace("\"\"\"", "'''").replace('\\', "\\\\");
    let trailing = result.chars().rev().take_while(|&c| c == '"').count();
    if trailing > 0 {
        result.truncate(result.len() - trailing);
        for _ in 0..trailing {
            result.push_str("\\\"");
        }
    }
    result
}

/// Collapse free text to one escaped line for a `"..."` string literal.
pub fn one_line(value: &str) -> String {
    let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate(&collapsed).replace('\\', "\\\\").replace('"', "\\\"")
}

/// Escape a literal for embedding in a double-quoted Python string.
pub fn py_str(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn truncate(value: &str) -> String {
    if value.chars().count() <= MAX_DESCRIPTION_LEN {
        return value.to_string();
    }
    let kept: String = value.chars().take(MAX_DESCRIPTION_LEN).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triple_quotes_are_substituted() {
        assert_eq!(sanitize_docstring(r#"say """hi""" now"#), "say '''hi''' now");
    }

    #[test]
    fn backslashes_are_escaped() {
        assert_eq!(sanitize_docstring(r"C:\temp"), r"C:\\temp");
        assert_eq!(py_str(r#"a\"b"#), r#"a\\\"b"#);
    }

    #[test]
    fn long_text_is_truncated_with_ellipsis() {
        let long = "x".repeat(600);
        let out = sanitize_docstring(&long);
        assert_eq!(out.chars().count(), 503);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn trailing_quote_cannot_merge_with_the_closing_delimiter() {
        assert_eq!(sanitize_docstring("quote\""), "quote\\\"");
        assert_eq!(sanitize_docstring("two\"\""), "two\\\"\\\"");
        // Four quotes: three collapse to the substitute, the leftover one
        // is escaped.
        assert_eq!(sanitize_docstring("\"\"\"\""), "'''\\\"");
    }

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(sanitize_docstring("fetch a user"), "fetch a user");
    }

    #[test]
    fn one_line_collapses_newlines_and_escapes_quotes() {
        assert_eq!(one_line("fetch\na \"user\"\n\tnow"), "fetch a \\\"user\\\" now");
    }
}
