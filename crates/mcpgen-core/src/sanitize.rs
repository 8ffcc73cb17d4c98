//! Identifier sanitization for emitted Python source.
//!
//! Raw names from extraction documents are arbitrary text; everything that
//! ends up as a Python symbol goes through [`sanitize`], which is total and
//! idempotent.

/// How to rescue an identifier whose first character is a digit.
///
/// Parameter names take a bare underscore; tool and category names take the
/// `tool_` prefix so the symbol still reads as a callable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitPrefix {
    Underscore,
    Tool,
}

impl DigitPrefix {
    fn as_str(&self) -> &'static str {
        match self {
            DigitPrefix::Underscore => "_",
            DigitPrefix::Tool => "tool_",
        }
    }
}

/// Python hard keywords; a sanitized name colliding with one gets a
/// trailing underscore.
const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue",
    "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if", "import",
    "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while",
    "with", "yield",
];

/// Sanitize arbitrary text into a valid, non-empty Python identifier.
///
/// Returns `fallback` when nothing usable survives. The fallback is assumed
/// to already be a valid identifier.
pub fn sanitize(raw: &str, fallback: &str, digit_prefix: DigitPrefix) -> String {
    sanitize_opt(raw, digit_prefix).unwrap_or_else(|| fallback.to_string())
}

/// Like [`sanitize`], but reports an empty result as `None` instead of
/// substituting a fallback. The resolver uses this to tell "the input was
/// entirely invalid" apart from "the input happened to equal the fallback".
pub fn sanitize_opt(raw: &str, digit_prefix: DigitPrefix) -> Option<String> {
    let replaced: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    let core = replaced.trim_matches('_');
    if core.is_empty() {
        return None;
    }

    let mut result = if core.starts_with(|c: char| c.is_ascii_digit()) {
        format!("{}{}", digit_prefix.as_str(), core)
    } else {
        core.to_string()
    };

    if PYTHON_KEYWORDS.contains(&result.as_str()) {
        result.push('_');
    }

    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_invalid_characters() {
        assert_eq!(
            sanitize("get user/by-id", "tool", DigitPrefix::Underscore),
            "get_user_by_id"
        );
    }

    #[test]
    fn strips_edge_underscores() {
        assert_eq!(sanitize("__name__", "tool", DigitPrefix::Underscore), "name");
        assert_eq!(sanitize("--flag--", "tool", DigitPrefix::Underscore), "flag");
    }

    #[test]
    fn empty_input_falls_back() {
        assert_eq!(sanitize("", "tool", DigitPrefix::Tool), "tool");
        assert_eq!(sanitize("!!!", "param", DigitPrefix::Underscore), "param");
        assert!(sanitize_opt("___", DigitPrefix::Underscore).is_none());
    }

    #[test]
    fn digit_prefix_policies() {
        assert_eq!(sanitize("2fa", "param", DigitPrefix::Underscore), "_2fa");
        assert_eq!(sanitize("2fa", "tool", DigitPrefix::Tool), "tool_2fa");
    }

    #[test]
    fn keywords_get_trailing_underscore() {
        assert_eq!(sanitize("import", "tool", DigitPrefix::Underscore), "import_");
        assert_eq!(sanitize("class", "tool", DigitPrefix::Tool), "class_");
        assert_eq!(sanitize("False", "tool", DigitPrefix::Underscore), "False_");
    }

    #[test]
    fn idempotent() {
        let cases = [
            "getUser", "get user/by-id", "2fa", "import", "__name__", "", "!!!", "id!", "tool_9x",
        ];
        for policy in [DigitPrefix::Underscore, DigitPrefix::Tool] {
            for raw in cases {
                let once = sanitize(raw, "tool", policy);
                let twice = sanitize(&once, "tool", policy);
                assert_eq!(once, twice, "sanitize not idempotent for {raw:?}");
            }
        }
    }

    #[test]
    fn output_is_a_valid_identifier() {
        let cases = ["", "9", "a b c", "véhicule", "...", "for", "x-y-z!"];
        for raw in cases {
            let out = sanitize(raw, "tool", DigitPrefix::Underscore);
            assert!(!out.is_empty());
            assert!(
                out.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
                "bad identifier {out:?} for {raw:?}"
            );
        }
    }
}
