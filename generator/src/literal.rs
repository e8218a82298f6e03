//! Literal rendering shared by every block of the document.

/// Renders a float as a Turtle numeric literal.
///
/// Uses the shortest decimal that reads back as the same `f32`, without an
/// exponent or a trailing `.0`: `0.3` renders as `0.3`, `1.0` as `1`,
/// `44100.0` as `44100`.
#[must_use]
pub fn number(value: f32) -> String {
    value.to_string()
}

/// Renders a string as a double-quoted Turtle string literal.
#[must_use]
pub fn turtle_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Renders a flag as the quoted `"true"`/`"false"` literal the vocabulary
/// uses for `vamp:fixed_bin_count` and `vamp:is_quantized`.
#[must_use]
pub fn flag(value: bool) -> &'static str {
    if value {
        "\"true\""
    } else {
        "\"false\""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_use_shortest_decimal() {
        assert_eq!(number(0.0), "0");
        assert_eq!(number(1.0), "1");
        assert_eq!(number(0.3), "0.3");
        assert_eq!(number(-0.5), "-0.5");
        assert_eq!(number(44100.0), "44100");
        assert_eq!(number(1e6), "1000000");
    }

    #[test]
    fn plain_strings_are_only_quoted() {
        assert_eq!(turtle_string("Pitch Tracker"), "\"Pitch Tracker\"");
        assert_eq!(turtle_string(""), "\"\"");
    }

    #[test]
    fn special_characters_are_escaped() {
        assert_eq!(turtle_string("a \"b\""), "\"a \\\"b\\\"\"");
        assert_eq!(turtle_string("C:\\x"), "\"C:\\\\x\"");
        assert_eq!(turtle_string("one\ntwo\r"), "\"one\\ntwo\\r\"");
    }

    #[test]
    fn flags() {
        assert_eq!(flag(true), "\"true\"");
        assert_eq!(flag(false), "\"false\"");
    }
}
