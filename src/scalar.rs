//! Scalar type coercion.
//!
//! Turns the trimmed text of a value into a typed [`Value`]. Checks run in a fixed
//! order and the first match wins:
//!
//! 1. empty → `Null`
//! 2. `~` or `null` (any case) → `Null`
//! 3. `true/false/on/off/yes/no` (any case) → `Bool`, only when boolean evaluation is on
//! 4. `-?[0-9]+` → `Int`
//! 5. `-?[0-9]+.[0-9]+` → `Float`
//! 6. text starting with `'` or `"` → the unquoted inner text; the same quote must close it
//! 7. anything else → the text itself

use crate::{Error, Result, Value};

const TRUTHY: [&str; 3] = ["true", "on", "yes"];
const FALSY: [&str; 3] = ["false", "off", "no"];

/// Coerces a trimmed value string.
///
/// `line` is only used for error reporting.
///
/// # Errors
///
/// Returns [`Error::UnmatchedQuote`] when a quoted value does not end with its
/// opening quote.
///
/// # Examples
///
/// ```rust
/// use serde_confyaml::scalar::coerce;
/// use serde_confyaml::Value;
///
/// assert_eq!(coerce("42", false, 1).unwrap(), Value::Int(42));
/// assert_eq!(coerce("-0.5", false, 1).unwrap(), Value::Float(-0.5));
/// assert_eq!(coerce("~", false, 1).unwrap(), Value::Null);
/// assert_eq!(coerce("yes", false, 1).unwrap(), Value::from("yes"));
/// assert_eq!(coerce("yes", true, 1).unwrap(), Value::Bool(true));
/// assert_eq!(coerce("'007'", false, 1).unwrap(), Value::from("007"));
/// assert!(coerce("'open", false, 1).is_err());
/// ```
pub fn coerce(text: &str, evaluate_booleans: bool, line: usize) -> Result<Value> {
    if text.is_empty() {
        return Ok(Value::Null);
    }

    let lower = text.to_ascii_lowercase();
    if lower == "~" || lower == "null" {
        return Ok(Value::Null);
    }

    if evaluate_booleans {
        if TRUTHY.contains(&lower.as_str()) {
            return Ok(Value::Bool(true));
        }
        if FALSY.contains(&lower.as_str()) {
            return Ok(Value::Bool(false));
        }
    }

    if is_integer(text) {
        // Out-of-range digit runs stay strings rather than wrapping
        if let Ok(i) = text.parse::<i64>() {
            return Ok(Value::Int(i));
        }
        return Ok(Value::String(text.to_string()));
    }

    if is_float(text) {
        if let Ok(f) = text.parse::<f64>() {
            return Ok(Value::Float(f));
        }
    }

    if let Some(quote) = text.chars().next().filter(|c| *c == '\'' || *c == '"') {
        if text.len() < 2 || !text.ends_with(quote) {
            return Err(Error::UnmatchedQuote { line });
        }
        return Ok(Value::String(text[1..text.len() - 1].to_string()));
    }

    Ok(Value::String(text.to_string()))
}

/// Returns `true` if the word is one of the boolean literals, in any case.
pub(crate) fn is_boolean_word(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    TRUTHY.contains(&lower.as_str()) || FALSY.contains(&lower.as_str())
}

/// `-?[0-9]+`
pub(crate) fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// `-?[0-9]+\.[0-9]+`
pub(crate) fn is_float(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    match unsigned.split_once('.') {
        Some((whole, fraction)) => is_digits(whole) && is_digits(fraction),
        None => false,
    }
}

#[inline]
fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_forms() {
        for text in ["", "~", "null", "NULL", "Null"] {
            assert_eq!(coerce(text, false, 1).unwrap(), Value::Null, "{text:?}");
        }
    }

    #[test]
    fn test_boolean_words() {
        for (text, expected) in [
            ("true", true),
            ("On", true),
            ("YES", true),
            ("false", false),
            ("off", false),
            ("No", false),
        ] {
            assert_eq!(coerce(text, true, 1).unwrap(), Value::Bool(expected));
            assert_eq!(coerce(text, false, 1).unwrap(), Value::from(text));
        }
    }

    #[test]
    fn test_numbers() {
        assert_eq!(coerce("0", false, 1).unwrap(), Value::Int(0));
        assert_eq!(coerce("-12", false, 1).unwrap(), Value::Int(-12));
        assert_eq!(coerce("3.25", false, 1).unwrap(), Value::Float(3.25));
        assert_eq!(coerce("-0.5", false, 1).unwrap(), Value::Float(-0.5));

        // Not numbers under these rules
        assert_eq!(coerce("1e5", false, 1).unwrap(), Value::from("1e5"));
        assert_eq!(coerce(".5", false, 1).unwrap(), Value::from(".5"));
        assert_eq!(coerce("5.", false, 1).unwrap(), Value::from("5."));
        assert_eq!(coerce("+5", false, 1).unwrap(), Value::from("+5"));
        assert_eq!(coerce("1.2.3", false, 1).unwrap(), Value::from("1.2.3"));
        assert_eq!(coerce("-", false, 1).unwrap(), Value::from("-"));
    }

    #[test]
    fn test_integer_overflow_stays_string() {
        let text = "99999999999999999999";
        assert_eq!(coerce(text, false, 1).unwrap(), Value::from(text));
    }

    #[test]
    fn test_quoted_strings() {
        assert_eq!(coerce("\"42\"", false, 1).unwrap(), Value::from("42"));
        assert_eq!(coerce("'true'", true, 1).unwrap(), Value::from("true"));
        assert_eq!(coerce("''", false, 1).unwrap(), Value::from(""));
        assert_eq!(
            coerce("\"it's \"quoted\"\"", false, 1).unwrap(),
            Value::from("it's \"quoted\"")
        );
    }

    #[test]
    fn test_unmatched_quotes() {
        for text in ["'abc", "\"abc'", "'", "\"abc"] {
            match coerce(text, false, 12) {
                Err(Error::UnmatchedQuote { line }) => assert_eq!(line, 12),
                other => panic!("expected unmatched quote for {text:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_predicates() {
        assert!(is_integer("-10"));
        assert!(!is_integer("1.0"));
        assert!(is_float("10.01"));
        assert!(!is_float("10"));
        assert!(is_boolean_word("Off"));
        assert!(!is_boolean_word("y"));
    }
}
