//! Line classification.
//!
//! Every physical line of a document is turned into a [`Line`] before any
//! grouping happens. Classification is purely local to the line: it extracts the
//! indent width, strips comments, and splits an optional `key:` prefix from the
//! value. Typing of the value happens later, in [`crate::scalar`].
//!
//! Classification order:
//! 1. A leading tab is rejected.
//! 2. Empty or whitespace-only lines are blank.
//! 3. Lines whose first non-space character is `#` are full-line comments.
//! 4. A trailing comment (first `#` outside a matched quote pair) is cut off.
//! 5. `key:` followed by anything splits into key and value at the first colon.
//! 6. Anything else is a bare value.

use crate::{Error, Result};

/// What a classified line contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Content,
}

/// One classified physical line.
///
/// `key` and `value` borrow from `raw`. An empty value is normalized to `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line<'a> {
    pub raw: &'a str,
    /// 1-based line number in the source document.
    pub number: usize,
    /// Count of leading spaces.
    pub indent: usize,
    pub kind: LineKind,
    pub key: Option<&'a str>,
    pub value: Option<&'a str>,
}

impl<'a> Line<'a> {
    /// Classifies one raw line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TabIndentation`] if the line starts with a tab.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_confyaml::line::{Line, LineKind};
    ///
    /// let line = Line::classify("  port: 8080 # default", 3).unwrap();
    /// assert_eq!(line.indent, 2);
    /// assert_eq!(line.key, Some("port"));
    /// assert_eq!(line.value, Some("8080"));
    ///
    /// let item = Line::classify("  - first", 4).unwrap();
    /// assert_eq!(item.key, None);
    /// assert_eq!(item.value, Some("- first"));
    ///
    /// assert_eq!(Line::classify("   ", 5).unwrap().kind, LineKind::Blank);
    /// assert!(Line::classify("\tkey: v", 6).is_err());
    /// ```
    pub fn classify(raw: &'a str, number: usize) -> Result<Self> {
        if raw.starts_with('\t') {
            return Err(Error::TabIndentation { line: number });
        }

        let indent = raw.len() - raw.trim_start_matches(' ').len();
        let mut line = Line {
            raw,
            number,
            indent,
            kind: LineKind::Blank,
            key: None,
            value: None,
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(line);
        }
        if trimmed.starts_with('#') {
            line.kind = LineKind::Comment;
            return Ok(line);
        }

        line.kind = LineKind::Content;
        let content = strip_comment(trimmed).trim();
        match split_key(content) {
            Some((key, value)) => {
                line.key = Some(key);
                line.value = non_empty(value.trim());
            }
            None => line.value = non_empty(content),
        }

        Ok(line)
    }

    #[inline]
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.kind == LineKind::Blank
    }

    #[inline]
    #[must_use]
    pub fn is_comment(&self) -> bool {
        self.kind == LineKind::Comment
    }

    /// Blank and comment lines carry no structure and never close an open block.
    #[inline]
    #[must_use]
    pub fn is_filler(&self) -> bool {
        self.kind != LineKind::Content
    }

    /// The raw line with the first `base` columns of indentation removed and
    /// trailing whitespace trimmed.
    ///
    /// Used for block scalar content, which is taken verbatim.
    #[must_use]
    pub fn text_from(&self, base: usize) -> &'a str {
        let cut = base.min(self.indent);
        self.raw[cut..].trim_end()
    }
}

/// Splits a document into physical lines, accepting both `\n` and `\r\n`.
pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Cuts `text` at the first `#` that is not enclosed in a matched quote pair.
///
/// A quote character only opens a quoted region if the same character appears
/// again later on the line.
pub(crate) fn strip_comment(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'#' => return &text[..i],
            quote @ (b'"' | b'\'') => {
                if let Some(offset) = text[i + 1..].find(char::from(quote)) {
                    i += offset + 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    text
}

/// Splits `key: value` at the first colon when the prefix is a word or dotted key.
pub(crate) fn split_key(content: &str) -> Option<(&str, &str)> {
    let colon = content.find(':')?;
    let key = &content[..colon];
    if !is_plain_key(key) {
        return None;
    }
    Some((key, &content[colon + 1..]))
}

/// Returns `true` if `key` can stand before the colon of a `key: value` line.
pub(crate) fn is_plain_key(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(is_key_byte)
}

#[inline]
fn is_key_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.')
}

#[inline]
fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(raw: &str) -> Line<'_> {
        Line::classify(raw, 1).unwrap()
    }

    #[test]
    fn test_blank_and_comment_lines() {
        let blank = classify("");
        assert!(blank.is_blank());
        assert_eq!((blank.key, blank.value), (None, None));

        let spaces = classify("    ");
        assert!(spaces.is_blank());
        assert_eq!(spaces.indent, 4);

        let comment = classify("   # note: not a key");
        assert!(comment.is_comment());
        assert_eq!(comment.indent, 3);
        assert_eq!((comment.key, comment.value), (None, None));
    }

    #[test]
    fn test_key_without_value() {
        let line = classify("database:");
        assert_eq!(line.key, Some("database"));
        assert_eq!(line.value, None);
        assert_eq!(line.kind, LineKind::Content);
    }

    #[test]
    fn test_dotted_and_dashed_keys() {
        assert_eq!(classify("app.name: x").key, Some("app.name"));
        assert_eq!(classify("max-size: 10").key, Some("max-size"));
        assert_eq!(classify("some key: x").key, None);
        assert_eq!(classify("some key: x").value, Some("some key: x"));
    }

    #[test]
    fn test_value_split_at_first_colon() {
        let line = classify("url: http://example.com:8080/");
        assert_eq!(line.key, Some("url"));
        assert_eq!(line.value, Some("http://example.com:8080/"));
    }

    #[test]
    fn test_inline_comment_stripping() {
        assert_eq!(classify("a: 1 # one").value, Some("1"));
        assert_eq!(classify("a: '#hash' # c").value, Some("'#hash'"));
        assert_eq!(classify("a: \"x # y\"").value, Some("\"x # y\""));
        assert_eq!(classify("a: # only comment").value, None);
        // An unpaired apostrophe does not hide the comment
        assert_eq!(classify("a: it's #1").value, Some("it's"));
    }

    #[test]
    fn test_block_markers_are_plain_values() {
        assert_eq!(classify("text: |").value, Some("|"));
        assert_eq!(classify("text: >").value, Some(">"));
    }

    #[test]
    fn test_tab_indentation() {
        match Line::classify("\tkey: value", 7) {
            Err(Error::TabIndentation { line }) => assert_eq!(line, 7),
            other => panic!("expected tab error, got {other:?}"),
        }
        // Tabs after the first column are only whitespace
        assert!(Line::classify("key:\tvalue", 1).is_ok());
    }

    #[test]
    fn test_text_from() {
        let line = classify("      indented more  ");
        assert_eq!(line.text_from(4), "  indented more");
        assert_eq!(line.text_from(10), "indented more");
    }

    #[test]
    fn test_split_lines_accepts_crlf() {
        let lines: Vec<_> = split_lines("a: 1\r\nb: 2\nc: 3").collect();
        assert_eq!(lines, vec!["a: 1", "b: 2", "c: 3"]);
    }
}
