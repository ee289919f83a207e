//! Indentation-driven line grouping.
//!
//! A [`Buffer`] is a contiguous run of classified lines that share one nesting
//! context. The parser walks a buffer line by line; a key without an inline value
//! (or with a `|`/`>` block marker) opens a child buffer, and every following
//! line that is blank, a comment, or indented deeper than the key line is fed
//! into that child. The first content line at the key's indent or shallower
//! closes the child, which is then assembled recursively.
//!
//! Buffers are owned frames: the parent hands the child's lines down by value and
//! receives the assembled value back, so no buffer outlives one parse call.

use crate::line::Line;

/// Block scalar style introduced by a `>` or `|` marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockStyle {
    /// `>`: lines are joined with a single space.
    Fold,
    /// `|`: lines are joined with the configured line separator.
    Literal,
}

impl BlockStyle {
    /// Recognizes a block marker value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_confyaml::buffer::BlockStyle;
    ///
    /// assert_eq!(BlockStyle::from_marker(">"), Some(BlockStyle::Fold));
    /// assert_eq!(BlockStyle::from_marker("|"), Some(BlockStyle::Literal));
    /// assert_eq!(BlockStyle::from_marker("|-"), None);
    /// ```
    #[must_use]
    pub fn from_marker(value: &str) -> Option<Self> {
        match value {
            ">" => Some(BlockStyle::Fold),
            "|" => Some(BlockStyle::Literal),
            _ => None,
        }
    }

    #[must_use]
    pub const fn marker(&self) -> &'static str {
        match self {
            BlockStyle::Fold => ">",
            BlockStyle::Literal => "|",
        }
    }
}

/// A group of lines sharing one nesting context.
#[derive(Clone, Debug)]
pub struct Buffer<'a> {
    parent: Option<&'a str>,
    style: Option<BlockStyle>,
    indent: usize,
    origin: usize,
    lines: Vec<Line<'a>>,
}

impl<'a> Buffer<'a> {
    /// The document root: no parent key, no block style.
    #[must_use]
    pub fn root(lines: Vec<Line<'a>>) -> Self {
        Buffer {
            parent: None,
            style: None,
            indent: 0,
            origin: 0,
            lines,
        }
    }

    /// A nested buffer opened by `opener`, which must carry a key.
    #[must_use]
    pub fn child(opener: &Line<'a>, style: Option<BlockStyle>) -> Self {
        Buffer {
            parent: opener.key,
            style,
            indent: opener.indent,
            origin: opener.number,
            lines: Vec::new(),
        }
    }

    /// Returns `true` if `line` belongs to this buffer rather than closing it.
    ///
    /// Blank and comment lines always belong to an open child; content lines
    /// belong only when indented deeper than the line that opened the buffer.
    #[inline]
    #[must_use]
    pub fn accepts(&self, line: &Line<'a>) -> bool {
        line.is_filler() || line.indent > self.indent
    }

    pub fn feed(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    /// The key that opened this buffer; `None` only at the document root.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<&'a str> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn style(&self) -> Option<BlockStyle> {
        self.style
    }

    /// Indent of the opening key line.
    #[inline]
    #[must_use]
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Line number of the opening key line (0 for the root).
    #[inline]
    #[must_use]
    pub fn origin(&self) -> usize {
        self.origin
    }

    #[must_use]
    pub fn lines(&self) -> &[Line<'a>] {
        &self.lines
    }

    #[must_use]
    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(raw: &str, number: usize) -> Line<'_> {
        Line::classify(raw, number).unwrap()
    }

    #[test]
    fn test_child_takes_opener_context() {
        let opener = line("  server:", 4);
        let child = Buffer::child(&opener, None);
        assert_eq!(child.parent(), Some("server"));
        assert_eq!(child.indent(), 2);
        assert_eq!(child.origin(), 4);
        assert_eq!(child.style(), None);
        assert!(child.lines().is_empty());
    }

    #[test]
    fn test_accepts_deeper_and_filler_lines() {
        let opener = line("  text: |", 1);
        let child = Buffer::child(&opener, Some(BlockStyle::Literal));

        assert!(child.accepts(&line("    content", 2)));
        assert!(child.accepts(&line("", 3)));
        assert!(child.accepts(&line("# shallow comment", 4)));
        assert!(!child.accepts(&line("  sibling: 1", 5)));
        assert!(!child.accepts(&line("top: 1", 6)));
    }

    #[test]
    fn test_feed_keeps_order() {
        let opener = line("list:", 1);
        let mut child = Buffer::child(&opener, None);
        child.feed(line("  - a", 2));
        child.feed(line("  - b", 3));

        let values: Vec<_> = child.into_lines().iter().map(|l| l.value).collect();
        assert_eq!(values, vec![Some("- a"), Some("- b")]);
    }

    #[test]
    fn test_root_has_no_context() {
        let root = Buffer::root(vec![line("a: 1", 1)]);
        assert_eq!(root.parent(), None);
        assert_eq!(root.style(), None);
        assert_eq!(root.lines().len(), 1);
    }
}
