//! Error types for parsing and compiling documents.
//!
//! Every failure is terminal for the call that raised it: the parser never
//! returns a partial tree and the compiler never returns partial text.
//!
//! ## Error Categories
//!
//! - **Line errors**: tab indentation, unmatched quotes, stray scalars. These carry
//!   the 1-based line number of the offending line.
//! - **Import errors**: bad `imports` entries, cycles, and failures inside an imported
//!   document. The latter wrap the inner error so the whole chain of files is reported.
//! - **Compile errors**: non-string or malformed keys, strings with no faithful
//!   written form, and subtrees that produce no output. These name the key path
//!   they were raised for.
//! - **Configuration and I/O errors**: invalid options, invalid paths, unreadable files.
//!
//! ## Examples
//!
//! ```rust
//! use serde_confyaml::{from_str, Error};
//!
//! let err = from_str("name: 'unterminated").unwrap_err();
//! assert!(matches!(err, Error::UnmatchedQuote { line: 1 }));
//! assert_eq!(err.line(), Some(1));
//! ```

use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Represents all possible errors raised while parsing or compiling.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A line starts with a tab character.
    #[error("Line {line} cannot be indented by tabs")]
    TabIndentation { line: usize },

    /// A quoted scalar does not end with its opening quote.
    #[error("Unmatched string start and end quote at line {line}")]
    UnmatchedQuote { line: usize },

    /// An `imports` sequence element is not a plain string.
    #[error("Import entry at line {line} must be a file path string")]
    InvalidImportEntry { line: usize },

    /// An imported document failed to parse.
    #[error("Failed to import \"{file}\" at line {line}: {source}")]
    ImportParseFailure {
        line: usize,
        file: String,
        #[source]
        source: Box<Error>,
    },

    /// An import chain leads back to a document that is already being parsed.
    #[error("Import of \"{file}\" at line {line} creates a cycle")]
    ImportCycle { line: usize, file: String },

    /// The document produced no mapping at its root.
    #[error("Corrupt document format: the top-level result is empty or not a mapping")]
    CorruptFormat,

    /// A bare value appeared outside a sequence or block scalar.
    #[error("Unexpected value without key at line {line}")]
    UnexpectedScalar { line: usize },

    /// Sequence items and mapping entries were mixed in one block.
    #[error("Cannot mix sequence items and mapping entries in one block (line {line})")]
    MixedBlock { line: usize },

    /// A mapping key did not serialize to a string.
    #[error("All mapping keys must be strings (at \"{path}\")")]
    NonStringKey { path: String },

    /// A subtree produced an empty body.
    #[error("Failed to compile YAML for key \"{key}\"")]
    CompileFailure { key: String },

    /// A sequence element is a structure that cannot be written as one item line.
    #[error("Sequence item at \"{path}\" must be a scalar or a one-entry mapping of a scalar")]
    NestedSequenceItem { path: String },

    /// A mapping key cannot stand before the colon of a `key: value` line.
    #[error("Key at \"{path}\" must use only letters, digits, '_', '-' and '.'")]
    InvalidKey { path: String },

    /// A string has no written form that reads back unchanged.
    #[error("String at \"{path}\" cannot be written so that it reads back unchanged")]
    UnrepresentableString { path: String },

    /// Invalid separator, indent width or other option.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A document path was rejected before reading.
    #[error("Invalid document path: {0}")]
    InvalidPath(String),

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Unsupported type for serialization
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Wraps an error raised while parsing an imported document.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_confyaml::Error;
    ///
    /// let inner = Error::TabIndentation { line: 3 };
    /// let err = Error::import_failure(7, "base.yaml", inner);
    /// assert!(err.to_string().contains("base.yaml"));
    /// assert!(err.to_string().contains("Line 3"));
    /// ```
    pub fn import_failure(line: usize, file: impl AsRef<Path>, source: Error) -> Self {
        Error::ImportParseFailure {
            line,
            file: file.as_ref().display().to_string(),
            source: Box::new(source),
        }
    }

    /// Creates a non-string key error for the given key path.
    pub fn non_string_key(path: &str) -> Self {
        Error::NonStringKey {
            path: path.to_string(),
        }
    }

    /// Creates an unrepresentable string error for the given key path.
    pub fn unrepresentable(path: &str) -> Self {
        Error::UnrepresentableString {
            path: path.to_string(),
        }
    }

    /// Creates an invalid configuration error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_confyaml::Error;
    ///
    /// let err = Error::invalid_configuration("indent must be between 2 and 8");
    /// assert!(err.to_string().contains("indent"));
    /// ```
    pub fn invalid_configuration<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidConfiguration(msg.to_string())
    }

    /// Creates an unsupported type error for values that cannot be represented.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the line number this error was raised at, if it carries one.
    ///
    /// Import failures report the line of the importing document.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::TabIndentation { line }
            | Error::UnmatchedQuote { line }
            | Error::InvalidImportEntry { line }
            | Error::ImportParseFailure { line, .. }
            | Error::ImportCycle { line, .. }
            | Error::UnexpectedScalar { line }
            | Error::MixedBlock { line } => Some(*line),
            _ => None,
        }
    }

    /// Prefixes the key path of path-carrying compile errors with `key`.
    ///
    /// Errors bubble up from the innermost value, so each enclosing level
    /// prepends its own key.
    pub(crate) fn within(self, key: &str) -> Self {
        match self {
            Error::NonStringKey { path } => Error::NonStringKey {
                path: join_path(key, &path),
            },
            Error::NestedSequenceItem { path } => Error::NestedSequenceItem {
                path: join_path(key, &path),
            },
            Error::InvalidKey { path } => Error::InvalidKey {
                path: join_path(key, &path),
            },
            Error::UnrepresentableString { path } => Error::UnrepresentableString {
                path: join_path(key, &path),
            },
            Error::CompileFailure { key: inner } => Error::CompileFailure {
                key: join_path(key, &inner),
            },
            other => other,
        }
    }
}

fn join_path(parent: &str, child: &str) -> String {
    match (parent.is_empty(), child.is_empty()) {
        (true, _) => child.to_string(),
        (_, true) => parent.to_string(),
        _ => format!("{}.{}", parent, child),
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_line_numbers() {
        assert_eq!(Error::TabIndentation { line: 4 }.line(), Some(4));
        assert_eq!(Error::CorruptFormat.line(), None);
        assert_eq!(
            Error::import_failure(2, "a.yaml", Error::CorruptFormat).line(),
            Some(2)
        );
    }

    #[test]
    fn test_import_failure_keeps_source_chain() {
        let inner = Error::import_failure(5, "b.yaml", Error::UnmatchedQuote { line: 9 });
        let outer = Error::import_failure(1, "a.yaml", inner);

        let message = outer.to_string();
        assert!(message.contains("a.yaml"));
        assert!(message.contains("b.yaml"));
        assert!(message.contains("line 9"));

        let source = outer.source().expect("wrapped error");
        assert!(source.to_string().contains("b.yaml"));
    }

    #[test]
    fn test_within_builds_dotted_path() {
        let err = Error::non_string_key("").within("inner").within("outer");
        match err {
            Error::NonStringKey { path } => assert_eq!(path, "outer.inner"),
            other => panic!("unexpected error: {other:?}"),
        }

        let empty = Error::CompileFailure { key: String::new() }
            .within("b")
            .within("a");
        match empty {
            Error::CompileFailure { key } => assert_eq!(key, "a.b"),
            other => panic!("unexpected error: {other:?}"),
        }

        let untouched = Error::CorruptFormat.within("key");
        assert!(matches!(untouched, Error::CorruptFormat));
    }
}
