//! Configuration options for parsing and compiling.
//!
//! This module provides types to customize both directions of the transform:
//!
//! - [`Options`]: Main configuration struct
//! - [`LineSeparator`]: Line separator used to split input and join output (`\n` or `\r\n`)
//! - [`KeyCase`]: Key case conversion flag (reserved, see below)
//!
//! ## Examples
//!
//! ```rust
//! use serde_confyaml::{from_str_with_options, LineSeparator, Options, Value};
//!
//! let options = Options::new()
//!     .with_separator(LineSeparator::CrLf)
//!     .with_evaluate_booleans(true);
//!
//! let doc = from_str_with_options("debug: yes\r\nport: 8080\r\n", &options).unwrap();
//! assert_eq!(doc.get("debug"), Some(&Value::Bool(true)));
//! ```

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Smallest accepted indentation width for compiled output.
pub const MIN_INDENT: usize = 2;
/// Largest accepted indentation width for compiled output.
pub const MAX_INDENT: usize = 8;

/// Line separator for input splitting, literal block joining and compiled output.
///
/// # Examples
///
/// ```rust
/// use serde_confyaml::LineSeparator;
///
/// assert_eq!(LineSeparator::Lf.as_str(), "\n");
/// assert_eq!(LineSeparator::CrLf.as_str(), "\r\n");
/// assert!(LineSeparator::try_from("\r").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineSeparator {
    #[default]
    Lf,
    CrLf,
}

impl LineSeparator {
    /// Returns the string representation of this separator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineSeparator::Lf => "\n",
            LineSeparator::CrLf => "\r\n",
        }
    }
}

impl fmt::Display for LineSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineSeparator::Lf => "\\n",
            LineSeparator::CrLf => "\\r\\n",
        })
    }
}

impl TryFrom<&str> for LineSeparator {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        match value {
            "\n" => Ok(LineSeparator::Lf),
            "\r\n" => Ok(LineSeparator::CrLf),
            other => Err(Error::invalid_configuration(format!(
                "invalid line separator {:?}, expected \"\\n\" or \"\\r\\n\"",
                other
            ))),
        }
    }
}

impl FromStr for LineSeparator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        LineSeparator::try_from(s)
    }
}

/// Key case conversion applied to parsed keys.
///
/// Accepted and stored for API compatibility but currently a no-op: keys are
/// always returned exactly as written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum KeyCase {
    #[default]
    Preserve,
    CamelCase,
    SnakeCase,
}

/// Configuration for parsing and compiling.
///
/// # Examples
///
/// ```rust
/// use serde_confyaml::Options;
///
/// // Defaults: "\n", 2-space indent, booleans kept as strings
/// let options = Options::new();
/// assert_eq!(options.indent, 2);
/// assert!(!options.evaluate_booleans);
///
/// // Out-of-range indents are rejected when the options are used
/// assert!(Options::new().with_indent(12).validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    pub separator: LineSeparator,
    pub indent: usize,
    pub evaluate_booleans: bool,
    pub key_case: KeyCase,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            separator: LineSeparator::default(),
            indent: MIN_INDENT,
            evaluate_booleans: false,
            key_case: KeyCase::default(),
        }
    }
}

impl Options {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the line separator.
    #[must_use]
    pub fn with_separator(mut self, separator: LineSeparator) -> Self {
        self.separator = separator;
        self
    }

    /// Sets the indentation width (spaces per nesting level) of compiled output.
    ///
    /// Must be within `2..=8`; checked by [`Options::validate`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_confyaml::Options;
    ///
    /// let options = Options::new().with_indent(4);
    /// assert_eq!(options.indent, 4);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Turns `true/false/on/off/yes/no` scalars into booleans.
    #[must_use]
    pub fn with_evaluate_booleans(mut self, evaluate: bool) -> Self {
        self.evaluate_booleans = evaluate;
        self
    }

    /// Sets the key case flag. Reserved; has no effect on parsing.
    #[must_use]
    pub fn with_key_case(mut self, key_case: KeyCase) -> Self {
        self.key_case = key_case;
        self
    }

    /// Checks that every option holds an accepted value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when the indent is outside `2..=8`.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_INDENT..=MAX_INDENT).contains(&self.indent) {
            return Err(Error::invalid_configuration(format!(
                "\"{}\" is an invalid indent value, expected {}..={}",
                self.indent, MIN_INDENT, MAX_INDENT
            )));
        }
        Ok(())
    }
}
