//! # serde_confyaml
//!
//! A reader and writer for a small, indentation-based configuration format that
//! looks like YAML.
//!
//! ## What is supported?
//!
//! The format is deliberately narrow: nested mappings, sequences of scalars,
//! typed scalars, `|` literal and `>` folded blocks, comments, and an `imports`
//! key that merges other documents into the current one. There are no anchors,
//! tags, flow collections or multi-document streams. See [`syntax`] for the
//! full description.
//!
//! ## Key Features
//!
//! - **Typed scalars**: integers, floats, null, quoted strings, and optional
//!   boolean words (`yes`/`no`/`on`/`off`/`true`/`false`)
//! - **Imports**: documents can pull in other `.yaml`/`.yml` files, with the
//!   importing document's own keys taking precedence
//! - **Serde Compatible**: any `T: Serialize` can be compiled to document text
//! - **Precise errors**: parse errors carry line numbers, import errors carry the
//!   chain of files that led to them
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_confyaml = "0.1"
//! ```
//!
//! ### Parsing
//!
//! ```rust
//! use serde_confyaml::{from_str, Value};
//!
//! let text = "\
//! app:
//!   name: demo
//!   port: 8080
//! hosts:
//!   - alpha
//!   - beta
//! ";
//!
//! let doc = from_str(text).unwrap();
//! let app = doc.get("app").unwrap();
//! assert_eq!(app.get("port"), Some(&Value::Int(8080)));
//! assert_eq!(doc.get("hosts").and_then(Value::as_sequence).map(Vec::len), Some(2));
//! ```
//!
//! ### Compiling
//!
//! ```rust
//! use serde::Serialize;
//! use serde_confyaml::{from_str, to_string, Value};
//!
//! #[derive(Serialize)]
//! struct Config {
//!     name: String,
//!     workers: u32,
//!     tags: Vec<String>,
//! }
//!
//! let config = Config {
//!     name: "demo".to_string(),
//!     workers: 4,
//!     tags: vec!["a".to_string(), "b".to_string()],
//! };
//!
//! let text = to_string(&config).unwrap();
//! assert!(text.starts_with("# This YAML source has been compiled using serde_confyaml"));
//!
//! let doc = from_str(&text).unwrap();
//! assert_eq!(doc.get("workers"), Some(&Value::Int(4)));
//! ```
//!
//! ### Dynamic Values with yaml! Macro
//!
//! ```rust
//! use serde_confyaml::{to_string, yaml};
//!
//! let value = yaml!({
//!     "name": "demo",
//!     "limits": { "cpu": 2, "memory": 512 }
//! });
//!
//! let text = to_string(&value).unwrap();
//! assert!(text.contains("limits:\n  cpu: 2\n  memory: 512\n"));
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: `debug` for documents and imports,
//! `trace` for block boundaries. No logger is installed.

pub mod buffer;
pub mod error;
pub mod line;
pub mod loader;
pub mod macros;
pub mod map;
pub mod merge;
pub mod options;
pub mod parser;
pub mod scalar;
pub mod ser;
pub mod syntax;
pub mod value;

pub use error::{Error, Result};
pub use loader::{FsLoader, SourceLoader};
pub use map::Mapping;
pub use options::{KeyCase, LineSeparator, Options};
pub use parser::Parser;
pub use ser::{Emitter, ValueSerializer};
pub use value::Value;

use serde::Serialize;
use std::io;
use std::path::Path;

/// Parse document text with default options.
///
/// # Examples
///
/// ```rust
/// use serde_confyaml::{from_str, Value};
///
/// let doc = from_str("name: demo\nretries: 3\n").unwrap();
/// assert_eq!(doc.get("retries"), Some(&Value::Int(3)));
/// ```
///
/// # Errors
///
/// Returns an error if the text is malformed or its root is not a non-empty
/// mapping. Relative imports resolve against the working directory.
pub fn from_str(s: &str) -> Result<Value> {
    from_str_with_options(s, &Options::default())
}

/// Parse document text with custom options.
///
/// # Errors
///
/// Returns an error if the options are invalid or the text cannot be parsed.
pub fn from_str_with_options(s: &str, options: &Options) -> Result<Value> {
    Parser::new(options.clone()).parse(s)
}

/// Parse document text from bytes.
///
/// # Examples
///
/// ```rust
/// use serde_confyaml::from_slice;
///
/// let doc = from_slice(b"x: 1\ny: 2\n").unwrap();
/// assert!(doc.is_mapping());
/// assert!(from_slice(&[0xff, 0xfe]).is_err());
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or cannot be parsed.
pub fn from_slice(v: &[u8]) -> Result<Value> {
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

/// Parse document text from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use serde_confyaml::from_reader;
/// use std::io::Cursor;
///
/// let doc = from_reader(Cursor::new("x: 1\n")).unwrap();
/// assert!(doc.get("x").is_some());
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the text cannot be parsed.
pub fn from_reader<R>(mut reader: R) -> Result<Value>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Parse the document at `path`, resolving imports relative to its directory.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] for a path that does not name a `.yaml` or
/// `.yml` file, [`Error::Io`] if it cannot be read, or any parse error.
pub fn from_path<P>(path: P) -> Result<Value>
where
    P: AsRef<Path>,
{
    from_path_with_options(path, &Options::default())
}

/// Parse the document at `path` with custom options.
///
/// # Errors
///
/// Returns an error if the options are invalid, or for the same reasons as
/// [`from_path`].
pub fn from_path_with_options<P>(path: P, options: &Options) -> Result<Value>
where
    P: AsRef<Path>,
{
    options.validate()?;
    Parser::new(options.clone()).parse_path(path)
}

/// Compile any `T: Serialize` into document text.
///
/// # Examples
///
/// ```rust
/// use serde_confyaml::to_string;
/// use std::collections::BTreeMap;
///
/// let mut map = BTreeMap::new();
/// map.insert("answer", 42);
/// let text = to_string(&map).unwrap();
/// assert!(text.ends_with("\n\nanswer: 42\n"));
/// ```
///
/// # Errors
///
/// Returns an error if the value does not serialize to a non-empty mapping,
/// contains a structure the format cannot express, or holds a key or string
/// that would not read back unchanged.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &Options::default())
}

/// Compile any `T: Serialize` into document text with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_confyaml::{to_string_with_options, yaml, LineSeparator, Options};
///
/// let options = Options::new().with_separator(LineSeparator::CrLf).with_indent(4);
/// let text = to_string_with_options(&yaml!({ "a": { "b": 1 } }), &options).unwrap();
/// assert!(text.ends_with("a:\r\n    b: 1\r\n"));
/// ```
///
/// # Errors
///
/// Returns an error if the options are invalid or the value cannot be compiled.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &Options) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Emitter::new(options.clone()).emit(&to_value(value)?)
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_confyaml::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_mapping());
/// assert_eq!(value.get("y"), Some(&Value::Int(2)));
/// ```
///
/// # Errors
///
/// Returns [`Error::NonStringKey`] if a map key does not serialize to a string.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    ser::to_value(value)
}

/// Compile any `T: Serialize` into document text and write it to `writer`.
///
/// # Examples
///
/// ```rust
/// use serde_confyaml::{to_writer, yaml};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &yaml!({ "a": 1 })).unwrap();
/// assert!(String::from_utf8(buffer).unwrap().ends_with("a: 1\n"));
/// ```
///
/// # Errors
///
/// Returns an error if compiling fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, &Options::default())
}

/// Compile any `T: Serialize` into document text with custom options and write
/// it to `writer`.
///
/// # Errors
///
/// Returns an error if compiling fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: &Options) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
