//! Document Syntax
//!
//! This module documents the document format as read by [`crate::Parser`] and
//! written by [`crate::Emitter`]. It contains no code.
//!
//! # Overview
//!
//! A document is a sequence of lines. Structure comes only from indentation:
//! there are no braces, brackets or flow collections. The root of every
//! document is a mapping.
//!
//! # Lines
//!
//! Each line is one of:
//!
//! | Line | Example | Meaning |
//! |------|---------|---------|
//! | Blank | ` ` | ignored |
//! | Comment | `# note` | ignored |
//! | Key with value | `port: 8080` | mapping entry with a scalar |
//! | Key without value | `server:` | opens a nested block |
//! | Key with marker | `text: \|` or `text: >` | opens a block scalar |
//! | Item | `- 80` | sequence element |
//!
//! **Rules**:
//! - Indentation is counted in spaces. A line that starts with a tab is an
//!   error that reports the line number.
//! - Keys are made of ASCII letters, digits, `_`, `-` and `.`. The line is split
//!   at the first colon, so values may contain colons.
//! - A `#` starts a comment unless it sits between a matched pair of quotes.
//! - If a key appears twice in one mapping, the last value wins.
//!
//! ```rust
//! use serde_confyaml::{from_str, Value};
//!
//! let doc = from_str("url: http://localhost:80/ # dev\nurl: http://example.com/\n").unwrap();
//! assert_eq!(doc.get("url"), Some(&Value::from("http://example.com/")));
//! ```
//!
//! # Nesting
//!
//! A key without a value opens a block. Every following line that is blank, a
//! comment, or indented deeper than the key belongs to that block; the first
//! content line at the key's indent or shallower closes it. An empty block
//! yields `~` (null).
//!
//! ```rust
//! use serde_confyaml::{from_str, yaml};
//!
//! let text = "\
//! database:
//!   primary:
//!     host: db1
//!
//! # replicas come later
//!   pool: 10
//! cache:
//! ";
//! let doc = from_str(text).unwrap();
//! assert_eq!(
//!     doc,
//!     yaml!({ "database": { "primary": { "host": "db1" }, "pool": 10 }, "cache": null })
//! );
//! ```
//!
//! # Sequences
//!
//! Items start with `- `. An item of the form `- key: value` is a one-entry
//! mapping. A block holds either items or keys, never both.
//!
//! ```rust
//! use serde_confyaml::{from_str, yaml, Error};
//!
//! let doc = from_str("users:\n  - name: ada\n  - guest\n").unwrap();
//! assert_eq!(doc, yaml!({ "users": [{ "name": "ada" }, "guest"] }));
//!
//! let err = from_str("users:\n  - ada\n  admin: true\n").unwrap_err();
//! assert!(matches!(err, Error::MixedBlock { line: 3 }));
//! ```
//!
//! # Scalars
//!
//! | Text | Value |
//! |------|-------|
//! | empty, `~`, `null` | `Null` |
//! | `true`, `yes`, `on` / `false`, `no`, `off` | `Bool`, only with boolean evaluation on; strings otherwise |
//! | `42`, `-7` | `Int` |
//! | `3.14`, `-0.5` | `Float` |
//! | `'text'`, `"text"` | the text between the quotes |
//! | anything else | the text itself |
//!
//! Numbers have no exponent, no leading `+` and no bare leading or trailing `.`.
//! A quoted value must end with the quote it starts with.
//!
//! ```rust
//! use serde_confyaml::{from_str, from_str_with_options, Options, Value};
//!
//! let doc = from_str("a: 007\nb: '007'\nc: yes\n").unwrap();
//! assert_eq!(doc.get("a"), Some(&Value::Int(7)));
//! assert_eq!(doc.get("b"), Some(&Value::from("007")));
//! assert_eq!(doc.get("c"), Some(&Value::from("yes")));
//!
//! let options = Options::new().with_evaluate_booleans(true);
//! let doc = from_str_with_options("c: yes\n", &options).unwrap();
//! assert_eq!(doc.get("c"), Some(&Value::Bool(true)));
//! ```
//!
//! # Block Scalars
//!
//! `|` keeps line breaks, joining lines with the configured separator. Blank
//! lines inside the block are kept; trailing ones are dropped. Indentation
//! deeper than the first content line is kept.
//!
//! `>` folds lines into one, joining the trimmed non-blank lines with a space.
//!
//! Block content is taken verbatim: `#` and `key:` inside a block are text.
//!
//! ```rust
//! use serde_confyaml::{from_str, Value};
//!
//! let text = "\
//! script: |
//!   echo start # verbatim
//!     indented
//! summary: >
//!   one
//!   two
//! ";
//! let doc = from_str(text).unwrap();
//! assert_eq!(
//!     doc.get("script"),
//!     Some(&Value::from("echo start # verbatim\n  indented"))
//! );
//! assert_eq!(doc.get("summary"), Some(&Value::from("one two")));
//! ```
//!
//! # Imports
//!
//! A block under the key `imports` lists other documents. Paths are relative to
//! the importing document. Imported documents are merged in order, later ones
//! over earlier ones, and the importing document's own keys over all of them.
//! Nested mappings merge key by key; everything else is replaced. An import
//! chain that leads back to a document already being parsed is an error.
//!
//! ```text
//! # app.yaml
//! imports:
//!   - base.yaml
//!   - local.yaml
//! name: app
//! ```
//!
//! # Compiled Output
//!
//! Compiled documents start with two comment lines naming this crate, then a
//! blank line, then the body. Scalar entries come one per line; a blank line
//! separates a run of scalars from a nested block. Strings are quoted when they
//! would otherwise read back as something else, multi-line strings become `|`
//! blocks, and long strings become `>` blocks wrapped at 75 columns.
//!
//! ```rust
//! use serde_confyaml::{to_string, yaml};
//!
//! let text = to_string(&yaml!({ "id": "42", "db": { "port": 5432 } })).unwrap();
//! let body: Vec<&str> = text.lines().skip(3).collect();
//! assert_eq!(body, vec!["id: \"42\"", "", "db:", "  port: 5432"]);
//! ```
//!
//! Sequences can hold scalars and one-entry mappings of a scalar. Empty
//! mappings and sequences cannot be written.
//!
//! The compiler refuses anything that would read back differently: keys
//! outside `[A-Za-z0-9_.-]+`, strings whose quotes cannot shield a `#`, and
//! multi-line strings that use another line break than the configured one,
//! begin or end with a blank line, indent their first line, or carry trailing
//! whitespace.
//!
//! ```rust
//! use serde_confyaml::{to_string, yaml, Error};
//!
//! let err = to_string(&yaml!({ "notes": "one\ntwo\n" })).unwrap_err();
//! assert!(matches!(err, Error::UnrepresentableString { .. }));
//! ```
