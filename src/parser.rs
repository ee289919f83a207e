//! Document parsing.
//!
//! This module provides the [`Parser`] that turns document text into a [`Value`]
//! tree. There is no grammar engine: lines are classified one by one
//! ([`crate::line`]), grouped by indentation into owned [`Buffer`] frames, and
//! each frame is assembled recursively into a value.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde_confyaml::{from_str, Value};
//!
//! let doc = from_str("name: app\nports:\n  - 80\n  - 443\n").unwrap();
//! assert_eq!(doc.get("name"), Some(&Value::from("app")));
//! assert_eq!(
//!     doc.get("ports"),
//!     Some(&Value::Sequence(vec![Value::Int(80), Value::Int(443)]))
//! );
//! ```
//!
//! ## Imports
//!
//! A block whose key is `imports` lists other documents. Each entry is resolved
//! relative to the importing document's directory, parsed with the same options,
//! and deep-merged under the importing mapping: earlier imports first, later
//! imports over them, and the document's own keys over everything.
//!
//! ```rust
//! use serde_confyaml::loader::SourceLoader;
//! use serde_confyaml::{Options, Parser, Result, Value};
//! use std::path::Path;
//!
//! struct Fixed;
//!
//! impl SourceLoader for Fixed {
//!     fn load(&self, _path: &Path) -> Result<String> {
//!         Ok("x: 2\ny: 2\n".to_string())
//!     }
//! }
//!
//! let parser = Parser::new(Options::new()).with_loader(Fixed);
//! let doc = parser.parse("imports:\n  - base.yaml\nx: 1\n").unwrap();
//! assert_eq!(doc.get("x"), Some(&Value::Int(1)));
//! assert_eq!(doc.get("y"), Some(&Value::Int(2)));
//! ```

use crate::buffer::{BlockStyle, Buffer};
use crate::line::{self, Line};
use crate::loader::{FsLoader, SourceLoader};
use crate::merge::merge_imports;
use crate::scalar::coerce;
use crate::{Error, Mapping, Options, Result, Value};
use log::{debug, trace};
use std::path::{Path, PathBuf};

/// Key whose sequence lists documents to merge in.
pub const IMPORTS_KEY: &str = "imports";

/// The document parser.
///
/// Holds the options and the loader used for imports. A parser can be reused for
/// any number of documents.
pub struct Parser {
    options: Options,
    base_dir: Option<PathBuf>,
    source: Option<PathBuf>,
    loader: Box<dyn SourceLoader>,
}

impl Parser {
    #[must_use]
    pub fn new(options: Options) -> Self {
        Parser {
            options,
            base_dir: None,
            source: None,
            loader: Box::new(FsLoader),
        }
    }

    /// Directory that relative `imports` entries resolve against.
    ///
    /// Without one, entries resolve against the process working directory.
    #[must_use]
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Replaces the loader used to read imported documents.
    #[must_use]
    pub fn with_loader<L>(mut self, loader: L) -> Self
    where
        L: SourceLoader + 'static,
    {
        self.loader = Box::new(loader);
        self
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Parses document text.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid options, malformed lines, failed imports, or
    /// a document whose root is not a non-empty mapping.
    pub fn parse(&self, text: &str) -> Result<Value> {
        self.options.validate()?;
        let chain = self
            .source
            .iter()
            .map(|path| self.loader.identity(path))
            .collect();
        Document {
            parser: self,
            base_dir: self.base_dir.clone(),
            chain,
        }
        .parse(text)
    }

    /// Loads and parses the document at `path` through the configured loader.
    ///
    /// Relative imports resolve against the document's directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be loaded or parsed.
    pub fn parse_path(mut self, path: impl AsRef<Path>) -> Result<Value> {
        let path = path.as_ref();
        let text = self.loader.load(path)?;
        debug!("parsing {}", path.display());
        self.base_dir = path.parent().map(Path::to_path_buf);
        self.source = Some(path.to_path_buf());
        self.parse(&text)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new(Options::default())
    }
}

/// One document being parsed: where its imports resolve and which documents
/// are already open above it.
struct Document<'p> {
    parser: &'p Parser,
    base_dir: Option<PathBuf>,
    chain: Vec<PathBuf>,
}

/// Entries collected for one buffer.
enum Collected {
    Empty,
    Mapping(Mapping),
    Sequence(Vec<Value>),
}

impl Collected {
    fn insert(&mut self, key: &str, value: Value, line: usize) -> Result<()> {
        match self {
            Collected::Empty => {
                let mut map = Mapping::new();
                map.insert(key.to_string(), value);
                *self = Collected::Mapping(map);
            }
            Collected::Mapping(map) => {
                map.insert(key.to_string(), value);
            }
            Collected::Sequence(_) => return Err(Error::MixedBlock { line }),
        }
        Ok(())
    }

    fn push(&mut self, value: Value, line: usize) -> Result<()> {
        match self {
            Collected::Empty => *self = Collected::Sequence(vec![value]),
            Collected::Sequence(items) => items.push(value),
            Collected::Mapping(_) => return Err(Error::MixedBlock { line }),
        }
        Ok(())
    }

    fn into_value(self) -> Value {
        match self {
            Collected::Empty => Value::Null,
            Collected::Mapping(map) => Value::Mapping(map),
            Collected::Sequence(items) => Value::Sequence(items),
        }
    }
}

impl<'p> Document<'p> {
    fn options(&self) -> &Options {
        &self.parser.options
    }

    fn parse(&self, text: &str) -> Result<Value> {
        let lines = line::split_lines(text)
            .enumerate()
            .map(|(index, raw)| Line::classify(raw, index + 1))
            .collect::<Result<Vec<_>>>()?;

        match self.assemble(Buffer::root(lines))? {
            value @ Value::Mapping(_) => Ok(value),
            _ => Err(Error::CorruptFormat),
        }
    }

    /// Assembles one buffer into its value.
    fn assemble(&self, buffer: Buffer<'_>) -> Result<Value> {
        if let Some(style) = buffer.style() {
            return Ok(self.assemble_block(style, &buffer));
        }

        let parent = buffer.parent();
        let mut collected = Collected::Empty;
        let mut child: Option<Buffer<'_>> = None;

        for line in buffer.into_lines() {
            if let Some(open) = child.as_mut() {
                if open.accepts(&line) {
                    open.feed(line);
                    continue;
                }
            }
            if let Some(open) = child.take() {
                self.close(open, &mut collected)?;
            }

            if line.is_filler() {
                continue;
            }

            match (line.key, line.value) {
                (Some(key), None) => {
                    trace!("line {}: opening block `{}`", line.number, key);
                    child = Some(Buffer::child(&line, None));
                }
                (Some(key), Some(value)) => match BlockStyle::from_marker(value) {
                    Some(style) => {
                        trace!(
                            "line {}: opening {} block `{}`",
                            line.number,
                            style.marker(),
                            key
                        );
                        child = Some(Buffer::child(&line, Some(style)));
                    }
                    None => {
                        let value = coerce(value, self.options().evaluate_booleans, line.number)?;
                        collected.insert(key, value, line.number)?;
                    }
                },
                (None, Some(value)) => {
                    let item = self.sequence_item(value, parent, line.number)?;
                    collected.push(item, line.number)?;
                }
                (None, None) => {}
            }
        }

        if let Some(open) = child {
            self.close(open, &mut collected)?;
        }

        Ok(match collected.into_value() {
            Value::Mapping(map) => Value::Mapping(resolve_imports(map)),
            other => other,
        })
    }

    /// Assembles a child buffer and stores it under its parent key.
    fn close(&self, buffer: Buffer<'_>, collected: &mut Collected) -> Result<()> {
        let origin = buffer.origin();
        let key = buffer.parent().unwrap_or_default().to_string();
        trace!("closing block `{}` opened at line {}", key, origin);
        let value = self.assemble(buffer)?;
        collected.insert(&key, value, origin)
    }

    /// Joins the content of a `>` or `|` block. Content is taken verbatim.
    fn assemble_block(&self, style: BlockStyle, buffer: &Buffer<'_>) -> Value {
        // Filler lines at or above the opener's indent only passed through
        let content: Vec<&Line<'_>> = buffer
            .lines()
            .iter()
            .filter(|line| line.is_blank() || line.indent > buffer.indent())
            .collect();

        let text = match style {
            BlockStyle::Fold => content
                .iter()
                .filter(|line| !line.is_blank())
                .map(|line| line.raw.trim())
                .collect::<Vec<_>>()
                .join(" "),
            BlockStyle::Literal => {
                let base = content
                    .iter()
                    .find(|line| !line.is_blank())
                    .map_or(0, |line| line.indent);
                let mut parts: Vec<&str> = content
                    .iter()
                    .map(|line| if line.is_blank() { "" } else { line.text_from(base) })
                    .collect();
                while parts.last() == Some(&"") {
                    parts.pop();
                }
                let start = parts.iter().position(|part| !part.is_empty()).unwrap_or(0);
                parts[start..].join(self.options().separator.as_str())
            }
        };

        if text.is_empty() {
            Value::Null
        } else {
            Value::String(text)
        }
    }

    /// Turns a bare `- item` line into a sequence element.
    fn sequence_item(&self, value: &str, parent: Option<&str>, number: usize) -> Result<Value> {
        let Some(rest) = value.strip_prefix('-') else {
            return Err(Error::UnexpectedScalar { line: number });
        };
        let rest = rest.trim_start();
        let evaluate = self.options().evaluate_booleans;

        let item = match line::split_key(rest) {
            Some((key, inline)) => {
                let mut map = Mapping::new();
                map.insert(key.to_string(), coerce(inline.trim(), evaluate, number)?);
                Value::Mapping(map)
            }
            None => coerce(rest, evaluate, number)?,
        };

        if parent != Some(IMPORTS_KEY) {
            return Ok(item);
        }
        match item {
            Value::String(entry) => self.import(&entry, number),
            _ => Err(Error::InvalidImportEntry { line: number }),
        }
    }

    /// Loads and parses one imported document.
    fn import(&self, entry: &str, number: usize) -> Result<Value> {
        let path = match &self.base_dir {
            Some(dir) => dir.join(entry),
            None => PathBuf::from(entry),
        };
        let identity = self.parser.loader.identity(&path);
        if self.chain.contains(&identity) {
            return Err(Error::ImportCycle {
                line: number,
                file: path.display().to_string(),
            });
        }

        debug!("line {}: importing {}", number, path.display());
        let text = self
            .parser
            .loader
            .load(&path)
            .map_err(|e| Error::import_failure(number, &path, e))?;

        let mut chain = self.chain.clone();
        chain.push(identity);
        Document {
            parser: self.parser,
            base_dir: path.parent().map(Path::to_path_buf),
            chain,
        }
        .parse(&text)
        .map_err(|e| Error::import_failure(number, &path, e))
    }
}

/// Replaces a parsed `imports` sequence with the merge of the imported trees.
fn resolve_imports(mut map: Mapping) -> Mapping {
    if !matches!(map.get(IMPORTS_KEY), Some(Value::Sequence(_))) {
        return map;
    }
    match map.remove(IMPORTS_KEY) {
        Some(Value::Sequence(imported)) => merge_imports(map, imported),
        _ => map,
    }
}
