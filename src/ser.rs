//! Document serialization.
//!
//! This module provides the [`Emitter`] that compiles a [`Value`] tree into
//! document text, and the [`ValueSerializer`] that turns any `T: Serialize`
//! into a [`Value`] first.
//!
//! ## Layout
//!
//! - Mapping entries are written `key: value`; nested mappings and sequences are
//!   introduced by `key:` and indented one unit deeper.
//! - Sequence elements are written `- value`. A one-entry mapping of a scalar is
//!   written `- key: value`.
//! - Strings containing a line break become `|` blocks; long single-line strings
//!   become `>` blocks wrapped at 75 columns.
//! - Strings that would read back as another type are quoted.
//! - One blank line separates a run of scalar entries from a structural entry.
//!
//! ## Limits
//!
//! Text that would not read back unchanged is rejected rather than written:
//!
//! - Keys must match `[A-Za-z0-9_.-]+` ([`Error::InvalidKey`]).
//! - A string holding both quote kinds and a `#` the reader would take as a
//!   comment has no quoted form ([`Error::UnrepresentableString`]).
//! - A multi-line string must use the configured line separator, start and end
//!   with a non-blank line, have no indentation on its first line and no trailing
//!   whitespace on any line ([`Error::UnrepresentableString`]).
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde_confyaml::to_string;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Server { host: String, port: u16 }
//!
//! let text = to_string(&Server { host: "localhost".into(), port: 8080 }).unwrap();
//! assert!(text.ends_with("host: localhost\nport: 8080\n"));
//! ```
//!
//! ## Direct Emitter Usage
//!
//! ```rust
//! use serde_confyaml::{yaml, Emitter, Options};
//!
//! let emitter = Emitter::new(Options::new().with_indent(4));
//! let text = emitter.emit(&yaml!({ "db": { "port": 5432 } })).unwrap();
//! assert!(text.ends_with("db:\n    port: 5432\n"));
//! ```

use crate::line::{is_plain_key, strip_comment};
use crate::scalar::{is_boolean_word, is_float, is_integer};
use crate::{Error, Mapping, Options, Result, Value};
use log::debug;
use serde::{ser, Serialize};

/// Strings longer than this many bytes are written as folded blocks.
pub const FOLD_WIDTH: usize = 75;

/// The document compiler.
///
/// Converts a [`Value`] tree whose root is a mapping into document text.
#[derive(Clone, Debug, Default)]
pub struct Emitter {
    options: Options,
}

impl Emitter {
    #[must_use]
    pub fn new(options: Options) -> Self {
        Emitter { options }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Compiles `value` into document text, header included.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid, the root is not a mapping,
    /// a subtree is an empty container, a key or string cannot be written so
    /// that it reads back unchanged, or a sequence element cannot be written as
    /// a single item line.
    pub fn emit(&self, value: &Value) -> Result<String> {
        self.options.validate()?;
        let Value::Mapping(map) = value else {
            return Err(Error::unsupported_type(&format!(
                "document root must be a mapping, found {}",
                value.type_name()
            )));
        };

        let sep = self.options.separator.as_str();
        let mut output = String::with_capacity(256);
        output.push_str("# This YAML source has been compiled using ");
        output.push_str(env!("CARGO_PKG_NAME"));
        output.push_str(sep);
        output.push_str("# ");
        output.push_str(env!("CARGO_PKG_REPOSITORY"));
        output.push_str(sep);
        output.push_str(sep);

        self.write_mapping(&mut output, map, 0)?;
        debug!("compiled {} top-level keys", map.len());
        Ok(output)
    }

    fn pad(&self, tier: usize) -> String {
        " ".repeat(tier * self.options.indent)
    }

    fn write_mapping(&self, output: &mut String, map: &Mapping, tier: usize) -> Result<()> {
        let sep = self.options.separator.as_str();
        let pad = self.pad(tier);
        let start = output.len();
        let mut last_scalar = None;

        for (key, value) in map {
            if !is_plain_key(key) {
                return Err(Error::InvalidKey { path: key.clone() });
            }

            let scalar = value.is_scalar();
            if last_scalar.is_some_and(|last| last != scalar) {
                output.push_str(sep);
            }
            last_scalar = Some(scalar);

            output.push_str(&pad);
            output.push_str(key);
            output.push(':');

            match value {
                Value::Mapping(child) => {
                    output.push_str(sep);
                    self.write_mapping(output, child, tier + 1)
                        .map_err(|e| e.within(key))?;
                }
                Value::Sequence(items) => {
                    output.push_str(sep);
                    self.write_sequence(output, items, tier + 1)
                        .map_err(|e| e.within(key))?;
                }
                scalar => self
                    .write_entry_scalar(output, scalar, tier)
                    .map_err(|e| e.within(key))?,
            }
        }

        ensure_body(&output[start..])
    }

    fn write_sequence(&self, output: &mut String, items: &[Value], tier: usize) -> Result<()> {
        let sep = self.options.separator.as_str();
        let pad = self.pad(tier);
        let start = output.len();

        for (index, item) in items.iter().enumerate() {
            let index = index.to_string();
            let text = sequence_item(item)
                .map_err(|e| e.within(&index))?
                .ok_or(Error::NestedSequenceItem { path: index })?;
            output.push_str(&pad);
            output.push_str("- ");
            output.push_str(&text);
            output.push_str(sep);
        }

        ensure_body(&output[start..])
    }

    /// Writes the value part of a `key:` line whose value is a scalar.
    fn write_entry_scalar(&self, output: &mut String, value: &Value, tier: usize) -> Result<()> {
        let sep = self.options.separator.as_str();
        match value {
            Value::String(s) if s.contains('\n') => {
                let lines = block_lines(s, sep).ok_or_else(|| Error::unrepresentable(""))?;
                output.push_str(" |");
                output.push_str(sep);
                let pad = self.pad(tier + 1);
                for line in lines {
                    if !line.is_empty() {
                        output.push_str(&pad);
                        output.push_str(line);
                    }
                    output.push_str(sep);
                }
            }
            Value::String(s) if is_foldable(s) => {
                output.push_str(" >");
                output.push_str(sep);
                let pad = self.pad(tier + 1);
                for line in word_wrap(s, FOLD_WIDTH) {
                    output.push_str(&pad);
                    output.push_str(line);
                    output.push_str(sep);
                }
            }
            other => {
                output.push(' ');
                // Only strings with a line break have no inline form
                output.push_str(&inline_scalar(other, false)?.unwrap_or_default());
                output.push_str(sep);
            }
        }
        Ok(())
    }
}

/// Rejects a subtree that produced nothing but whitespace.
///
/// The key path is filled in by the enclosing levels.
fn ensure_body(body: &str) -> Result<()> {
    if body.trim().is_empty() {
        return Err(Error::CompileFailure { key: String::new() });
    }
    Ok(())
}

/// Splits a multi-line string into the lines of a `|` block.
///
/// Returns `None` when the block would read back differently: a line break
/// other than `sep`, a blank first or last line, indentation on the first line,
/// or trailing whitespace on any line.
fn block_lines<'s>(s: &'s str, sep: &str) -> Option<Vec<&'s str>> {
    let lines: Vec<&str> = s.split(sep).collect();
    let first = lines.first()?;
    let last = lines.last()?;
    if first.is_empty() || last.is_empty() || first.starts_with(' ') {
        return None;
    }
    lines
        .iter()
        .all(|line| !line.contains('\n') && line.trim_end() == *line)
        .then_some(lines)
}

/// The text after `- ` for one sequence element, or `None` if it does not fit
/// on one line.
fn sequence_item(item: &Value) -> Result<Option<String>> {
    match item {
        Value::Mapping(map) if map.len() == 1 => {
            let Some((key, value)) = map.iter().next() else {
                return Ok(None);
            };
            if !is_plain_key(key) {
                return Ok(None);
            }
            let text = inline_scalar(value, false).map_err(|e| e.within(key))?;
            Ok(text.map(|text| format!("{}: {}", key, text)))
        }
        other => inline_scalar(other, true),
    }
}

/// Renders a scalar on one line, quoting strings that would read back differently.
///
/// Returns `Ok(None)` for containers and for strings containing a line break.
fn inline_scalar(value: &Value, in_sequence: bool) -> Result<Option<String>> {
    let text = match value {
        Value::Null => "~".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => format_float(*f),
        Value::String(s) if s.contains('\n') => return Ok(None),
        Value::String(s) if needs_quotes(s, in_sequence) => quote(s)?,
        Value::String(s) => s.clone(),
        Value::Sequence(_) | Value::Mapping(_) => return Ok(None),
    };
    Ok(Some(text))
}

/// Formats a float so that it reads back as a float.
///
/// Whole numbers keep a `.0` fraction. Non-finite values use their display form
/// and read back as strings.
pub(crate) fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 {
        format!("{:.1}", f)
    } else {
        f.to_string()
    }
}

#[inline]
fn needs_quotes(s: &str, in_sequence: bool) -> bool {
    if s.is_empty() || s.trim() != s {
        return true;
    }

    // Would be typed as something other than a string
    if is_integer(s) || is_float(s) || is_boolean_word(s) {
        return true;
    }
    if s == "~" || s.eq_ignore_ascii_case("null") {
        return true;
    }

    // Would be cut as a comment or read as a quote or block marker
    if s.contains('#') || s.starts_with(['\'', '"', '-', '>', '|']) {
        return true;
    }

    in_sequence && s.split_once(':').is_some_and(|(key, _)| is_plain_key(key))
}

fn quote(s: &str) -> Result<String> {
    let mark = if s.contains('"') && !s.contains('\'') {
        '\''
    } else {
        '"'
    };
    let quoted = format!("{mark}{s}{mark}");
    // Inner quotes can pair up and leave a `#` outside any quoted region
    if strip_comment(&quoted).len() != quoted.len() {
        return Err(Error::unrepresentable(""));
    }
    Ok(quoted)
}

/// Long plain strings fold cleanly only when every word gap is a single space.
fn is_foldable(s: &str) -> bool {
    s.len() > FOLD_WIDTH && !needs_quotes(s, false) && !s.contains("  ") && s.contains(' ')
}

/// Wraps `text` at spaces so that lines stay within `width` bytes where possible.
///
/// Words longer than `width` are never split.
fn word_wrap(text: &str, width: usize) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut end = 0;

    for (pos, _) in text.match_indices(' ') {
        if pos - start > width && end > start {
            lines.push(&text[start..end]);
            start = end + 1;
        }
        end = pos;
    }
    if text.len() - start > width && end > start {
        lines.push(&text[start..end]);
        start = end + 1;
    }
    lines.push(&text[start..]);
    lines
}

/// Serializes any `T: Serialize` into a [`Value`].
///
/// Structs and maps become mappings, sequences and tuples become sequences, and
/// unit values become `Null`. Newtype, tuple and struct variants become
/// one-entry mappings keyed by the variant name.
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
    variant: Option<&'static str>,
}

pub struct SerializeMap {
    map: Mapping,
    current_key: Option<String>,
    variant: Option<&'static str>,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Int(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        if v <= i64::MAX as u64 {
            Ok(Value::Int(v as i64))
        } else {
            Ok(Value::Float(v as f64))
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Float(v as f64))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Sequence(
            v.iter().map(|&b| Value::Int(b as i64)).collect(),
        ))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let inner = to_value(value).map_err(|e| e.within(variant))?;
        Ok(tagged(variant, inner))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0), None))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, None))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, None))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, Some(variant)))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len.unwrap_or(0), None))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len, None))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len, Some(variant)))
    }
}

impl SerializeVec {
    fn new(len: usize, variant: Option<&'static str>) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(len),
            variant,
        }
    }

    fn push<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let index = self.vec.len().to_string();
        let value = to_value(value).map_err(|e| e.within(&index))?;
        self.vec.push(value);
        Ok(())
    }

    fn finish(self) -> Value {
        let seq = Value::Sequence(self.vec);
        match self.variant {
            Some(variant) => tagged(variant, seq),
            None => seq,
        }
    }
}

impl SerializeMap {
    fn new(len: usize, variant: Option<&'static str>) -> Self {
        SerializeMap {
            map: Mapping::with_capacity(len),
            current_key: None,
            variant,
        }
    }

    fn insert<T>(&mut self, key: String, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let value = to_value(value).map_err(|e| e.within(&key))?;
        self.map.insert(key, value);
        Ok(())
    }

    fn finish(self) -> Value {
        let map = Value::Mapping(self.map);
        match self.variant {
            Some(variant) => tagged(variant, map),
            None => map,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_value(key)? {
            Value::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            _ => Err(Error::non_string_key("")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.insert(key, value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.insert(key.to_string(), value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.insert(key.to_string(), value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

fn tagged(variant: &str, value: Value) -> Value {
    let mut map = Mapping::with_capacity(1);
    map.insert(variant.to_string(), value);
    Value::Mapping(map)
}

pub(crate) fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{yaml, LineSeparator};
    use serde::Serialize;
    use std::collections::{BTreeMap, HashMap};

    const HEADER: &str = "# This YAML source has been compiled using serde_confyaml\n\
                          # https://github.com/hxphsts/serde_confyaml\n\n";

    fn emit(value: &Value) -> String {
        Emitter::default().emit(value).unwrap()
    }

    fn body(value: &Value) -> String {
        let text = emit(value);
        assert!(text.starts_with(HEADER), "missing header in {text:?}");
        text[HEADER.len()..].to_string()
    }

    #[test]
    fn test_scalar_entries() {
        let value = yaml!({ "name": "app", "port": 8080, "ratio": 0.5, "on": true, "none": null });
        assert_eq!(
            body(&value),
            "name: app\nport: 8080\nratio: 0.5\non: true\nnone: ~\n"
        );
    }

    #[test]
    fn test_blank_line_between_scalar_and_structural_runs() {
        let value = yaml!({ "a": 1, "db": { "host": "h" }, "list": [1, 2], "z": 2 });
        assert_eq!(
            body(&value),
            "a: 1\n\ndb:\n  host: h\nlist:\n  - 1\n  - 2\n\nz: 2\n"
        );
    }

    #[test]
    fn test_structural_first_has_no_leading_blank() {
        let value = yaml!({ "db": { "port": 1 } });
        assert_eq!(body(&value), "db:\n  port: 1\n");
    }

    #[test]
    fn test_indent_option_is_applied() {
        let emitter = Emitter::new(Options::new().with_indent(4));
        let text = emitter.emit(&yaml!({ "a": { "b": { "c": 1 } } })).unwrap();
        assert!(text.ends_with("a:\n    b:\n        c: 1\n"));
    }

    #[test]
    fn test_crlf_separator() {
        let emitter = Emitter::new(Options::new().with_separator(LineSeparator::CrLf));
        let text = emitter.emit(&yaml!({ "a": 1, "b": 2 })).unwrap();
        assert!(text.starts_with("# This YAML source"));
        assert!(text.contains("\r\n\r\na: 1\r\nb: 2\r\n"));
        assert!(!text.replace("\r\n", "").contains('\n'));
    }

    #[test]
    fn test_literal_block_for_multiline_strings() {
        let value = yaml!({ "text": "line1\n\nline2" });
        assert_eq!(body(&value), "text: |\n  line1\n\n  line2\n");
    }

    #[test]
    fn test_folded_block_for_long_strings() {
        let long = "word ".repeat(30).trim_end().to_string();
        let mut map = Mapping::new();
        map.insert("long".to_string(), Value::String(long.clone()));
        let text = body(&Value::Mapping(map));

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("long: >"));
        let folded: Vec<&str> = lines.collect();
        assert!(folded.len() > 1);
        for line in &folded {
            assert!(line.starts_with("  "));
            assert!(line.trim().len() <= FOLD_WIDTH);
        }
        let joined: Vec<&str> = folded.iter().map(|line| line.trim()).collect();
        assert_eq!(joined.join(" "), long);
    }

    #[test]
    fn test_ambiguous_strings_are_quoted() {
        let value = yaml!({
            "a": "42",
            "b": "1.5",
            "c": "null",
            "d": "yes",
            "e": "",
            "f": " padded",
            "g": "has # hash",
            "h": "-dash",
            "i": "|",
            "j": "\"hi\" there",
            "k": "say \"hi\""
        });
        assert_eq!(
            body(&value),
            "a: \"42\"\nb: \"1.5\"\nc: \"null\"\nd: \"yes\"\ne: \"\"\nf: \" padded\"\n\
             g: \"has # hash\"\nh: \"-dash\"\ni: \"|\"\nj: '\"hi\" there'\nk: say \"hi\"\n"
        );
    }

    #[test]
    fn test_sequence_items() {
        let value = yaml!({ "items": ["a", 1, null, "k: v", { "name": "x" }] });
        assert_eq!(
            body(&value),
            "items:\n  - a\n  - 1\n  - ~\n  - \"k: v\"\n  - name: x\n"
        );
    }

    #[test]
    fn test_long_string_in_sequence_stays_inline() {
        let long = "word ".repeat(20).trim_end().to_string();
        let value = Value::Mapping(
            [("items".to_string(), Value::Sequence(vec![Value::from(long.as_str())]))]
                .into_iter()
                .collect(),
        );
        assert_eq!(body(&value), format!("items:\n  - {}\n", long));
    }

    #[test]
    fn test_nested_sequence_item_rejected() {
        let value = yaml!({ "outer": { "list": [1, [2, 3]] } });
        match Emitter::default().emit(&value) {
            Err(Error::NestedSequenceItem { path }) => assert_eq!(path, "outer.list.1"),
            other => panic!("expected nested item error, got {other:?}"),
        }

        let multiline = yaml!({ "list": ["a\nb"] });
        assert!(matches!(
            Emitter::default().emit(&multiline),
            Err(Error::NestedSequenceItem { .. })
        ));
    }

    #[test]
    fn test_empty_container_fails_to_compile() {
        match Emitter::default().emit(&yaml!({ "a": 1, "empty": {} })) {
            Err(Error::CompileFailure { key }) => assert_eq!(key, "empty"),
            other => panic!("expected compile failure, got {other:?}"),
        }
        assert!(matches!(
            Emitter::default().emit(&yaml!({})),
            Err(Error::CompileFailure { .. })
        ));
    }

    #[test]
    fn test_nested_empty_container_reports_path() {
        match Emitter::default().emit(&yaml!({ "a": { "b": {} } })) {
            Err(Error::CompileFailure { key }) => assert_eq!(key, "a.b"),
            other => panic!("expected compile failure, got {other:?}"),
        }
        match Emitter::default().emit(&yaml!({ "a": { "list": [] } })) {
            Err(Error::CompileFailure { key }) => assert_eq!(key, "a.list"),
            other => panic!("expected compile failure, got {other:?}"),
        }
    }

    #[test]
    fn test_unquotable_string_rejected() {
        match Emitter::default().emit(&yaml!({ "k": "it's a \"#1\"" })) {
            Err(Error::UnrepresentableString { path }) => assert_eq!(path, "k"),
            other => panic!("expected unrepresentable string, got {other:?}"),
        }
        match Emitter::default().emit(&yaml!({ "list": ["ok", "x\"y'#"] })) {
            Err(Error::UnrepresentableString { path }) => assert_eq!(path, "list.1"),
            other => panic!("expected unrepresentable string, got {other:?}"),
        }
        match Emitter::default().emit(&yaml!({ "list": [{ "name": "x\"y'#" }] })) {
            Err(Error::UnrepresentableString { path }) => assert_eq!(path, "list.0.name"),
            other => panic!("expected unrepresentable string, got {other:?}"),
        }
    }

    #[test]
    fn test_both_quote_kinds_with_paired_hash_still_written() {
        let value = yaml!({ "k": "a\"b\"#'c'" });
        assert_eq!(body(&value), "k: \"a\"b\"#'c'\"\n");
    }

    #[test]
    fn test_malformed_keys_rejected() {
        for key in ["x:y", "my key", "a#b", ""] {
            let mut map = Mapping::new();
            map.insert(key.to_string(), Value::Int(1));
            match Emitter::default().emit(&Value::Mapping(map)) {
                Err(Error::InvalidKey { path }) => assert_eq!(path, key),
                other => panic!("expected invalid key for {key:?}, got {other:?}"),
            }
        }

        match Emitter::default().emit(&yaml!({ "outer": { "my key": 1 } })) {
            Err(Error::InvalidKey { path }) => assert_eq!(path, "outer.my key"),
            other => panic!("expected invalid key, got {other:?}"),
        }
    }

    #[test]
    fn test_lossy_literal_blocks_rejected() {
        for text in ["  a\nb", "a\nb\n", "\na", "a\n   \nb", "a  \nb", "a\r\nb"] {
            match Emitter::default().emit(&yaml!({ "text": text })) {
                Err(Error::UnrepresentableString { path }) => assert_eq!(path, "text"),
                other => panic!("expected unrepresentable string for {text:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_literal_block_follows_separator() {
        let crlf = Emitter::new(Options::new().with_separator(LineSeparator::CrLf));
        let text = crlf.emit(&yaml!({ "text": "a\r\n  b" })).unwrap();
        assert!(text.ends_with("text: |\r\n  a\r\n    b\r\n"));

        assert!(matches!(
            crlf.emit(&yaml!({ "text": "a\nb" })),
            Err(Error::UnrepresentableString { .. })
        ));
    }

    #[test]
    fn test_literal_block_keeps_inner_indent_and_tabs() {
        let value = yaml!({ "text": "\tfirst\n  nested\n\nlast" });
        assert_eq!(body(&value), "text: |\n  \tfirst\n    nested\n\n  last\n");
    }

    #[test]
    fn test_non_mapping_root_rejected() {
        assert!(matches!(
            Emitter::default().emit(&yaml!([1, 2])),
            Err(Error::UnsupportedType(_))
        ));
    }

    #[test]
    fn test_invalid_indent_rejected() {
        let emitter = Emitter::new(Options::new().with_indent(9));
        assert!(matches!(
            emitter.emit(&yaml!({ "a": 1 })),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(-2.0), "-2.0");
        assert_eq!(format_float(0.25), "0.25");
        assert_eq!(format_float(f64::NAN), "NaN");
    }

    #[test]
    fn test_word_wrap() {
        assert_eq!(word_wrap("aa bb cc", 5), vec!["aa bb", "cc"]);
        assert_eq!(word_wrap("short", 10), vec!["short"]);
        assert_eq!(
            word_wrap("averyveryverylongword tail", 5),
            vec!["averyveryverylongword", "tail"]
        );
    }

    #[derive(Serialize)]
    enum Shape {
        Point,
        Circle(f64),
        Rect { w: u32, h: u32 },
        Pair(i32, i32),
    }

    #[test]
    fn test_to_value_variants() {
        assert_eq!(to_value(&Shape::Point).unwrap(), Value::from("Point"));
        assert_eq!(to_value(&Shape::Circle(1.5)).unwrap(), yaml!({ "Circle": 1.5 }));
        assert_eq!(
            to_value(&Shape::Rect { w: 2, h: 3 }).unwrap(),
            yaml!({ "Rect": { "w": 2, "h": 3 } })
        );
        assert_eq!(to_value(&Shape::Pair(1, 2)).unwrap(), yaml!({ "Pair": [1, 2] }));
    }

    #[test]
    fn test_to_value_options_and_large_unsigned() {
        let mut map = BTreeMap::new();
        map.insert("some", Some(1));
        map.insert("none", None);
        assert_eq!(to_value(&map).unwrap(), yaml!({ "none": null, "some": 1 }));
        assert_eq!(to_value(&u64::MAX).unwrap(), Value::Float(u64::MAX as f64));
    }

    #[derive(Serialize)]
    struct Outer {
        inner: Inner,
    }

    #[derive(Serialize)]
    struct Inner {
        table: HashMap<i32, String>,
    }

    #[test]
    fn test_non_string_key_reports_path() {
        let mut table = HashMap::new();
        table.insert(1, "one".to_string());
        let value = Outer {
            inner: Inner { table },
        };
        match to_value(&value) {
            Err(Error::NonStringKey { path }) => assert_eq!(path, "inner.table"),
            other => panic!("expected non-string key error, got {other:?}"),
        }
    }
}
