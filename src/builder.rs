//! The TOML document builder.
//!
//! This module provides [`TomlBuilder`], a single-use, stateful accumulator
//! that turns a sequence of imperative calls into a valid TOML document
//! string. The builder owns the whole pipeline:
//!
//! - **Value dispatch**: an exhaustive match over [`Value`] producing the
//!   TOML-literal text for each of the six supported kinds
//! - **String escaping and validation**: ordered literal replacements plus a
//!   backslash audit of the escaped text
//! - **Array homogeneity**: every element's kind is compared against the
//!   first element's kind
//! - **Key management**: fully-qualified keys (keygroup path + leaf) share
//!   one uniqueness namespace with keygroup paths themselves
//! - **Line formatting**: `key = value` lines, `[keygroup]` headers with a
//!   separating blank line, `#comment` lines
//!
//! A failing call commits nothing: the document text and the key registry
//! are only touched after every check on the call has passed.
//!
//! ## Usage
//!
//! ```rust
//! use toml_builder::TomlBuilder;
//!
//! let mut builder = TomlBuilder::new();
//! builder
//!     .add_group("server.mail").unwrap()
//!     .add_value("ip", "192.168.0.1", Some("Internal IP")).unwrap()
//!     .add_value("port", 25, None).unwrap();
//!
//! assert_eq!(
//!     builder.as_str(),
//!     "[server.mail]\nip = \"192.168.0.1\" #Internal IP\nport = 25\n"
//! );
//! ```

use crate::value::DATETIME_FORMAT;
use crate::{to_value, Error, Result, Value};
use indexmap::IndexSet;
use serde::Serialize;

/// The escaping table, applied as literal substring replacement in order.
/// The backslash pass runs first so later passes never double-escape.
const ESCAPES: [(&str, &str); 8] = [
    ("\\", "\\\\"),
    ("\u{0008}", "\\b"),
    ("\t", "\\t"),
    ("\n", "\\n"),
    ("\u{000C}", "\\f"),
    ("\r", "\\r"),
    ("\"", "\\\""),
    ("/", "\\/"),
];

/// A write-only TOML document builder.
///
/// The builder is exercised through a small sequential API: add a key-value,
/// open a keygroup, add a comment, retrieve the accumulated string. It is
/// single-use and produces one document; build concurrent documents with
/// independent instances.
///
/// # Examples
///
/// ```rust
/// use toml_builder::TomlBuilder;
///
/// let mut builder = TomlBuilder::new();
/// builder
///     .add_comment(" Generated configuration")
///     .add_value("title", "TOML Example", None).unwrap()
///     .add_group("database").unwrap()
///     .add_value("ports", vec![8001, 8001, 8002], None).unwrap();
///
/// assert!(builder.as_str().contains("ports = [8001, 8001, 8002]"));
/// ```
#[derive(Debug)]
pub struct TomlBuilder {
    output: String,
    indent: String,
    lines: usize,
    defined_keys: IndexSet<String>,
    current_group: String,
}

impl TomlBuilder {
    /// Creates a builder with the default indentation unit of 4 spaces.
    #[must_use]
    pub fn new() -> Self {
        Self::with_indent(4)
    }

    /// Creates a builder with an indentation unit of `spaces` spaces.
    ///
    /// The unit is fixed for the builder's lifetime. It feeds the line
    /// writer's depth parameter; the current structural rules emit every
    /// line at depth zero.
    #[must_use]
    pub fn with_indent(spaces: usize) -> Self {
        TomlBuilder {
            output: String::with_capacity(256),
            indent: " ".repeat(spaces),
            lines: 0,
            defined_keys: IndexSet::new(),
            current_group: String::new(),
        }
    }

    /// Appends a `key = value` line, optionally followed by an inline comment.
    ///
    /// The key is trimmed, qualified against the current keygroup, and
    /// registered; the value is rendered through the type dispatcher. Inline
    /// comment text is passed through unescaped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toml_builder::TomlBuilder;
    ///
    /// let mut builder = TomlBuilder::new();
    /// builder.add_value("port", 25, None).unwrap();
    /// assert_eq!(builder.as_str(), "port = 25\n");
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::EmptyKey`] if the key is empty after trimming,
    /// [`Error::DuplicateKey`] if the fully-qualified key is already
    /// defined, and the dispatcher's [`Error::MixedArrayType`] or
    /// [`Error::InvalidStringCharacter`] for rejected values. On error the
    /// document and registry are unchanged.
    pub fn add_value<V>(&mut self, key: &str, value: V, comment: Option<&str>) -> Result<&mut Self>
    where
        V: Into<Value>,
    {
        let key = key.trim();
        if key.is_empty() {
            return Err(Error::EmptyKey);
        }

        let qualified = self.qualify(key);
        if self.defined_keys.contains(&qualified) {
            return Err(Error::duplicate_key(&qualified));
        }

        let rendered = self.render_value(key, &value.into())?;

        self.defined_keys.insert(qualified);
        let mut line = format!("{} = {}", key, rendered);
        if let Some(comment) = comment {
            line.push_str(" #");
            line.push_str(comment);
        }
        self.push_line(0, &line);
        Ok(self)
    }

    /// Like [`add_value`], but accepts any `T: Serialize` and routes it
    /// through the dynamically-typed embedding layer ([`to_value`]).
    ///
    /// Values whose runtime shape has no TOML representation fail with
    /// [`Error::UnsupportedType`] naming `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toml_builder::{Error, TomlBuilder};
    ///
    /// let mut builder = TomlBuilder::new();
    /// builder.add_serialized("tags", &("a", "b"), None).unwrap();
    /// assert_eq!(builder.as_str(), "tags = [\"a\", \"b\"]\n");
    ///
    /// let none: Option<i32> = None;
    /// let err = builder.add_serialized("missing", &none, None).unwrap_err();
    /// assert!(matches!(err, Error::UnsupportedType(_)));
    /// ```
    ///
    /// # Errors
    ///
    /// Everything [`add_value`] raises, plus [`Error::UnsupportedType`] from
    /// the embedding layer.
    ///
    /// [`add_value`]: TomlBuilder::add_value
    pub fn add_serialized<T>(
        &mut self,
        key: &str,
        value: &T,
        comment: Option<&str>,
    ) -> Result<&mut Self>
    where
        T: ?Sized + Serialize,
    {
        let value = to_value(value).map_err(|err| err.with_key(key.trim()))?;
        self.add_value(key, value, comment)
    }

    /// Opens a keygroup: appends a `[dotted.path]` header and makes the path
    /// the context that qualifies subsequent keys.
    ///
    /// The path itself is registered in the same uniqueness namespace as
    /// leaf keys. A blank line precedes the header unless the document is
    /// still empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toml_builder::TomlBuilder;
    ///
    /// let mut builder = TomlBuilder::new();
    /// builder
    ///     .add_group("owner").unwrap()
    ///     .add_value("name", "Tom", None).unwrap();
    /// assert_eq!(builder.as_str(), "[owner]\nname = \"Tom\"\n");
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::EmptyKeygroupSegment`] if any dotted segment is empty
    /// (including the empty path), [`Error::DuplicateKey`] if the path is
    /// already defined. On error the document, registry, and current
    /// keygroup are unchanged.
    pub fn add_group(&mut self, path: &str) -> Result<&mut Self> {
        if path.split('.').any(str::is_empty) {
            return Err(Error::empty_keygroup_segment(path));
        }
        if self.defined_keys.contains(path) {
            return Err(Error::duplicate_key(path));
        }

        self.defined_keys.insert(path.to_string());
        self.current_group = path.to_string();

        if self.lines > 0 {
            self.push_line(0, "");
        }
        self.push_line(0, &format!("[{}]", path));
        Ok(self)
    }

    /// Appends a `#text` comment line.
    ///
    /// Comments never participate in the key registry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toml_builder::TomlBuilder;
    ///
    /// let mut builder = TomlBuilder::new();
    /// builder.add_comment(" database settings");
    /// assert_eq!(builder.as_str(), "# database settings\n");
    /// ```
    pub fn add_comment(&mut self, text: &str) -> &mut Self {
        self.push_line(0, &format!("#{}", text));
        self
    }

    /// Returns the document accumulated so far.
    ///
    /// Callable at any point; an untouched builder yields the empty string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.output
    }

    /// Consumes the builder and returns the finished document.
    #[must_use]
    pub fn into_string(self) -> String {
        self.output
    }

    fn qualify(&self, key: &str) -> String {
        if self.current_group.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.current_group, key)
        }
    }

    /// Renders one value as TOML-literal text. `key` travels along only to
    /// name the offender in error messages.
    fn render_value(&self, key: &str, value: &Value) -> Result<String> {
        match value {
            Value::String(s) => self.render_string(key, s),
            Value::Array(items) => self.render_array(key, items),
            Value::Integer(v) => Ok(v.to_string()),
            Value::Float(v) => Ok(v.to_string()),
            Value::Boolean(v) => Ok(String::from(if *v { "true" } else { "false" })),
            Value::Datetime(v) => Ok(v.format(DATETIME_FORMAT).to_string()),
        }
    }

    fn render_string(&self, key: &str, raw: &str) -> Result<String> {
        let escaped = escape_string(raw);
        if !is_escaped_string_valid(&escaped) {
            return Err(Error::invalid_string_character(key));
        }
        Ok(format!("\"{}\"", escaped))
    }

    /// Elements must all carry the first element's kind tag. The comparison
    /// stops at the outer tag: nested arrays of differing inner shapes are
    /// homogeneous at this level.
    fn render_array(&self, key: &str, items: &[Value]) -> Result<String> {
        if let Some((first, rest)) = items.split_first() {
            for item in rest {
                if item.kind() != first.kind() {
                    return Err(Error::mixed_array_type(key));
                }
            }
        }

        let mut parts = Vec::with_capacity(items.len());
        for item in items {
            parts.push(self.render_value(key, item)?);
        }
        Ok(format!("[{}]", parts.join(", ")))
    }

    /// Writes one line at the given indentation depth. Depth zero is the
    /// only depth the current structural rules use.
    fn push_line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.output.push_str(&self.indent);
        }
        self.output.push_str(text);
        self.output.push('\n');
        self.lines += 1;
    }
}

impl Default for TomlBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn escape_string(raw: &str) -> String {
    let mut escaped = raw.to_string();
    for (from, to) in ESCAPES {
        escaped = escaped.replace(from, to);
    }
    escaped
}

/// Audits escaped text for sequences the format cannot represent.
///
/// The known escape sequences are removed (same order as the escaping
/// table), then `\u` + 4-hex-digit code-point escapes are stripped for
/// inspection only. Any backslash still standing is unrepresentable. Raw
/// control characters carry no backslash and pass the audit untouched.
fn is_escaped_string_valid(escaped: &str) -> bool {
    let mut stripped = escaped.to_string();
    for (_, sequence) in ESCAPES {
        stripped = stripped.replace(sequence, "");
    }
    !strip_unicode_escapes(&stripped).contains('\\')
}

fn strip_unicode_escapes(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;
    while i < chars.len() {
        let is_unicode_escape = chars[i] == '\\'
            && chars.get(i + 1) == Some(&'u')
            && i + 5 < chars.len()
            && chars[i + 2..=i + 5].iter().all(char::is_ascii_hexdigit);
        if is_unicode_escape {
            i += 6;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_table() {
        assert_eq!(escape_string("a\\b"), "a\\\\b");
        assert_eq!(escape_string("\u{0008}"), "\\b");
        assert_eq!(escape_string("col\tumn"), "col\\tumn");
        assert_eq!(escape_string("line\nbreak"), "line\\nbreak");
        assert_eq!(escape_string("\u{000C}"), "\\f");
        assert_eq!(escape_string("\r"), "\\r");
        assert_eq!(escape_string("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_string("a/b"), "a\\/b");
    }

    #[test]
    fn test_backslash_pass_runs_first() {
        // A raw backslash followed by 't' must not collapse into a tab escape.
        assert_eq!(escape_string("\\t"), "\\\\t");
        assert_eq!(escape_string("\\\n"), "\\\\\\n");
    }

    #[test]
    fn test_escaped_output_always_passes_the_audit() {
        for raw in ["", "plain", "C:\\path\\file", "\\u0041", "\t\"\\/", "\\\\"] {
            assert!(is_escaped_string_valid(&escape_string(raw)), "{:?}", raw);
        }
    }

    #[test]
    fn test_audit_rejects_stray_backslashes() {
        assert!(!is_escaped_string_valid("\\x"));
        assert!(!is_escaped_string_valid("tail\\"));
        assert!(!is_escaped_string_valid("\\u12"));
        assert!(!is_escaped_string_valid("\\uQQQQ"));
    }

    #[test]
    fn test_audit_strips_unicode_escapes() {
        assert!(is_escaped_string_valid("\\u0041"));
        assert!(is_escaped_string_valid("pre\\u00e9post"));
    }

    #[test]
    fn test_strip_unicode_escapes_is_inspection_only() {
        // The stripper feeds the audit; add_value keeps the sequence in the
        // document.
        assert_eq!(strip_unicode_escapes("a\\u0041b"), "ab");
        assert_eq!(strip_unicode_escapes("\\u004"), "\\u004");

        let mut builder = TomlBuilder::new();
        builder.add_value("k", "\\u0041", None).unwrap();
        assert_eq!(builder.as_str(), "k = \"\\\\u0041\"\n");
    }

    #[test]
    fn test_raw_control_characters_pass_through() {
        // Only the five control characters with dedicated escapes are
        // rewritten; the rest are accepted verbatim.
        let mut builder = TomlBuilder::new();
        builder.add_value("k", "a\u{0001}b", None).unwrap();
        assert_eq!(builder.as_str(), "k = \"a\u{0001}b\"\n");
    }

    #[test]
    fn test_key_is_trimmed_in_output_and_registry() {
        let mut builder = TomlBuilder::new();
        builder.add_value("  port  ", 25, None).unwrap();
        assert_eq!(builder.as_str(), "port = 25\n");

        let err = builder.add_value("port", 26, None).unwrap_err();
        assert_eq!(err, Error::DuplicateKey("port".to_string()));
    }

    #[test]
    fn test_whitespace_key_is_empty() {
        let mut builder = TomlBuilder::new();
        assert_eq!(builder.add_value("   ", 1, None).unwrap_err(), Error::EmptyKey);
        assert_eq!(builder.as_str(), "");
    }

    #[test]
    fn test_failed_group_keeps_previous_context() {
        let mut builder = TomlBuilder::new();
        builder.add_group("server").unwrap();
        let before = builder.as_str().to_string();

        assert!(builder.add_group("server").is_err());
        assert!(builder.add_group("a..b").is_err());
        assert_eq!(builder.as_str(), before);

        // Keys still qualify against the group that succeeded.
        builder.add_value("host", "localhost", None).unwrap();
        let err = builder.add_value("host", "other", None).unwrap_err();
        assert_eq!(err, Error::DuplicateKey("server.host".to_string()));
    }

    #[test]
    fn test_float_uses_standard_conversion() {
        let mut builder = TomlBuilder::new();
        builder
            .add_value("pi", 3.14, None)
            .unwrap()
            .add_value("whole", 1.0, None)
            .unwrap();
        assert_eq!(builder.as_str(), "pi = 3.14\nwhole = 1\n");
    }

    #[test]
    fn test_empty_array_renders_brackets() {
        let mut builder = TomlBuilder::new();
        builder.add_value("empty", Vec::<i64>::new(), None).unwrap();
        assert_eq!(builder.as_str(), "empty = []\n");
    }
}
