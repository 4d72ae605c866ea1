//! Canonical Writer: a streaming, deterministic structured-text (JSON) emitter.
//!
//! # Canonicalization rules
//!
//! 1. Object members are emitted in exactly the order the caller writes them.
//!    Keys are **never** sorted: call order is part of the key schema.
//! 2. Strings are escaped with a fixed table (`"`, `\`, `\b`, `\f`, `\n`,
//!    `\r`, `\t`, other controls as `\u00XX`); all other characters pass
//!    through as UTF-8. Distinct strings never escape to the same text.
//! 3. Absent values are written as a literal `null`, never omitted.
//! 4. Enums are written by symbolic name (see [`SymbolicName`]).
//! 5. Numbers are integers only (`i64` / `u64`).
//!
//! The writer does not reorder, dedup, or validate semantics. Structural
//! misuse (a value with no pending key inside an object, unbalanced ends) is a
//! programming error and trips a `debug_assert!`.

use std::fmt::Write;

use crate::canon::hex::encode_bytes;

/// Whitespace layout of the emitted text.
///
/// Layout never changes member order or escaping, only whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Two-space indentation, one member per line. Human-inspectable and
    /// line-diffable; the default for compilation keys.
    #[default]
    Indented,
    /// No insignificant whitespace (`{"a":1,"b":[2,3]}`).
    Compact,
}

/// Stable textual name for an enum value.
///
/// Numeric discriminants are not stable across versions; names are.
pub trait SymbolicName {
    /// The name written into keys (e.g. `"ConsoleApplication"`).
    fn symbolic_name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy)]
enum Frame {
    Object { members: usize, pending_key: bool },
    Array { items: usize },
}

/// Streaming structured-text writer backed by an owned `String`.
///
/// One writer serves exactly one key-generation call; it is never pooled or
/// shared.
#[derive(Debug)]
pub struct CanonicalWriter {
    buf: String,
    layout: Layout,
    stack: Vec<Frame>,
}

impl Default for CanonicalWriter {
    fn default() -> Self {
        Self::new(Layout::default())
    }
}

impl CanonicalWriter {
    /// Create an empty writer with the given layout.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        Self {
            buf: String::new(),
            layout,
            stack: Vec::new(),
        }
    }

    /// Create a compact writer.
    #[must_use]
    pub fn compact() -> Self {
        Self::new(Layout::Compact)
    }

    /// Open an object (as a member value, array element, or root).
    pub fn write_object_start(&mut self) {
        self.begin_value();
        self.buf.push('{');
        self.stack.push(Frame::Object {
            members: 0,
            pending_key: false,
        });
    }

    /// Close the innermost object.
    pub fn write_object_end(&mut self) {
        let frame = self.stack.pop();
        debug_assert!(
            matches!(
                frame,
                Some(Frame::Object {
                    pending_key: false,
                    ..
                })
            ),
            "write_object_end without matching object start (or with a dangling key)"
        );
        if let Some(Frame::Object { members, .. }) = frame {
            if members > 0 {
                self.newline_indent();
            }
        }
        self.buf.push('}');
    }

    /// Open an array.
    pub fn write_array_start(&mut self) {
        self.begin_value();
        self.buf.push('[');
        self.stack.push(Frame::Array { items: 0 });
    }

    /// Close the innermost array.
    pub fn write_array_end(&mut self) {
        let frame = self.stack.pop();
        debug_assert!(
            matches!(frame, Some(Frame::Array { .. })),
            "write_array_end without matching array start"
        );
        if let Some(Frame::Array { items }) = frame {
            if items > 0 {
                self.newline_indent();
            }
        }
        self.buf.push(']');
    }

    /// Write a member name. The next value written belongs to it.
    pub fn write_key(&mut self, name: &str) {
        debug_assert!(
            matches!(self.stack.last(), Some(Frame::Object { .. })),
            "write_key({name}) outside an object"
        );
        if let Some(Frame::Object {
            members,
            pending_key,
        }) = self.stack.last_mut()
        {
            debug_assert!(!*pending_key, "write_key({name}) while a key is pending");
            if *members > 0 {
                self.buf.push(',');
            }
            *members += 1;
            *pending_key = true;
        }
        self.newline_indent();
        write_string(&mut self.buf, name);
        self.buf.push(':');
        if self.layout == Layout::Indented {
            self.buf.push(' ');
        }
    }

    // -----------------------------------------------------------------------
    // Keyed scalars
    // -----------------------------------------------------------------------

    /// `"name": "value"`.
    pub fn write_str(&mut self, name: &str, value: &str) {
        self.write_key(name);
        self.write_str_value(value);
    }

    /// `"name": "value"` or `"name": null`.
    pub fn write_opt_str(&mut self, name: &str, value: Option<&str>) {
        self.write_key(name);
        match value {
            Some(v) => self.write_str_value(v),
            None => self.write_null_value(),
        }
    }

    /// `"name": true|false`.
    pub fn write_bool(&mut self, name: &str, value: bool) {
        self.write_key(name);
        self.write_bool_value(value);
    }

    /// `"name": true|false` or `"name": null`.
    pub fn write_opt_bool(&mut self, name: &str, value: Option<bool>) {
        self.write_key(name);
        match value {
            Some(v) => self.write_bool_value(v),
            None => self.write_null_value(),
        }
    }

    /// `"name": -42`.
    pub fn write_i64(&mut self, name: &str, value: i64) {
        self.write_key(name);
        self.write_i64_value(value);
    }

    /// `"name": 42`.
    pub fn write_u64(&mut self, name: &str, value: u64) {
        self.write_key(name);
        self.write_u64_value(value);
    }

    /// `"name": "SymbolicName"`.
    pub fn write_enum<E: SymbolicName + ?Sized>(&mut self, name: &str, value: &E) {
        self.write_str(name, value.symbolic_name());
    }

    /// `"name": "<lowercase hex>"`.
    pub fn write_bytes(&mut self, name: &str, value: &[u8]) {
        self.write_str(name, &encode_bytes(value));
    }

    /// `"name": null`.
    pub fn write_null(&mut self, name: &str) {
        self.write_key(name);
        self.write_null_value();
    }

    // -----------------------------------------------------------------------
    // Unkeyed values (array elements, or the value for a pending key)
    // -----------------------------------------------------------------------

    /// A string value.
    pub fn write_str_value(&mut self, value: &str) {
        self.begin_value();
        write_string(&mut self.buf, value);
    }

    /// A boolean value.
    pub fn write_bool_value(&mut self, value: bool) {
        self.begin_value();
        self.buf.push_str(if value { "true" } else { "false" });
    }

    /// A signed integer value.
    pub fn write_i64_value(&mut self, value: i64) {
        self.begin_value();
        let _ = write!(self.buf, "{value}");
    }

    /// An unsigned integer value.
    pub fn write_u64_value(&mut self, value: u64) {
        self.begin_value();
        let _ = write!(self.buf, "{value}");
    }

    /// An enum value by symbolic name.
    pub fn write_enum_value<E: SymbolicName + ?Sized>(&mut self, value: &E) {
        self.write_str_value(value.symbolic_name());
    }

    /// A literal `null`.
    pub fn write_null_value(&mut self) {
        self.begin_value();
        self.buf.push_str("null");
    }

    /// Text written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consume the writer and return the backing buffer.
    #[must_use]
    pub fn finish(self) -> String {
        debug_assert!(self.stack.is_empty(), "finish() with unclosed containers");
        self.buf
    }

    fn begin_value(&mut self) {
        match self.stack.last_mut() {
            Some(Frame::Object { pending_key, .. }) => {
                debug_assert!(*pending_key, "object member value written without a key");
                *pending_key = false;
            }
            Some(Frame::Array { items }) => {
                if *items > 0 {
                    self.buf.push(',');
                }
                *items += 1;
                self.newline_indent();
            }
            None => {
                debug_assert!(self.buf.is_empty(), "more than one root value");
            }
        }
    }

    fn newline_indent(&mut self) {
        if self.layout == Layout::Indented {
            self.buf.push('\n');
            for _ in 0..self.stack.len() {
                self.buf.push_str("  ");
            }
        }
    }
}

fn write_string(buf: &mut String, s: &str) {
    buf.push('"');
    for ch in s.chars() {
        match ch {
            '"' => buf.push_str("\\\""),
            '\\' => buf.push_str("\\\\"),
            '\n' => buf.push_str("\\n"),
            '\r' => buf.push_str("\\r"),
            '\t' => buf.push_str("\\t"),
            '\u{0008}' => buf.push_str("\\b"),
            '\u{000c}' => buf.push_str("\\f"),
            // Remaining control characters U+0000..U+001F.
            c if c < '\u{0020}' => {
                let _ = write!(buf, "\\u{:04x}", c as u32);
            }
            c => buf.push(c),
        }
    }
    buf.push('"');
}
