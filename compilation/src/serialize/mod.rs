//! Serializers: one hand-written function per input type.
//!
//! Every serializer walks a fixed, explicitly enumerated field list and writes
//! through the kernel's [`CanonicalWriter`]. Field order is part of the key
//! schema. Nothing here is reflection-driven: the `serde` views on the model
//! types exist for lock tests only.
//!
//! Bundle serializers destructure their input exhaustively, so adding a field
//! to a bundle without deciding whether it reaches the key fails the build.
//! Each bundle module also exports `INCLUDED_FIELDS` / `EXCLUDED_FIELDS`,
//! which lock tests compare against the bundle's field inventory.

use detkey_kernel::canon::writer::CanonicalWriter;
use detkey_kernel::path::{file_name, PathMap};
use detkey_kernel::redaction::RedactionOptions;

use crate::config::KeyOptions;

pub mod analyzer;
pub mod emit_options;
pub mod options;
pub mod parse_options;
pub mod reference;
pub mod source;

/// Read-only state shared by every serializer during one key generation.
#[derive(Debug, Clone, Copy)]
pub struct KeyContext<'a> {
    pub redaction: RedactionOptions,
    pub path_map: &'a PathMap,
}

impl<'a> KeyContext<'a> {
    #[must_use]
    pub fn new(options: &'a KeyOptions) -> Self {
        Self {
            redaction: options.redaction,
            path_map: &options.path_map,
        }
    }

    /// Apply the path map, then reduce to the file name under `IGNORE_PATHS`.
    #[must_use]
    pub fn redact_path(&self, path: &str) -> String {
        let mapped = self.path_map.map(path);
        if self.redaction.ignore_paths() {
            file_name(&mapped).to_string()
        } else {
            mapped.into_owned()
        }
    }

    /// `"name": "<redacted path>"` or `"name": null`.
    pub fn write_file_name(&self, w: &mut CanonicalWriter, name: &str, path: Option<&str>) {
        match path {
            Some(p) => w.write_str(name, &self.redact_path(p)),
            None => w.write_null(name),
        }
    }
}

/// `"name": ["a", "b", ...]`, in iteration order.
pub(crate) fn write_str_array<'s>(
    w: &mut CanonicalWriter,
    name: &str,
    items: impl IntoIterator<Item = &'s String>,
) {
    w.write_key(name);
    w.write_array_start();
    for item in items {
        w.write_str_value(item);
    }
    w.write_array_end();
}
