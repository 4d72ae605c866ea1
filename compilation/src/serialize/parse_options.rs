//! Parse options serializer.
//!
//! `language` is excluded here: it is written once, with the compilation
//! options, and every tree is checked against it before serialization.

use detkey_kernel::canon::writer::CanonicalWriter;

use crate::model::parse_options::ParseOptions;
use crate::serialize::write_str_array;

/// Fields written to the key, in order.
pub const INCLUDED_FIELDS: &[&str] = &[
    "kind",
    "specifiedLanguageVersion",
    "languageVersion",
    "documentationMode",
    "preprocessorSymbols",
    "features",
];

/// Fields deliberately left out of the key.
pub const EXCLUDED_FIELDS: &[&str] = &["language"];

/// Write the parse options members into the currently open object.
pub fn write_parse_options(w: &mut CanonicalWriter, options: &ParseOptions) {
    let ParseOptions {
        kind,
        specified_language_version,
        language_version,
        documentation_mode,
        preprocessor_symbols,
        features,
        language: _,
    } = options;

    w.write_enum("kind", kind);
    w.write_str(
        "specifiedLanguageVersion",
        &specified_language_version.to_string(),
    );
    w.write_str("languageVersion", &language_version.to_string());
    w.write_enum("documentationMode", documentation_mode);
    write_str_array(w, "preprocessorSymbols", preprocessor_symbols);

    w.write_key("features");
    w.write_array_start();
    for (name, value) in features {
        w.write_object_start();
        w.write_str(name, value);
        w.write_object_end();
    }
    w.write_array_end();
}
