//! Syntax tree and additional text serializers.

use detkey_kernel::canon::writer::CanonicalWriter;

use crate::model::source::{AdditionalText, SourceText, SyntaxTree};
use crate::serialize::parse_options::write_parse_options;
use crate::serialize::KeyContext;

/// `{checksum, checksumAlgorithm, encoding}`.
pub fn write_source_text(w: &mut CanonicalWriter, text: &SourceText) {
    w.write_object_start();
    w.write_bytes("checksum", text.checksum());
    w.write_enum("checksumAlgorithm", &text.checksum_algorithm());
    w.write_opt_str("encoding", text.encoding());
    w.write_object_end();
}

/// `{fileName, text, parseOptions}`.
pub fn write_syntax_tree(w: &mut CanonicalWriter, tree: &SyntaxTree, ctx: &KeyContext<'_>) {
    w.write_object_start();
    w.write_str("fileName", &ctx.redact_path(&tree.path));
    w.write_key("text");
    write_source_text(w, &tree.text);
    w.write_key("parseOptions");
    w.write_object_start();
    write_parse_options(w, &tree.options);
    w.write_object_end();
    w.write_object_end();
}

/// `{fileName, text}`.
pub fn write_additional_text(
    w: &mut CanonicalWriter,
    text: &AdditionalText,
    ctx: &KeyContext<'_>,
) {
    w.write_object_start();
    w.write_str("fileName", &ctx.redact_path(&text.path));
    w.write_key("text");
    write_source_text(w, &text.text);
    w.write_object_end();
}
