//! Emit options serializer.

use detkey_kernel::canon::writer::CanonicalWriter;

use crate::model::emit_options::{EmitOptions, SubsystemVersion};
use crate::serialize::KeyContext;

/// Fields written to the key, in order.
pub const INCLUDED_FIELDS: &[&str] = &[
    "emitMetadataOnly",
    "tolerateErrors",
    "includePrivateMembers",
    "instrumentationKinds",
    "subsystemVersion",
    "fileAlignment",
    "highEntropyVirtualAddressSpace",
    "baseAddress",
    "debugInformationFormat",
    "outputNameOverride",
    "pdbFilePath",
    "pdbChecksumAlgorithm",
    "runtimeMetadataVersion",
    "defaultSourceFileEncoding",
    "fallbackSourceFileEncoding",
];

/// Fields deliberately left out of the key. Every emit option currently
/// affects output bytes.
pub const EXCLUDED_FIELDS: &[&str] = &[];

/// Write the emit options as one object: `{...}`, or `{}` when `None`.
pub fn write_emit_options_object(
    w: &mut CanonicalWriter,
    options: Option<&EmitOptions>,
    ctx: &KeyContext<'_>,
) {
    w.write_object_start();
    if let Some(options) = options {
        write_emit_options(w, options, ctx);
    }
    w.write_object_end();
}

/// Write the emit options members into the currently open object.
pub fn write_emit_options(w: &mut CanonicalWriter, options: &EmitOptions, ctx: &KeyContext<'_>) {
    let EmitOptions {
        emit_metadata_only,
        tolerate_errors,
        include_private_members,
        instrumentation_kinds,
        subsystem_version,
        file_alignment,
        high_entropy_virtual_address_space,
        base_address,
        debug_information_format,
        output_name_override,
        pdb_file_path,
        pdb_checksum_algorithm,
        runtime_metadata_version,
        default_source_file_encoding,
        fallback_source_file_encoding,
    } = options;

    w.write_bool("emitMetadataOnly", *emit_metadata_only);
    w.write_bool("tolerateErrors", *tolerate_errors);
    w.write_bool("includePrivateMembers", *include_private_members);

    w.write_key("instrumentationKinds");
    w.write_array_start();
    for kind in instrumentation_kinds {
        w.write_enum_value(kind);
    }
    w.write_array_end();

    w.write_key("subsystemVersion");
    match subsystem_version {
        Some(SubsystemVersion { major, minor }) => {
            w.write_object_start();
            w.write_u64("major", u64::from(*major));
            w.write_u64("minor", u64::from(*minor));
            w.write_object_end();
        }
        None => w.write_null_value(),
    }

    w.write_u64("fileAlignment", u64::from(*file_alignment));
    w.write_bool(
        "highEntropyVirtualAddressSpace",
        *high_entropy_virtual_address_space,
    );
    w.write_u64("baseAddress", *base_address);
    w.write_enum("debugInformationFormat", debug_information_format);
    ctx.write_file_name(w, "outputNameOverride", output_name_override.as_deref());
    ctx.write_file_name(w, "pdbFilePath", pdb_file_path.as_deref());
    w.write_enum("pdbChecksumAlgorithm", pdb_checksum_algorithm);
    w.write_opt_str("runtimeMetadataVersion", runtime_metadata_version.as_deref());
    w.write_opt_str(
        "defaultSourceFileEncoding",
        default_source_file_encoding.as_deref(),
    );
    w.write_opt_str(
        "fallbackSourceFileEncoding",
        fallback_source_file_encoding.as_deref(),
    );
}
