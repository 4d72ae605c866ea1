//! Compilation options serializer.
//!
//! Excluded fields, and why they cannot change emitted bytes:
//!
//! - `concurrentBuild`: parallelism hint.
//! - `currentLocalTime`: wall clock.
//! - `uiCulture`: language of diagnostics, not of output.
//! - resolver / provider / comparer hooks: behavior, not data. What they
//!   resolve reaches the key as trees and references.

use detkey_kernel::canon::writer::CanonicalWriter;

use crate::model::options::{
    CSharpOptions, CompilationOptions, LanguageOptions, VisualBasicOptions,
};
use crate::serialize::{write_str_array, KeyContext};

/// Common fields written to the key, in order.
pub const INCLUDED_FIELDS: &[&str] = &[
    "outputKind",
    "moduleName",
    "scriptClassName",
    "mainTypeName",
    "cryptoPublicKey",
    "cryptoKeyFile",
    "cryptoKeyContainer",
    "delaySign",
    "publicSign",
    "checkOverflow",
    "platform",
    "optimizationLevel",
    "debugPlusMode",
    "generalDiagnosticOption",
    "warningLevel",
    "deterministic",
    "referencesSupersedeLowerVersions",
    "reportSuppressedDiagnostics",
    "metadataImportOptions",
    "nullableContextOptions",
    "specificDiagnosticOptions",
    "language",
];

/// Common fields deliberately left out of the key.
pub const EXCLUDED_FIELDS: &[&str] = &[
    "concurrentBuild",
    "currentLocalTime",
    "uiCulture",
    "xmlReferenceResolver",
    "sourceReferenceResolver",
    "metadataReferenceResolver",
    "assemblyIdentityComparer",
    "strongNameProvider",
    "syntaxTreeOptionsProvider",
];

/// C# extension fields, written after `language`.
pub const CSHARP_FIELDS: &[&str] = &["allowUnsafe", "topLevelBinderFlags", "globalUsings"];

/// Visual Basic extension fields, written after `language`.
pub const VISUAL_BASIC_FIELDS: &[&str] = &[
    "rootNamespace",
    "optionStrict",
    "optionInfer",
    "optionExplicit",
    "optionCompareText",
    "embedVbCoreRuntime",
    "globalImports",
];

/// Write the options members into the currently open object.
pub fn write_compilation_options(
    w: &mut CanonicalWriter,
    options: &CompilationOptions,
    ctx: &KeyContext<'_>,
) {
    let CompilationOptions {
        output_kind,
        module_name,
        script_class_name,
        main_type_name,
        crypto_public_key,
        crypto_key_file,
        crypto_key_container,
        delay_sign,
        public_sign,
        check_overflow,
        platform,
        optimization_level,
        debug_plus_mode,
        general_diagnostic_option,
        warning_level,
        deterministic,
        references_supersede_lower_versions,
        report_suppressed_diagnostics,
        metadata_import_options,
        nullable_context_options,
        specific_diagnostic_options,
        language,
        concurrent_build: _,
        current_local_time: _,
        ui_culture: _,
        xml_reference_resolver: _,
        source_reference_resolver: _,
        metadata_reference_resolver: _,
        assembly_identity_comparer: _,
        strong_name_provider: _,
        syntax_tree_options_provider: _,
    } = options;

    w.write_enum("outputKind", output_kind);
    w.write_opt_str("moduleName", module_name.as_deref());
    w.write_str("scriptClassName", script_class_name);
    w.write_opt_str("mainTypeName", main_type_name.as_deref());
    w.write_bytes("cryptoPublicKey", crypto_public_key);
    ctx.write_file_name(w, "cryptoKeyFile", crypto_key_file.as_deref());
    w.write_opt_str("cryptoKeyContainer", crypto_key_container.as_deref());
    w.write_opt_bool("delaySign", *delay_sign);
    w.write_bool("publicSign", *public_sign);
    w.write_bool("checkOverflow", *check_overflow);
    w.write_enum("platform", platform);
    w.write_enum("optimizationLevel", optimization_level);
    w.write_bool("debugPlusMode", *debug_plus_mode);
    w.write_enum("generalDiagnosticOption", general_diagnostic_option);
    w.write_i64("warningLevel", i64::from(*warning_level));
    w.write_bool("deterministic", *deterministic);
    w.write_bool(
        "referencesSupersedeLowerVersions",
        *references_supersede_lower_versions,
    );
    w.write_bool("reportSuppressedDiagnostics", *report_suppressed_diagnostics);
    w.write_enum("metadataImportOptions", metadata_import_options);
    w.write_enum("nullableContextOptions", nullable_context_options);

    // Insertion order, not sorted: one single-key object per override.
    w.write_key("specificDiagnosticOptions");
    w.write_array_start();
    for (id, report) in specific_diagnostic_options {
        w.write_object_start();
        w.write_enum(id, report);
        w.write_object_end();
    }
    w.write_array_end();

    w.write_enum("language", &language.language());
    match language {
        LanguageOptions::CSharp(cs) => write_csharp_options(w, cs),
        LanguageOptions::VisualBasic(vb) => write_visual_basic_options(w, vb),
    }
}

fn write_csharp_options(w: &mut CanonicalWriter, options: &CSharpOptions) {
    let CSharpOptions {
        allow_unsafe,
        top_level_binder_flags,
        global_usings,
    } = options;
    w.write_bool("allowUnsafe", *allow_unsafe);
    w.write_u64("topLevelBinderFlags", u64::from(*top_level_binder_flags));
    write_str_array(w, "globalUsings", global_usings);
}

fn write_visual_basic_options(w: &mut CanonicalWriter, options: &VisualBasicOptions) {
    let VisualBasicOptions {
        root_namespace,
        option_strict,
        option_infer,
        option_explicit,
        option_compare_text,
        embed_vb_core_runtime,
        global_imports,
    } = options;
    w.write_str("rootNamespace", root_namespace);
    w.write_enum("optionStrict", option_strict);
    w.write_bool("optionInfer", *option_infer);
    w.write_bool("optionExplicit", *option_explicit);
    w.write_bool("optionCompareText", *option_compare_text);
    w.write_bool("embedVbCoreRuntime", *embed_vb_core_runtime);
    write_str_array(w, "globalImports", global_imports);
}
