//! Key Builder: composes the whole-compilation key.
//!
//! # Section order
//!
//! ```text
//! {                                  root
//!   "compilation": {
//!     "toolsVersions": {...},        {} under IGNORE_TOOL_VERSIONS
//!     "options": {...},
//!     "syntaxTrees": [...],          compilation order
//!     "references": [...],           compilation order
//!     "publicKey": "<hex>" | null
//!   },
//!   "additionalTexts": [...],        caller order
//!   "analyzers": [...],
//!   "generators": [...],
//!   "emitOptions": {...}             {} when none supplied
//! }
//! ```
//!
//! The order is a strict linear sequence and part of the key contract.
//!
//! All validation runs before the first byte is written. A failure aborts
//! with no partial key.

use std::fmt;

use detkey_kernel::canon::writer::CanonicalWriter;
use detkey_kernel::hash::{canonical_hash, ContentHash, HashDomain};
use tracing::{debug, warn};

use crate::config::KeyOptions;
use crate::error::KeyError;
use crate::model::emit_options::EmitOptions;
use crate::model::parse_options::SourceCodeKind;
use crate::model::snapshot::{AdditionalInputs, CompilationSnapshot};
use crate::serialize::analyzer::write_analyzer;
use crate::serialize::emit_options::write_emit_options_object;
use crate::serialize::options::write_compilation_options;
use crate::serialize::reference::{resolve_reference, write_reference, ResolvedReference};
use crate::serialize::source::{write_additional_text, write_syntax_tree};
use crate::serialize::KeyContext;
use crate::tool_versions::ToolVersions;

/// A finished key.
///
/// One-way: there is deliberately no parser back into a snapshot. The text is
/// UTF-8 and is persisted byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompilationKey {
    text: String,
    domain: HashDomain,
}

impl CompilationKey {
    /// The key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the key, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    /// Length of the key text in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always `false` for keys produced by this crate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Which kind of key this is.
    #[must_use]
    pub fn domain(&self) -> HashDomain {
        self.domain
    }

    /// Domain-separated SHA-256 digest of the key text.
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        canonical_hash(self.domain, self.text.as_bytes())
    }
}

impl fmt::Display for CompilationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for CompilationKey {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Build the deterministic key for `snapshot` plus `inputs`.
///
/// # Errors
///
/// - [`KeyError::ScriptKindMismatch`] / [`KeyError::LanguageMismatch`] when a
///   syntax tree is inconsistent with its parse options or the compilation.
/// - [`KeyError::UnsupportedReference`], [`KeyError::MissingModuleMetadata`],
///   [`KeyError::MultiModuleAssembly`] when a reference cannot be classified.
pub fn build_key(
    snapshot: &CompilationSnapshot,
    inputs: &AdditionalInputs,
    options: &KeyOptions,
) -> Result<CompilationKey, KeyError> {
    validate_trees(snapshot)?;
    let references = snapshot
        .references
        .iter()
        .map(resolve_reference)
        .collect::<Result<Vec<_>, _>>()?;

    if !snapshot.options.deterministic {
        warn!(
            trees = snapshot.syntax_trees.len(),
            "building key for a non-deterministic compilation; emitted bytes may differ for equal keys"
        );
    }

    let ctx = KeyContext::new(options);
    let mut w = CanonicalWriter::new(options.layout);

    w.write_object_start();

    w.write_key("compilation");
    write_compilation(&mut w, snapshot, &references, options, &ctx);

    w.write_key("additionalTexts");
    w.write_array_start();
    for text in &inputs.additional_texts {
        write_additional_text(&mut w, text, &ctx);
    }
    w.write_array_end();

    w.write_key("analyzers");
    w.write_array_start();
    for analyzer in &inputs.analyzers {
        write_analyzer(&mut w, analyzer);
    }
    w.write_array_end();

    w.write_key("generators");
    w.write_array_start();
    for generator in &inputs.generators {
        write_analyzer(&mut w, generator);
    }
    w.write_array_end();

    w.write_key("emitOptions");
    write_emit_options_object(&mut w, inputs.emit_options.as_ref(), &ctx);

    w.write_object_end();

    let key = CompilationKey {
        text: w.finish(),
        domain: HashDomain::CompilationKey,
    };
    debug!(
        trees = snapshot.syntax_trees.len(),
        references = references.len(),
        additional_texts = inputs.additional_texts.len(),
        analyzers = inputs.analyzers.len(),
        generators = inputs.generators.len(),
        redaction = options.redaction.bits(),
        key_len = key.len(),
        "built compilation key"
    );
    Ok(key)
}

/// Build a key for the emit options slice alone: one object, `{}` for
/// `None`.
#[must_use]
pub fn build_emit_options_key(emit: Option<&EmitOptions>, options: &KeyOptions) -> CompilationKey {
    let ctx = KeyContext::new(options);
    let mut w = CanonicalWriter::new(options.layout);
    write_emit_options_object(&mut w, emit, &ctx);
    CompilationKey {
        text: w.finish(),
        domain: HashDomain::EmitOptionsKey,
    }
}

fn validate_trees(snapshot: &CompilationSnapshot) -> Result<(), KeyError> {
    let expected = snapshot.options.language_kind();
    for tree in &snapshot.syntax_trees {
        let kind = tree.options.kind;
        if tree.is_script != (kind == SourceCodeKind::Script) {
            return Err(KeyError::ScriptKindMismatch {
                path: tree.path.clone(),
                is_script: tree.is_script,
                kind,
            });
        }
        if tree.options.language != expected {
            return Err(KeyError::LanguageMismatch {
                path: tree.path.clone(),
                expected,
                actual: tree.options.language,
            });
        }
    }
    Ok(())
}

fn write_compilation(
    w: &mut CanonicalWriter,
    snapshot: &CompilationSnapshot,
    references: &[ResolvedReference<'_>],
    options: &KeyOptions,
    ctx: &KeyContext<'_>,
) {
    w.write_object_start();

    w.write_key("toolsVersions");
    w.write_object_start();
    if !options.redaction.ignore_tool_versions() {
        let probed;
        let tools = match &options.tool_versions {
            Some(tools) => tools,
            None => {
                probed = ToolVersions::current();
                &probed
            }
        };
        w.write_str("compilerVersion", &tools.compiler_version);
        w.write_str("runtimeVersion", &tools.runtime_version);
        w.write_str("frameworkDescription", &tools.framework_description);
        w.write_str("osDescription", &tools.os_description);
    }
    w.write_object_end();

    w.write_key("options");
    w.write_object_start();
    write_compilation_options(w, &snapshot.options, ctx);
    w.write_object_end();

    w.write_key("syntaxTrees");
    w.write_array_start();
    for tree in &snapshot.syntax_trees {
        write_syntax_tree(w, tree, ctx);
    }
    w.write_array_end();

    w.write_key("references");
    w.write_array_start();
    for reference in references {
        write_reference(w, *reference);
    }
    w.write_array_end();

    match &snapshot.public_key {
        Some(key) => w.write_bytes("publicKey", key),
        None => w.write_null("publicKey"),
    }

    w.write_object_end();
}
