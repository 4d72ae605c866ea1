//! The compilation snapshot and side inputs handed to the key builder.

use crate::model::analyzer::{AnalyzerIdentity, GeneratorIdentity};
use crate::model::emit_options::EmitOptions;
use crate::model::options::CompilationOptions;
use crate::model::reference::MetadataReference;
use crate::model::source::{AdditionalText, SyntaxTree};

/// Immutable compiler inputs. Owned by the caller; only borrowed during key
/// generation.
///
/// Tree and reference order is meaningful (it drives symbol-table
/// construction) and is preserved verbatim in the key.
#[derive(Debug, Clone)]
pub struct CompilationSnapshot {
    pub options: CompilationOptions,
    pub syntax_trees: Vec<SyntaxTree>,
    pub references: Vec<MetadataReference>,
    /// Strong-name public key the emitted assembly will carry, if signed.
    pub public_key: Option<Vec<u8>>,
}

impl CompilationSnapshot {
    /// A snapshot with no trees, references, or public key.
    #[must_use]
    pub fn new(options: CompilationOptions) -> Self {
        Self {
            options,
            syntax_trees: Vec::new(),
            references: Vec::new(),
            public_key: None,
        }
    }
}

/// Optional inputs outside the compilation proper.
#[derive(Debug, Clone, Default)]
pub struct AdditionalInputs {
    /// In caller order.
    pub additional_texts: Vec<AdditionalText>,
    pub analyzers: Vec<AnalyzerIdentity>,
    pub generators: Vec<GeneratorIdentity>,
    /// `None` writes an empty `emitOptions` object.
    pub emit_options: Option<EmitOptions>,
}
