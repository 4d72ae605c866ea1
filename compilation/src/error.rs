//! Typed key-generation errors.
//!
//! Every variant is fatal: key generation aborts with no partial key. These
//! are programming errors in the calling compiler driver (an unclassifiable
//! reference, inconsistent compilation inputs), never user input errors, and
//! are not retried.

use crate::model::options::Language;
use crate::model::parse_options::SourceCodeKind;

/// Fatal failure while building a key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    /// A reference kind the key schema cannot describe.
    #[error("unsupported metadata reference kind: {display}")]
    UnsupportedReference {
        /// Caller-facing description of the reference.
        display: String,
    },

    /// A PE reference whose metadata is absent, or an assembly image with no
    /// modules.
    #[error("metadata reference has no module metadata: {reference}")]
    MissingModuleMetadata {
        /// Caller-facing description of the reference.
        reference: String,
    },

    /// An assembly image with more than one module.
    #[error("multi-module assemblies are not supported: {reference} has {module_count} modules")]
    MultiModuleAssembly {
        /// Caller-facing description of the reference.
        reference: String,
        /// Number of modules in the image.
        module_count: usize,
    },

    /// A syntax tree's declared script-ness disagrees with its parse options.
    #[error("syntax tree {path}: is_script={is_script} but parse options kind is {kind:?}")]
    ScriptKindMismatch {
        /// Tree path as given by the caller.
        path: String,
        /// Declared script-ness of the tree.
        is_script: bool,
        /// Kind recorded in the tree's parse options.
        kind: SourceCodeKind,
    },

    /// A syntax tree was parsed for a different language than the compilation.
    #[error("syntax tree {path}: parsed as {actual:?}, compilation language is {expected:?}")]
    LanguageMismatch {
        /// Tree path as given by the caller.
        path: String,
        /// Language of the compilation options.
        expected: Language,
        /// Language of the tree's parse options.
        actual: Language,
    },
}
