//! Analyzer and generator identities.

/// Identity of an analyzer or source generator instance.
///
/// `assembly_path` is kept for diagnostics only and never reaches the key:
/// two identically named analyzers loaded from different locations produce
/// the same key entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerIdentity {
    /// Fully qualified type name.
    pub full_name: String,
    /// Simple name of the declaring assembly.
    pub assembly_name: String,
    pub assembly_path: Option<String>,
}

impl AnalyzerIdentity {
    #[must_use]
    pub fn new(full_name: impl Into<String>, assembly_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            assembly_name: assembly_name.into(),
            assembly_path: None,
        }
    }
}

/// Generators share the analyzer identity shape.
pub type GeneratorIdentity = AnalyzerIdentity;
